//! Bevy component definitions
//!
//! This module contains all component markers and data structures used
//! to tag and identify entities in the Bevy ECS (Entity Component System).

use bevy::prelude::*;

/// Marker component for the offscreen rendering camera
///
/// Entities with this component are cameras that render to an offscreen
/// texture instead of a window.
#[derive(Component)]
pub struct OffscreenCamera;

/// Marker component for cameras that can be controlled by user input
///
/// Entities with this component will respond to mouse input for
/// orbit camera control (rotation only).
#[derive(Component)]
pub struct CameraController;

/// Marker for every entity that belongs to the splash screen
///
/// All of them are despawned when the splash screen is left.
#[derive(Component)]
pub struct SplashEntity;

/// Parent of the pokeball that bobs gently while the sequence plays
#[derive(Component)]
pub struct FloatRig;

/// Pokeball parts whose transforms are driven by the sequencer
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PokeballPart {
    /// Group holding the whole ball: spins, then shrinks
    Root,
    TopHalf,
    BottomHalf,
}

/// The white lens in the center button, lit up when the eruption starts
#[derive(Component)]
pub struct CenterButtonLens;

/// Parent of the background stars
#[derive(Component)]
pub struct Starfield;
