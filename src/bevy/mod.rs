//! Bevy engine integration
//!
//! This module contains all Bevy-related code including components,
//! resources, systems, plugins, and application setup.

pub mod app;
pub mod components;
pub mod messages;
pub mod plugins;
pub mod resources;
pub mod screen;
pub mod systems;

// Re-export commonly used items
pub use app::start_bevy;
