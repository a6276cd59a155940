//! Messages emitted by the splash sequencer systems

use bevy::prelude::*;

/// The pokeball has started to erupt
#[derive(Message, Debug, Clone, Copy)]
pub struct EruptionStarted;

/// The eruption crossed its displacement threshold. Sent once per splash.
#[derive(Message, Debug, Clone, Copy)]
pub struct SplashFinished;
