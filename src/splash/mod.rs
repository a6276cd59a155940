//! Splash screen choreography
//!
//! Engine-independent state for the pokeball splash. The Bevy systems in
//! `crate::bevy` copy this state onto entity transforms every frame.

pub mod float;
pub mod sequencer;
pub mod starfield;

pub use float::FloatMotion;
pub use sequencer::{Sequencer, SplashPhase, SplashSnapshot};
