//! Bevy plugins
//!
//! This module contains custom Bevy plugins that extend the engine's
//! functionality for the splash screen.

pub mod image_copy;
pub mod splash;
pub mod stage;

pub use image_copy::ImageCopyPlugin;
pub use splash::SplashPlugin;
pub use stage::StagePlugin;
