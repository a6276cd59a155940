//! Configuration constants and settings for the Treasure Hunt app
//!
//! This module contains all configurable parameters such as render resolution,
//! frame rates, splash choreography timings, and logging defaults.

/// Width of the offscreen render target in pixels
pub const RENDER_WIDTH: u32 = 800;

/// Height of the offscreen render target in pixels
pub const RENDER_HEIGHT: u32 = 600;

/// Target frames per second for the Bevy render loop
pub const TARGET_FPS: f64 = 60.0;

/// Number of pre-roll frames to skip before starting output
/// This allows the scene to fully load and stabilize
pub const PRE_ROLL_FRAMES: u32 = 30;

/// Camera control settings (rotate only, zoom and pan are disabled)
pub mod camera {
    /// Distance from the camera to the pokeball
    pub const DISTANCE: f32 = 10.0;

    /// Rotation speed multiplier for mouse drag
    pub const ROTATION_SPEED: f32 = 0.005;

    /// Maximum pitch angle (radians) to prevent camera flipping
    pub const MAX_PITCH: f32 = 1.5;

    /// Minimum pitch angle (radians) to prevent camera flipping
    pub const MIN_PITCH: f32 = -1.5;
}

/// Splash sequencer choreography
pub mod splash {
    /// Time spent rotating before the eruption starts (milliseconds)
    pub const ERUPTION_DELAY_MS: u64 = 2000;

    /// Delay between eruption start and the flash (milliseconds)
    pub const FLASH_DELAY_MS: u64 = 100;

    /// Fade-out duration of the flash overlay (milliseconds)
    pub const FLASH_DURATION_MS: u64 = 1000;

    /// Fraction of the flash duration spent ramping up to full opacity
    pub const FLASH_PEAK: f32 = 0.1;

    /// Idle spin around Y (radians per second)
    pub const SPIN_Y_RATE: f32 = 0.5;

    /// Idle spin around Z (radians per second)
    pub const SPIN_Z_RATE: f32 = 0.2;

    /// Separation speed of each half during the eruption (units per second)
    pub const SEPARATION_SPEED: f32 = 15.0;

    /// Counter-rotation speed of each half during the eruption (radians per second)
    pub const COUNTER_ROTATION_SPEED: f32 = 5.0;

    /// Multiplicative scale applied once per eruption tick
    pub const SHRINK_PER_TICK: f32 = 0.98;

    /// Displacement of the top half at which the eruption completes
    pub const DISPLACEMENT_THRESHOLD: f32 = 5.0;

    /// Radius of the pokeball shell
    pub const BALL_RADIUS: f32 = 2.0;

    /// Float rig bobbing speed
    pub const FLOAT_SPEED: f32 = 2.0;

    /// Float rig rotation intensity
    pub const FLOAT_ROTATION_INTENSITY: f32 = 1.0;

    /// Float rig vertical intensity
    pub const FLOAT_INTENSITY: f32 = 1.0;

    /// Emissive intensity of the center button once erupting
    pub const BUTTON_GLOW: f32 = 2.0;
}

/// Background starfield
pub mod stars {
    /// Inner radius of the star shell
    pub const RADIUS: f32 = 100.0;

    /// Thickness of the star shell
    pub const DEPTH: f32 = 50.0;

    /// Number of stars spawned
    pub const COUNT: usize = 600;

    /// Base size of a star
    pub const SIZE: f32 = 0.25;
}

/// Image compression settings
pub mod compression {
    /// JPEG quality level (0-100, higher = better quality but larger size)
    pub const JPEG_QUALITY: u8 = 85;
}

/// Logging settings
pub mod logging {
    /// Filter used when `RUST_LOG` is not set
    pub const DEFAULT_FILTER: &str = "info,treasure_hunt_lib=debug";

    /// Interval for printing frame delivery stats (seconds)
    pub const STATS_PRINT_INTERVAL: f64 = 2.0;
}
