//! Gentle bobbing applied to the rig that carries the pokeball

use bevy::math::Vec3;

use crate::config::splash::{FLOAT_INTENSITY, FLOAT_ROTATION_INTENSITY, FLOAT_SPEED};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            speed: FLOAT_SPEED,
            rotation_intensity: FLOAT_ROTATION_INTENSITY,
            float_intensity: FLOAT_INTENSITY,
        }
    }
}

/// Offset of the float rig at a point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatSample {
    /// Euler angles (XYZ order) in radians
    pub rotation: Vec3,
    pub lift: f32,
}

impl FloatMotion {
    pub fn sample(&self, seconds: f32) -> FloatSample {
        let t = seconds / 4.0 * self.speed;
        FloatSample {
            rotation: Vec3::new(t.cos() / 8.0, t.sin() / 8.0, t.sin() / 20.0)
                * self.rotation_intensity,
            lift: t.sin() / 10.0 * self.float_intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_at_rest() {
        let sample = FloatMotion::default().sample(0.0);
        assert!((sample.rotation.x - 0.125).abs() < 1e-6);
        assert_eq!(sample.rotation.y, 0.0);
        assert_eq!(sample.lift, 0.0);
    }

    #[test]
    fn test_sample_stays_bounded() {
        let motion = FloatMotion::default();
        for step in 0..200 {
            let sample = motion.sample(step as f32 * 0.1);
            assert!(sample.lift.abs() <= 0.1 + 1e-6);
            assert!(sample.rotation.abs().max_element() <= 0.125 + 1e-6);
        }
    }
}
