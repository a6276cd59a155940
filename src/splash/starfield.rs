//! Deterministic layout of the background starfield

use std::f32::consts::PI;

use bevy::math::Vec3;

/// Cheap integer hash mapped to `[0, 1]`
fn jitter(index: u32) -> f32 {
    let mut x = index.wrapping_mul(0x9E37_79B9) ^ 0x85EB_CA6B;
    x ^= x >> 16;
    x = x.wrapping_mul(0x7FEB_352D);
    x ^= x >> 15;
    x as f32 / u32::MAX as f32
}

/// Spread `count` stars over a shell starting at `radius` and `depth` thick
///
/// Directions follow a Fibonacci sphere so the sky has no visible poles.
pub fn star_positions(count: usize, radius: f32, depth: f32) -> Vec<Vec3> {
    let golden_angle = PI * (3.0 - 5.0_f32.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f32 + 0.5) / count as f32;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f32;
            let direction = Vec3::new(theta.cos() * ring, y, theta.sin() * ring);
            direction * (radius + depth * jitter(i as u32))
        })
        .collect()
}

/// Per-star size multiplier in `[0.5, 1.5]`
pub fn star_scale(index: usize) -> f32 {
    0.5 + jitter(index as u32 ^ 0xA5A5_A5A5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_within_shell() {
        let stars = star_positions(500, 100.0, 50.0);
        assert_eq!(stars.len(), 500);
        for star in &stars {
            let distance = star.length();
            assert!((100.0 - 1e-3..=150.0 + 1e-3).contains(&distance));
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(star_positions(64, 10.0, 5.0), star_positions(64, 10.0, 5.0));
        assert!(star_positions(0, 10.0, 5.0).is_empty());
    }
}
