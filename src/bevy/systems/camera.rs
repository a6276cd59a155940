//! Camera control system
//!
//! This module implements orbit camera controls that respond to mouse input
//! from the frontend. Only rotation is supported: zoom and pan are disabled
//! on the splash screen.

use bevy::{math::Vec3, prelude::*};

use crate::bevy::components::CameraController;
use crate::bevy::resources::{MouseInputRes, OrbitCameraState};
use crate::config::camera::*;

/// Put the orbit back to its resting position when the splash is mounted
pub fn reset_orbit(mut orbit_state: ResMut<OrbitCameraState>) {
    *orbit_state = OrbitCameraState::default();
}

/// Update camera transform based on mouse input
/// Left button drag rotates the camera (yaw/pitch) around the pokeball
pub fn update_camera_from_input(
    mouse_input_res: Option<Res<MouseInputRes>>,
    mut orbit_state: ResMut<OrbitCameraState>,
    mut camera_query: Query<&mut Transform, With<CameraController>>,
) {
    let Some(mouse_res) = mouse_input_res else {
        return;
    };

    // Read and clear accumulated input
    let input = {
        let mut guard = match mouse_res.0 .0.lock() {
            Ok(g) => g,
            Err(_) => return,
        };
        let input = guard.clone();
        guard.delta_x = 0.0;
        guard.delta_y = 0.0;
        input
    };

    if input.left_button && (input.delta_x != 0.0 || input.delta_y != 0.0) {
        orbit_state.yaw -= input.delta_x * ROTATION_SPEED;
        orbit_state.pitch -= input.delta_y * ROTATION_SPEED;

        // Clamp pitch to prevent camera flipping
        orbit_state.pitch = orbit_state.pitch.clamp(MIN_PITCH, MAX_PITCH);
    }

    for mut transform in camera_query.iter_mut() {
        *transform = orbit_transform(&orbit_state);
    }
}

/// Camera placement on the sphere described by the orbit state
pub fn orbit_transform(orbit_state: &OrbitCameraState) -> Transform {
    let x = orbit_state.distance * orbit_state.pitch.cos() * orbit_state.yaw.sin();
    let y = orbit_state.distance * orbit_state.pitch.sin();
    let z = orbit_state.distance * orbit_state.pitch.cos() * orbit_state.yaw.cos();

    Transform::from_translation(orbit_state.center + Vec3::new(x, y, z))
        .looking_at(orbit_state.center, Vec3::Y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_orbit_faces_ball() {
        let transform = orbit_transform(&OrbitCameraState::default());
        assert!((transform.translation - Vec3::new(0.0, 0.0, DISTANCE)).length() < 1e-5);
        assert!((transform.forward().as_vec3() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let orbit = OrbitCameraState {
            yaw: 1.2,
            pitch: MAX_PITCH,
            ..default()
        };
        let transform = orbit_transform(&orbit);
        assert!((transform.translation.length() - DISTANCE).abs() < 1e-4);
    }
}
