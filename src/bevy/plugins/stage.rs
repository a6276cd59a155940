//! Rendering side of the app: scene meshes, camera, and frame delivery

use bevy::prelude::*;

use crate::bevy::plugins::ImageCopyPlugin;
use crate::bevy::screen::Screen;
use crate::bevy::systems::{
    camera::{reset_orbit, update_camera_from_input},
    frame_extraction::extract_and_process_frame,
    scene::{
        ignite_center_button, pause_readback, resume_readback, setup_stage, spawn_splash_scene,
    },
};

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ImageCopyPlugin)
            .add_systems(Startup, setup_stage)
            .add_systems(
                OnEnter(Screen::Splash),
                (spawn_splash_scene, reset_orbit, resume_readback),
            )
            .add_systems(OnExit(Screen::Splash), pause_readback)
            .add_systems(
                Update,
                (ignite_center_button, update_camera_from_input)
                    .run_if(in_state(Screen::Splash)),
            )
            .add_systems(
                Last,
                extract_and_process_frame.run_if(in_state(Screen::Splash)),
            );
    }
}
