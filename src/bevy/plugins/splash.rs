//! Splash sequencing and screen navigation
//!
//! Needs nothing from the renderer, so it also runs under `MinimalPlugins`.

use bevy::prelude::*;

use crate::bevy::messages::{EruptionStarted, SplashFinished};
use crate::bevy::screen::Screen;
use crate::bevy::systems::animation::{
    activate_when_ready, advance_sequence, apply_pose, bob_float_rig, publish_snapshot,
    start_sequence, teardown_splash,
};
use crate::bevy::systems::navigation::{follow_navigation, redirect_on_finish};

pub struct SplashPlugin;

impl Plugin for SplashPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Screen>()
            .add_message::<EruptionStarted>()
            .add_message::<SplashFinished>()
            .add_systems(OnEnter(Screen::Splash), start_sequence)
            .add_systems(OnExit(Screen::Splash), teardown_splash)
            .add_systems(
                Update,
                (
                    (
                        activate_when_ready,
                        advance_sequence,
                        apply_pose,
                        bob_float_rig,
                        publish_snapshot,
                    )
                        .chain()
                        .run_if(in_state(Screen::Splash)),
                    redirect_on_finish,
                    follow_navigation,
                )
                    .chain(),
            );
    }
}
