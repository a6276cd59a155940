//! Animation systems
//!
//! This module drives the splash sequencer once per frame and copies its
//! pose onto the pokeball entities. The sequencer resource only exists while
//! the splash screen is active, so each system tolerates its absence.

use bevy::{prelude::*, time::Time};
use tracing::{debug, info};

use crate::bevy::components::{FloatRig, PokeballPart, SplashEntity};
use crate::bevy::messages::{EruptionStarted, SplashFinished};
use crate::bevy::resources::{PreRollFrames, SplashSequence, SplashStateRes};
use crate::splash::{FloatMotion, SplashPhase, SplashSnapshot};

/// Mount a fresh sequencer when the splash screen is entered
pub fn start_sequence(mut commands: Commands) {
    commands.insert_resource(SplashSequence::default());
    debug!("Splash sequencer mounted");
}

/// Drop the sequencer and every splash entity when the screen is left
///
/// Pending eruption and flash timers go away with the resource.
pub fn teardown_splash(
    mut commands: Commands,
    entities: Query<Entity, With<SplashEntity>>,
    splash_state: Option<Res<SplashStateRes>>,
) {
    commands.remove_resource::<SplashSequence>();
    for entity in &entities {
        commands.entity(entity).despawn();
    }
    if let Some(state) = splash_state {
        if let Ok(mut guard) = state.0 .0.lock() {
            *guard = SplashSnapshot::default();
        }
    }
    debug!("Splash torn down");
}

/// Start the sequence once the render pipeline has warmed up
pub fn activate_when_ready(
    pre_roll: Option<Res<PreRollFrames>>,
    sequence: Option<ResMut<SplashSequence>>,
) {
    let Some(mut sequence) = sequence else {
        return;
    };
    if sequence.phase() != SplashPhase::Idle || pre_roll.is_some_and(|p| p.0 > 0) {
        return;
    }
    sequence.activate();
    info!("Splash sequence started");
}

pub fn advance_sequence(
    time: Res<Time>,
    sequence: Option<ResMut<SplashSequence>>,
    mut eruptions: MessageWriter<EruptionStarted>,
    mut finished: MessageWriter<SplashFinished>,
) {
    let Some(mut sequence) = sequence else {
        return;
    };
    let outcome = sequence.tick(time.delta());

    if outcome.eruption_started {
        info!(elapsed_ms = sequence.elapsed().as_millis() as u64, "Eruption started");
        eruptions.write(EruptionStarted);
    }
    if outcome.flash_started {
        debug!("Flash fired");
    }
    if outcome.completed {
        info!(elapsed_ms = sequence.elapsed().as_millis() as u64, "Splash complete");
        finished.write(SplashFinished);
    }
}

/// Copy the sequencer pose onto the pokeball transforms
pub fn apply_pose(
    sequence: Option<Res<SplashSequence>>,
    mut parts: Query<(&mut Transform, &PokeballPart)>,
) {
    let Some(sequence) = sequence else {
        return;
    };
    let pose = sequence.pose();

    for (mut transform, part) in parts.iter_mut() {
        match part {
            PokeballPart::Root => {
                transform.rotation =
                    Quat::from_euler(EulerRot::XYZ, 0.0, pose.spin_y, pose.spin_z);
                transform.scale = Vec3::splat(pose.scale);
            }
            PokeballPart::TopHalf => {
                transform.translation.y = pose.displacement;
                transform.rotation = Quat::from_rotation_x(-pose.tilt);
            }
            PokeballPart::BottomHalf => {
                transform.translation.y = -pose.displacement;
                transform.rotation = Quat::from_rotation_x(pose.tilt);
            }
        }
    }
}

pub fn bob_float_rig(
    time: Res<Time>,
    motion: Local<FloatMotion>,
    mut rigs: Query<&mut Transform, With<FloatRig>>,
) {
    let sample = motion.sample(time.elapsed_secs());
    for mut transform in rigs.iter_mut() {
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            sample.rotation.x,
            sample.rotation.y,
            sample.rotation.z,
        );
        transform.translation.y = sample.lift;
    }
}

/// Publish the sequencer state for the frontend overlays
pub fn publish_snapshot(
    sequence: Option<Res<SplashSequence>>,
    splash_state: Option<Res<SplashStateRes>>,
) {
    let (Some(sequence), Some(state)) = (sequence, splash_state) else {
        return;
    };
    if let Ok(mut guard) = state.0 .0.lock() {
        *guard = sequence.snapshot();
    };
}
