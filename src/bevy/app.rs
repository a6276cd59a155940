//! Bevy application setup and execution
//!
//! This module handles the creation and configuration of the Bevy app,
//! including plugin registration and resource wiring.

use bevy::{
    app::{App, ScheduleRunnerPlugin},
    prelude::*,
    window::ExitCondition,
};
use std::thread;
use std::time::Duration;
use tracing::info;

use crate::bevy::plugins::{SplashPlugin, StagePlugin};
use crate::bevy::resources::*;
use crate::config::{PRE_ROLL_FRAMES, TARGET_FPS};
use crate::tauri_bridge::shared_state::{
    SharedFrameBuffer, SharedMouseInput, SharedNavigator, SharedSplashState,
};

/// Handles shared between the Bevy thread and Tauri
#[derive(Clone, Default)]
pub struct BevyBridge {
    pub frame_buffer: SharedFrameBuffer,
    pub mouse_input: SharedMouseInput,
    pub navigator: SharedNavigator,
    pub splash_state: SharedSplashState,
}

/// Create and configure the Bevy application
pub fn create_app(bridge: BevyBridge) -> App {
    let mut app = App::new();

    // Use DefaultPlugins but configure for headless operation
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: None,
                exit_condition: ExitCondition::DontExit,
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    );

    // Add schedule runner for controlled frame rate
    app.add_plugins(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
        1.0 / TARGET_FPS,
    )));

    // Insert resources
    app.insert_resource(FrameBufferRes(bridge.frame_buffer));
    app.insert_resource(MouseInputRes(bridge.mouse_input));
    app.insert_resource(NavigatorRes(bridge.navigator));
    app.insert_resource(SplashStateRes(bridge.splash_state));
    app.insert_resource(OrbitCameraState::default());
    app.insert_resource(FrameCount::default());
    app.insert_resource(PreRollFrames(PRE_ROLL_FRAMES));
    app.insert_resource(FrameLog::default());
    app.insert_resource(FrameRateLimiter::new(TARGET_FPS));

    // Splash logic first: it registers the screen state the stage depends on
    app.add_plugins((SplashPlugin, StagePlugin));

    info!("Bevy app configured (headless)");
    app
}

/// Start Bevy in a background thread
pub fn start_bevy(bridge: BevyBridge) {
    thread::spawn(move || {
        info!("Bevy thread started");
        let mut app = create_app(bridge);
        app.run();
    });
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;
    use bevy::time::TimeUpdateStrategy;

    use super::*;
    use crate::bevy::components::{PokeballPart, SplashEntity};
    use crate::bevy::screen::Screen;
    use crate::router::Route;
    use crate::splash::SplashPhase;

    const FRAME: Duration = Duration::from_millis(20);

    /// Splash logic without the renderer, stepped at a fixed frame time
    fn logic_app(bridge: &BevyBridge) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
            .insert_resource(NavigatorRes(bridge.navigator.clone()))
            .insert_resource(SplashStateRes(bridge.splash_state.clone()))
            .add_plugins(SplashPlugin);
        app
    }

    fn spawn_parts(app: &mut App) {
        for part in [
            PokeballPart::Root,
            PokeballPart::TopHalf,
            PokeballPart::BottomHalf,
        ] {
            app.world_mut()
                .spawn((Transform::default(), part, SplashEntity));
        }
    }

    fn route(bridge: &BevyBridge) -> Route {
        bridge.navigator.0.lock().unwrap().route()
    }

    fn screen(app: &App) -> Screen {
        *app.world().resource::<State<Screen>>().get()
    }

    #[test]
    fn test_splash_runs_to_dashboard() {
        let bridge = BevyBridge::default();
        let mut app = logic_app(&bridge);
        app.update();
        spawn_parts(&mut app);

        let mut saw_flash = false;
        for _ in 0..300 {
            app.update();
            let snapshot = bridge.splash_state.0.lock().unwrap().clone();
            saw_flash |= snapshot.flash_opacity > 0.0;
            if screen(&app) == Screen::Dashboard {
                break;
            }
        }

        assert!(saw_flash);
        assert_eq!(route(&bridge), Route::Dashboard);
        assert_eq!(screen(&app), Screen::Dashboard);
        assert!(app.world().get_resource::<SplashSequence>().is_none());

        let mut splash_entities = app
            .world_mut()
            .query_filtered::<Entity, With<SplashEntity>>();
        assert_eq!(splash_entities.iter(app.world()).count(), 0);
        // Stale completion must not leak into the next visit
        assert!(!bridge.splash_state.0.lock().unwrap().finished);
    }

    #[test]
    fn test_pose_reaches_transforms() {
        let bridge = BevyBridge::default();
        let mut app = logic_app(&bridge);
        app.update();
        spawn_parts(&mut app);

        // Past the eruption delay but well before completion
        for _ in 0..110 {
            app.update();
        }
        let phase = app.world().resource::<SplashSequence>().phase();
        assert!(matches!(phase, SplashPhase::Erupting | SplashPhase::Flashing));

        let mut parts = app.world_mut().query::<(&Transform, &PokeballPart)>();
        for (transform, part) in parts.iter(app.world()) {
            match part {
                PokeballPart::Root => assert!(transform.scale.x < 1.0),
                PokeballPart::TopHalf => assert!(transform.translation.y > 0.0),
                PokeballPart::BottomHalf => assert!(transform.translation.y < 0.0),
            }
        }
    }

    #[test]
    fn test_leaving_mid_animation_releases_sequencer() {
        let bridge = BevyBridge::default();
        let mut app = logic_app(&bridge);
        app.update();
        spawn_parts(&mut app);
        for _ in 0..10 {
            app.update();
        }
        assert!(app.world().get_resource::<SplashSequence>().is_some());

        bridge.navigator.0.lock().unwrap().navigate(Route::Dashboard);
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(screen(&app), Screen::Dashboard);
        assert!(app.world().get_resource::<SplashSequence>().is_none());

        let mut splash_entities = app
            .world_mut()
            .query_filtered::<Entity, With<SplashEntity>>();
        assert_eq!(splash_entities.iter(app.world()).count(), 0);

        // Long after the eruption would have fired, nothing redirects or restarts
        for _ in 0..200 {
            app.update();
        }
        assert_eq!(route(&bridge), Route::Dashboard);
        assert!(app.world().get_resource::<SplashSequence>().is_none());
    }

    #[test]
    fn test_returning_to_splash_restarts_sequence() {
        let bridge = BevyBridge::default();
        let mut app = logic_app(&bridge);
        app.update();
        bridge.navigator.0.lock().unwrap().navigate(Route::Dashboard);
        for _ in 0..3 {
            app.update();
        }

        bridge.navigator.0.lock().unwrap().navigate(Route::Splash);
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(screen(&app), Screen::Splash);
        let sequence = app.world().resource::<SplashSequence>();
        assert_eq!(sequence.phase(), SplashPhase::Rotating);
        assert!(sequence.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_waits_for_pre_roll() {
        let bridge = BevyBridge::default();
        let mut app = logic_app(&bridge);
        app.insert_resource(PreRollFrames(5));
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(
            app.world().resource::<SplashSequence>().phase(),
            SplashPhase::Idle
        );

        app.world_mut().resource_mut::<PreRollFrames>().0 = 0;
        app.update();
        assert_eq!(
            app.world().resource::<SplashSequence>().phase(),
            SplashPhase::Rotating
        );
    }
}
