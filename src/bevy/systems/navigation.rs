//! Navigation systems
//!
//! The navigator shared with Tauri owns the active route. These systems
//! redirect it when the splash finishes and move the Bevy screen state to
//! whatever route it holds.

use bevy::prelude::*;
use tracing::info;

use crate::bevy::messages::SplashFinished;
use crate::bevy::resources::NavigatorRes;
use crate::bevy::screen::Screen;
use crate::router::Route;

/// Client-side redirect to the dashboard once the splash completes
pub fn redirect_on_finish(
    mut finished: MessageReader<SplashFinished>,
    navigator: Option<Res<NavigatorRes>>,
) {
    if finished.read().count() == 0 {
        return;
    }
    let Some(navigator) = navigator else {
        return;
    };
    let Ok(mut guard) = navigator.0 .0.lock() else {
        return;
    };
    if guard.navigate(Route::Dashboard) {
        info!(path = Route::Dashboard.path(), "Redirecting after splash");
    }
}

/// Keep the Bevy screen state in step with the navigator
pub fn follow_navigation(
    navigator: Option<Res<NavigatorRes>>,
    screen: Res<State<Screen>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    let Some(navigator) = navigator else {
        return;
    };
    let route = match navigator.0 .0.lock() {
        Ok(guard) => guard.route(),
        Err(_) => return,
    };

    let target = Screen::from(route);
    if *screen.get() != target {
        next_screen.set(target);
    }
}
