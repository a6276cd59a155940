//! Screen states mirrored from the navigator

use bevy::prelude::*;

use crate::router::Route;

#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Splash,
    Dashboard,
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        match route {
            Route::Splash => Screen::Splash,
            Route::Dashboard => Screen::Dashboard,
        }
    }
}
