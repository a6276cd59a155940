//! Client-side routes and the screen currently mounted

use std::str::FromStr;

use serde::Serialize;

use crate::dashboard::DashboardState;
use crate::error::RouteError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Splash,
    Dashboard,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Splash => "/",
            Route::Dashboard => "/dashboard",
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Ok(Route::Splash),
            "/dashboard" => Ok(Route::Dashboard),
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }
}

/// Screen state bound to the active route
#[derive(Debug, Clone, PartialEq, Eq)]
enum ActiveScreen {
    /// Splash state lives in the Bevy world for as long as this route is active
    Splash,
    Dashboard(DashboardState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    screen: ActiveScreen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            screen: ActiveScreen::Splash,
        }
    }
}

impl Navigator {
    pub fn route(&self) -> Route {
        match self.screen {
            ActiveScreen::Splash => Route::Splash,
            ActiveScreen::Dashboard(_) => Route::Dashboard,
        }
    }

    /// Mount the screen for `route`, returning whether anything changed
    ///
    /// Navigating to the active route keeps its screen state.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.route() == route {
            return false;
        }
        self.screen = match route {
            Route::Splash => ActiveScreen::Splash,
            Route::Dashboard => ActiveScreen::Dashboard(DashboardState::default()),
        };
        true
    }

    pub fn dashboard(&self) -> Option<&DashboardState> {
        match &self.screen {
            ActiveScreen::Dashboard(state) => Some(state),
            ActiveScreen::Splash => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Result<&mut DashboardState, RouteError> {
        match &mut self.screen {
            ActiveScreen::Dashboard(state) => Ok(state),
            ActiveScreen::Splash => Err(RouteError::NotOnDashboard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Splash));
        assert_eq!("".parse::<Route>(), Ok(Route::Splash));
        assert_eq!("/dashboard".parse::<Route>(), Ok(Route::Dashboard));
        assert_eq!("/dashboard/?tab=1".parse::<Route>(), Ok(Route::Dashboard));
        assert_eq!(
            "/settings".parse::<Route>(),
            Err(RouteError::Unknown("/settings".into()))
        );
    }

    #[test]
    fn test_paths_round_trip() {
        for route in [Route::Splash, Route::Dashboard] {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_navigate_mounts_fresh_dashboard() {
        let mut nav = Navigator::default();
        assert_eq!(nav.route(), Route::Splash);
        assert!(nav.dashboard_mut().is_err());

        assert!(nav.navigate(Route::Dashboard));
        nav.dashboard_mut().unwrap().open_auth();

        // Same route keeps the mounted state
        assert!(!nav.navigate(Route::Dashboard));
        assert!(nav.dashboard().unwrap().is_auth_open());

        assert!(nav.navigate(Route::Splash));
        assert!(nav.dashboard().is_none());
        assert!(nav.navigate(Route::Dashboard));
        assert!(!nav.dashboard().unwrap().is_auth_open());
    }
}
