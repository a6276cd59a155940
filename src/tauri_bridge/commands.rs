//! Tauri command handlers
//!
//! This module contains all the Tauri command functions that can be invoked
//! from the frontend JavaScript/TypeScript code.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;
use tauri::State;
use tracing::{debug, info};

use super::shared_state::{
    FrameResponse, SharedFrameBuffer, SharedMouseInput, SharedNavigator, SharedSplashState,
};
use crate::auth::{AuthField, AuthMode, TracingSink};
use crate::config::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::dashboard::DashboardState;
use crate::router::Route;
use crate::splash::SplashSnapshot;

// =============================================================================
// Rendering
// =============================================================================

/// Get the current rendered frame as Base64-encoded RGBA data
#[tauri::command]
pub fn get_frame(state: State<SharedFrameBuffer>) -> Result<FrameResponse, String> {
    let guard = state.0.lock().map_err(|e| e.to_string())?;
    match &*guard {
        Some(rgba_data) => Ok(FrameResponse {
            data: STANDARD.encode(rgba_data),
            width: RENDER_WIDTH,
            height: RENDER_HEIGHT,
        }),
        None => Err("No frame yet (scene still loading)".into()),
    }
}

/// Get the render resolution
#[tauri::command]
pub fn get_render_size() -> (u32, u32) {
    (RENDER_WIDTH, RENDER_HEIGHT)
}

/// Receive mouse input from frontend for camera control
/// Input deltas are accumulated until consumed by Bevy
#[tauri::command]
pub fn send_mouse_input(
    state: State<SharedMouseInput>,
    delta_x: f32,
    delta_y: f32,
    left_button: bool,
) -> Result<(), String> {
    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    guard.delta_x += delta_x;
    guard.delta_y += delta_y;
    guard.left_button = left_button;
    Ok(())
}

// =============================================================================
// Navigation & Splash
// =============================================================================

#[derive(Serialize)]
pub struct RouteResponse {
    pub route: Route,
    pub path: &'static str,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            route,
            path: route.path(),
        }
    }
}

/// Mount the screen for `path`
#[tauri::command]
pub fn navigate(state: State<SharedNavigator>, path: String) -> Result<RouteResponse, String> {
    let route = path.parse::<Route>().map_err(|e| e.to_string())?;
    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    if guard.navigate(route) {
        info!(path = route.path(), "Navigated");
    }
    Ok(route.into())
}

#[tauri::command]
pub fn current_route(state: State<SharedNavigator>) -> Result<RouteResponse, String> {
    let guard = state.0.lock().map_err(|e| e.to_string())?;
    Ok(guard.route().into())
}

/// Latest splash sequencer snapshot, used for the flash and loading overlays
#[tauri::command]
pub fn get_splash_state(state: State<SharedSplashState>) -> Result<SplashSnapshot, String> {
    let guard = state.0.lock().map_err(|e| e.to_string())?;
    Ok(guard.clone())
}

// =============================================================================
// Dashboard & Login Form
// =============================================================================

/// Run `f` against the mounted dashboard and return its new state
fn with_dashboard(
    state: &SharedNavigator,
    f: impl FnOnce(&mut DashboardState) -> Result<(), String>,
) -> Result<DashboardState, String> {
    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    let dashboard = guard.dashboard_mut().map_err(|e| e.to_string())?;
    f(dashboard)?;
    Ok(dashboard.clone())
}

#[tauri::command]
pub fn get_dashboard(state: State<SharedNavigator>) -> Result<DashboardState, String> {
    with_dashboard(&state, |_| Ok(()))
}

/// Navbar Login/Close button
#[tauri::command]
pub fn toggle_auth(state: State<SharedNavigator>) -> Result<DashboardState, String> {
    with_dashboard(&state, |dashboard| {
        dashboard.toggle_auth();
        Ok(())
    })
}

/// "Start Your Journey" call to action
#[tauri::command]
pub fn open_auth(state: State<SharedNavigator>) -> Result<DashboardState, String> {
    with_dashboard(&state, |dashboard| {
        dashboard.open_auth();
        Ok(())
    })
}

/// Overlay click or close button
#[tauri::command]
pub fn close_auth(state: State<SharedNavigator>) -> Result<DashboardState, String> {
    with_dashboard(&state, |dashboard| {
        dashboard.close_auth();
        Ok(())
    })
}

#[tauri::command]
pub fn set_auth_mode(
    state: State<SharedNavigator>,
    mode: AuthMode,
) -> Result<DashboardState, String> {
    with_dashboard(&state, |dashboard| {
        dashboard.form_mut().map_err(|e| e.to_string())?.set_mode(mode);
        Ok(())
    })
}

#[tauri::command]
pub fn update_auth_field(
    state: State<SharedNavigator>,
    field: AuthField,
    value: String,
) -> Result<DashboardState, String> {
    with_dashboard(&state, |dashboard| {
        dashboard
            .form_mut()
            .and_then(|form| form.update(field, value))
            .map_err(|e| e.to_string())
    })
}

/// Submit the login form. A password mismatch comes back as the error text
/// shown to the user.
#[tauri::command]
pub fn submit_auth(state: State<SharedNavigator>) -> Result<DashboardState, String> {
    with_dashboard(&state, |dashboard| {
        dashboard
            .submit(&mut TracingSink)
            .map(|_| debug!("Login modal closed after submit"))
            .map_err(|e| e.to_string())
    })
}
