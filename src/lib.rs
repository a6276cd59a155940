//! Treasure Hunt: Bevy-rendered splash and dashboard in a Tauri shell
//!
//! A pokeball spins, erupts in a white flash, and hands over to a dashboard
//! with a login/signup modal. Bevy renders the splash offscreen on a
//! background thread. Frames reach the webview through the `frame://`
//! protocol, and everything with rules (sequencing, navigation, the form)
//! lives on the Rust side.
//!
//! # Module Structure
//!
//! - `config`: Configuration constants and settings
//! - `error`: Form and navigation errors
//! - `splash`: Engine-independent splash choreography
//! - `auth`: Login/signup form state and the credential sink
//! - `dashboard`: Dashboard modal state
//! - `router`: Routes and the mounted screen
//! - `tauri_bridge`: Bridge layer between Tauri and Bevy
//!   - `shared_state`: Thread-safe data structures
//!   - `commands`: Tauri command handlers
//!   - `protocol`: Custom protocol handlers
//! - `bevy`: Bevy engine integration
//!   - `components`, `resources`, `messages`, `screen`: ECS data
//!   - `plugins`: Splash logic, render stage, GPU frame copy
//!   - `systems`: Sequencing, navigation, camera, scene, frame extraction
//!   - `app`: Application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Module declarations
mod auth;
mod bevy;
mod config;
mod dashboard;
mod error;
mod router;
mod splash;
mod tauri_bridge;

use std::{thread, time::Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::bevy::app::BevyBridge;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::logging::DEFAULT_FILTER));
    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Main entry point for the Tauri application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();
    info!("Starting Treasure Hunt");

    let bridge = BevyBridge::default();

    // Start Bevy in background thread
    bevy::start_bevy(bridge.clone());

    // Give Bevy a moment to build the render graph
    thread::sleep(Duration::from_millis(1000));

    let protocol_buffer = bridge.frame_buffer.clone();
    let protocol_splash = bridge.splash_state.clone();

    let result = tauri::Builder::default()
        .manage(bridge.frame_buffer)
        .manage(bridge.mouse_input)
        .manage(bridge.navigator)
        .manage(bridge.splash_state)
        // Register custom protocol "frame://" for direct binary transfer
        .register_asynchronous_uri_scheme_protocol("frame", move |_ctx, request, responder| {
            let buffer = protocol_buffer.clone();
            let splash = protocol_splash.clone();

            // Encoding can take a few milliseconds, keep it off the event loop
            std::thread::spawn(move || {
                let response = tauri_bridge::protocol::handle_frame_protocol(
                    request.uri().path(),
                    &buffer,
                    &splash,
                );
                responder.respond(response);
            });
        })
        .invoke_handler(tauri::generate_handler![
            tauri_bridge::commands::get_frame,
            tauri_bridge::commands::get_render_size,
            tauri_bridge::commands::send_mouse_input,
            tauri_bridge::commands::navigate,
            tauri_bridge::commands::current_route,
            tauri_bridge::commands::get_splash_state,
            tauri_bridge::commands::get_dashboard,
            tauri_bridge::commands::toggle_auth,
            tauri_bridge::commands::open_auth,
            tauri_bridge::commands::close_auth,
            tauri_bridge::commands::set_auth_mode,
            tauri_bridge::commands::update_auth_field,
            tauri_bridge::commands::submit_auth,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!(error = %e, "Tauri exited with an error");
    }
}
