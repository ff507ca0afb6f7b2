//! Core application setup and state management.
//!
//! Handles application lifecycle, canvas configuration and plugin
//! initialisation for both native and WASM targets.

/// Plugin configuration and system scheduling for the hero scene and page bindings.
pub mod app_setup;

/// Application state machine.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Binds the hero canvas on web targets and keeps it transparent.
pub mod window_config;
