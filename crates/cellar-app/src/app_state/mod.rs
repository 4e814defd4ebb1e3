//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Wires the host controller, the bridge registry and the
//! webview event queue together.

mod bridge;
mod core;
mod event_handler;
mod polling;
mod types;

pub use core::CellarApp;
pub use types::HostEvent;
