//! Host process controller for Cellar.
//!
//! Owns the single main window: creation, content loading, the development
//! reload retry, navigation and new-window guards, and the quit policy.
//! The windowing subsystem sits behind [`WindowingSystem`] / [`NativeWindow`]
//! so the controller runs the same against winit + wry and against the
//! in-memory fake in [`testing`].

pub mod controller;
pub mod navigation;
pub mod retry;
pub mod target;
pub mod window;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use controller::{HostSettings, LifecycleDirective, MainWindowController};
pub use navigation::{is_navigation_allowed, NavigationGuard, ALLOWED_ORIGINS};
pub use retry::RetryPolicy;
pub use target::WindowTarget;
pub use window::{
    centered_position, LoadTarget, NativeWindow, Position, SecurityPosture, Size, WindowSpec,
    WindowingSystem,
};
