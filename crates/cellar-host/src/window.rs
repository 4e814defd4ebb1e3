//! The windowing subsystem seam.

use std::fmt;
use std::path::PathBuf;

use cellar_common::HostError;
use serde::{Deserialize, Serialize};

use crate::navigation::NavigationGuard;

/// Logical size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Logical position of the window's top-left corner. May be negative when
/// the window is larger than the work area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Centre `size` inside `work_area`. Halves round towards positive
/// infinity, so an offset of -0.5 becomes 0.
pub fn centered_position(work_area: Size, size: Size) -> Position {
    let offset = |outer: u32, inner: u32| {
        let diff = i64::from(outer) - i64::from(inner);
        let half = (diff + 1).div_euclid(2);
        i32::try_from(half).unwrap_or(if half < 0 { i32::MIN } else { i32::MAX })
    };
    Position {
        x: offset(work_area.width, size.width),
        y: offset(work_area.height, size.height),
    }
}

/// Isolation settings for loaded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityPosture {
    /// Content may call native APIs directly.
    pub native_api_access: bool,
    /// Host and content run in separate script contexts.
    pub context_isolation: bool,
    /// Content runs sandboxed.
    pub sandbox: bool,
}

impl SecurityPosture {
    /// The only posture the main window is ever created with.
    pub const LOCKED_DOWN: Self = Self {
        native_api_access: false,
        context_isolation: true,
        sandbox: true,
    };

    pub fn is_locked_down(&self) -> bool {
        *self == Self::LOCKED_DOWN
    }
}

/// What a window loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadTarget {
    /// Remote dev-server URL.
    Url(String),
    /// Packaged document on disk.
    File(PathBuf),
}

impl fmt::Display for LoadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything needed to construct the main window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub title: String,
    pub size: Size,
    pub min_size: Size,
    pub position: Position,
    pub background: Option<(u8, u8, u8, u8)>,
    /// Created hidden, shown once content is ready.
    pub visible: bool,
    pub frame: bool,
    pub devtools: bool,
    pub security: SecurityPosture,
    /// The intermediary script: the only bridge surface injected into content.
    pub intermediary_script: String,
}

/// A top-level native window hosting presentation content.
pub trait NativeWindow {
    /// Start loading `target`. An error is a content-load failure.
    fn load(&mut self, target: &LoadTarget) -> Result<(), HostError>;
    fn show(&mut self);
    /// Tear the window down. The controller has already dropped its handle.
    fn close(&mut self);
    fn minimize(&mut self);
    fn maximize(&mut self);
    fn unmaximize(&mut self);
    fn is_maximized(&self) -> bool;
    fn is_focused(&self) -> bool;
    fn open_devtools(&mut self);
}

/// Creates native windows. Implementations are short-lived adapters over the
/// platform event loop and are passed to the controller per call.
pub trait WindowingSystem {
    type Window: NativeWindow;

    /// Usable area of the primary display (excluding task bars where known).
    fn primary_work_area(&self) -> Result<Size, HostError>;

    /// Build a window per `spec`. In-page navigation and new-window requests
    /// must be routed through `guard`.
    fn create_window(
        &mut self,
        spec: &WindowSpec,
        guard: NavigationGuard,
    ) -> Result<Self::Window, HostError>;
}
