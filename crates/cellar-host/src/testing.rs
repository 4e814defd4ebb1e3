//! In-memory windowing subsystem.
//!
//! Records every call so controller and bridge tests can assert on window
//! state without a display server.

use std::path::Path;

use cellar_common::HostError;

use crate::navigation::NavigationGuard;
use crate::window::{LoadTarget, NativeWindow, Size, WindowSpec, WindowingSystem};

#[derive(Debug)]
pub struct FakeWindowing {
    pub work_area: Size,
    /// When set, `create_window` fails with this reason.
    pub fail_create: Option<String>,
    /// Number of loads each new window fails before succeeding.
    pub failing_loads: usize,
    pub windows_created: usize,
}

impl Default for FakeWindowing {
    fn default() -> Self {
        Self {
            work_area: Size::new(1920, 1080),
            fail_create: None,
            failing_loads: 0,
            windows_created: 0,
        }
    }
}

impl WindowingSystem for FakeWindowing {
    type Window = FakeWindow;

    fn primary_work_area(&self) -> Result<Size, HostError> {
        Ok(self.work_area)
    }

    fn create_window(
        &mut self,
        spec: &WindowSpec,
        guard: NavigationGuard,
    ) -> Result<FakeWindow, HostError> {
        if let Some(reason) = &self.fail_create {
            return Err(HostError::WindowCreation(reason.clone()));
        }
        self.windows_created += 1;
        Ok(FakeWindow::new(spec.clone(), guard, self.failing_loads))
    }
}

#[derive(Debug)]
pub struct FakeWindow {
    pub spec: WindowSpec,
    guard: NavigationGuard,
    pub loads: Vec<LoadTarget>,
    pub current_url: Option<String>,
    pub visible: bool,
    pub focused: bool,
    pub maximized: bool,
    pub minimized: bool,
    pub closed: bool,
    pub devtools_open: bool,
    pub failing_loads: usize,
}

impl FakeWindow {
    pub fn new(spec: WindowSpec, guard: NavigationGuard, failing_loads: usize) -> Self {
        Self {
            visible: spec.visible,
            spec,
            guard,
            loads: Vec::new(),
            current_url: None,
            focused: true,
            maximized: false,
            minimized: false,
            closed: false,
            devtools_open: false,
            failing_loads,
        }
    }

    /// Simulate content navigating to `url`. Returns whether it went through.
    pub fn navigate(&mut self, url: &str) -> bool {
        if !self.guard.allow_navigation(url) {
            return false;
        }
        self.current_url = Some(url.to_string());
        true
    }

    /// Simulate content asking for a new window.
    pub fn request_new_window(&mut self, url: &str) -> bool {
        self.guard.allow_new_window(url)
    }
}

fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

impl NativeWindow for FakeWindow {
    fn load(&mut self, target: &LoadTarget) -> Result<(), HostError> {
        self.loads.push(target.clone());
        if self.failing_loads > 0 {
            self.failing_loads -= 1;
            return Err(HostError::Load {
                target: target.to_string(),
                reason: "connection refused".into(),
            });
        }
        self.current_url = Some(match target {
            LoadTarget::Url(url) => url.clone(),
            LoadTarget::File(path) => file_url(path),
        });
        Ok(())
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn close(&mut self) {
        self.closed = true;
        self.visible = false;
    }

    fn minimize(&mut self) {
        self.minimized = true;
    }

    fn maximize(&mut self) {
        self.maximized = true;
    }

    fn unmaximize(&mut self) {
        self.maximized = false;
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn open_devtools(&mut self) {
        self.devtools_open = true;
    }
}
