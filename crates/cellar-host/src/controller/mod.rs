//! Main window controller.
//!
//! `MainWindowController` is the explicit owner of the single window handle.
//! Everything that creates, loads, shows or destroys the main window goes
//! through it, so the handle is cleared before any caller can observe a
//! closed window.

use std::path::PathBuf;
use std::time::Instant;

use cellar_common::Logger;
use cellar_config::{CellarConfig, WindowConfig};
use cellar_platform::LifecyclePolicy;

use crate::navigation::NavigationGuard;
use crate::retry::RetryPolicy;
use crate::window::{
    centered_position, LoadTarget, NativeWindow, SecurityPosture, Size, WindowSpec,
};

mod commands;
mod lifecycle;
mod loading;


/// Inputs the controller needs, resolved once from config at startup.
#[derive(Debug, Clone)]
pub struct HostSettings {
    pub app_name: String,
    pub window: WindowConfig,
    /// Development mode: dev tools on ready, dev-server retries.
    pub development: bool,
    /// Set only in development with a known dev server.
    pub dev_url: Option<String>,
    pub index_path: PathBuf,
    pub retry: RetryPolicy,
    pub intermediary_script: String,
}

impl HostSettings {
    pub fn from_config(config: &CellarConfig, intermediary_script: impl Into<String>) -> Self {
        Self {
            app_name: config.app.name.clone(),
            window: config.window.clone(),
            development: config.is_dev(),
            dev_url: config.dev_server_url().map(str::to_string),
            index_path: config.content.resolve_index_path(),
            retry: RetryPolicy::from_config(&config.retry),
            intermediary_script: intermediary_script.into(),
        }
    }
}

/// What the event loop should do after a lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleDirective {
    Continue,
    Exit,
}

/// Owns the main window and the process-level window policy.
pub struct MainWindowController<W> {
    settings: HostSettings,
    policy: LifecyclePolicy,
    logger: Logger,
    guard: NavigationGuard,
    window: Option<W>,
    /// The current window has been shown once.
    shown: bool,
    pending_retry: Option<Instant>,
    consecutive_failures: u32,
    should_exit: bool,
}

impl<W: NativeWindow> MainWindowController<W> {
    pub fn new(settings: HostSettings, policy: LifecyclePolicy, logger: Logger) -> Self {
        let guard = NavigationGuard::new(logger.child("Navigation"));
        Self {
            settings,
            policy,
            logger,
            guard,
            window: None,
            shown: false,
            pending_retry: None,
            consecutive_failures: 0,
            should_exit: false,
        }
    }

    /// The main window, if one exists.
    pub fn main_window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn main_window_mut(&mut self) -> Option<&mut W> {
        self.window.as_mut()
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    /// Set once the last window closed under `QuitOnEmpty`.
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn policy(&self) -> LifecyclePolicy {
        self.policy
    }

    pub fn settings(&self) -> &HostSettings {
        &self.settings
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    /// When the scheduled dev-server retry is due, if any.
    pub fn next_retry_at(&self) -> Option<Instant> {
        self.pending_retry
    }

    /// Dev server in development, the packaged document otherwise.
    pub fn load_target(&self) -> LoadTarget {
        match &self.settings.dev_url {
            Some(url) => LoadTarget::Url(url.clone()),
            None => LoadTarget::File(self.settings.index_path.clone()),
        }
    }

    /// The spec the main window is built from, centred in `work_area`.
    pub fn window_spec(&self, work_area: Size) -> WindowSpec {
        let w = &self.settings.window;
        let size = Size::new(w.width, w.height);
        WindowSpec {
            title: self.settings.app_name.clone(),
            size,
            min_size: Size::new(w.min_width, w.min_height),
            position: centered_position(work_area, size),
            background: w.background_rgba(),
            visible: false,
            frame: true,
            devtools: self.settings.development,
            security: SecurityPosture::LOCKED_DOWN,
            intermediary_script: self.settings.intermediary_script.clone(),
        }
    }
}
