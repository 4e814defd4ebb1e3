//! CellarApp struct definition and constructor.

use std::sync::{Arc, Mutex};

use cellar_bridge::{client_stub_script, BridgeRegistry};
use cellar_common::{HostError, Logger};
use cellar_config::CellarConfig;
use cellar_host::{HostSettings, MainWindowController};
use cellar_platform::LifecyclePolicy;

use super::types::HostEvent;
use crate::native::WryWindow;

/// Top-level application state.
pub struct CellarApp {
    pub(super) controller: MainWindowController<WryWindow>,
    pub(super) bridge: BridgeRegistry,

    // Filled by webview callbacks, drained in `about_to_wait`
    pub(super) events: Arc<Mutex<Vec<HostEvent>>>,

    pub(super) started: bool,
    // Set when startup failed; the process exits non-zero
    pub(super) fatal: Option<HostError>,
}

impl CellarApp {
    pub fn new(config: &CellarConfig, logger: &Logger) -> Self {
        let settings = HostSettings::from_config(config, client_stub_script());
        let policy = LifecyclePolicy::for_current_platform();
        tracing::info!(?policy, dev = config.is_dev(), "host configured");

        Self {
            controller: MainWindowController::new(settings, policy, logger.child("WindowManager")),
            bridge: BridgeRegistry::from_config(config, logger.child("IpcManager")),
            events: Arc::new(Mutex::new(Vec::new())),
            started: false,
            fatal: None,
        }
    }

    /// The startup error, if the main window could not be created.
    pub fn fatal_error(&self) -> Option<&HostError> {
        self.fatal.as_ref()
    }
}
