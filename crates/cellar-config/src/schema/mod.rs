//! Configuration schema types for Cellar.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod app;
mod content;
mod logging;
mod retry;
mod window;

pub use app::*;
pub use content::*;
pub use logging::*;
pub use retry::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Cellar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellarConfig {
    pub app: AppSection,
    pub runtime: RuntimeConfig,
    pub api: ApiConfig,
    pub window: WindowConfig,
    pub content: ContentConfig,
    pub retry: RetryConfig,
    pub logging: LoggingConfig,
}

impl CellarConfig {
    pub fn is_dev(&self) -> bool {
        self.runtime.mode == RuntimeMode::Development
    }

    /// The dev-server URL, but only when running in development with one
    /// configured.
    pub fn dev_server_url(&self) -> Option<&str> {
        let url = self.content.dev_url.trim();
        (self.is_dev() && !url.is_empty()).then_some(url)
    }
}
