//! What happens when the last window closes.

use serde::{Deserialize, Serialize};

/// Process lifecycle policy, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecyclePolicy {
    /// Closing the last window quits the process.
    QuitOnEmpty,
    /// The process stays alive without windows until re-activated
    /// (dock icon click on macOS).
    PersistUntilReactivated,
}

impl LifecyclePolicy {
    pub fn for_os(os: &str) -> Self {
        if os == "macos" {
            Self::PersistUntilReactivated
        } else {
            Self::QuitOnEmpty
        }
    }

    pub fn for_current_platform() -> Self {
        Self::for_os(std::env::consts::OS)
    }
}
