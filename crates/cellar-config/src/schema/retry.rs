//! Content-load retry settings (development only).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Delay before the first retry after a load failure.
    pub delay_ms: u64,
    /// Multiplier applied per consecutive failure. `1.0` keeps the delay fixed.
    pub backoff: f64,
    /// Stop retrying after this many consecutive failures. Unset: never stop.
    pub max_retries: Option<u32>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            backoff: 1.0,
            max_retries: None,
        }
    }
}
