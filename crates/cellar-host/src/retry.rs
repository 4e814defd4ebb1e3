//! Reload policy for development content-load failures.

use std::time::Duration;

use cellar_config::RetryConfig;

/// Delay schedule for consecutive load failures.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub delay: Duration,
    pub backoff: f64,
    pub max_retries: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

impl RetryPolicy {
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.delay_ms),
            backoff: config.backoff,
            max_retries: config.max_retries,
        }
    }

    /// Delay before retry number `attempt` (0-based), or `None` once the
    /// limit is exhausted.
    pub fn delay_for(&self, attempt: u32) -> Option<Duration> {
        if self.max_retries.is_some_and(|max| attempt >= max) {
            return None;
        }
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let factor = self.backoff.max(1.0).powi(exponent);
        let millis = (self.delay.as_millis() as f64 * factor).round();
        // `as` saturates, so an absurd backoff caps at u64::MAX ms.
        Some(Duration::from_millis(millis as u64))
    }
}
