//! Environment overrides applied on top of the TOML file.
//!
//! | Variable | Field |
//! |---|---|
//! | `CELLAR_ENV` | `runtime.mode` (`development` / `production`) |
//! | `CELLAR_API_URL` | `api.base_url` |
//! | `CELLAR_DEV_SERVER_URL` | `content.dev_url` |
//! | `CELLAR_LOG` | `logging.level` |

use tracing::warn;

use crate::schema::{CellarConfig, RuntimeMode};

pub const ENV_MODE: &str = "CELLAR_ENV";
pub const ENV_API_URL: &str = "CELLAR_API_URL";
pub const ENV_DEV_SERVER_URL: &str = "CELLAR_DEV_SERVER_URL";
pub const ENV_LOG: &str = "CELLAR_LOG";

/// Apply overrides from the process environment.
pub fn apply_process_env(config: &mut CellarConfig) {
    apply_env_overrides(config, |key| std::env::var(key).ok());
}

/// Apply overrides using `lookup` to read variables. Unparseable values are
/// logged and ignored.
pub fn apply_env_overrides<F>(config: &mut CellarConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_MODE) {
        match RuntimeMode::parse(&raw) {
            Some(mode) => config.runtime.mode = mode,
            None => warn!("ignoring {ENV_MODE}={raw:?}: expected development or production"),
        }
    }

    if let Some(url) = lookup(ENV_API_URL) {
        config.api.base_url = url;
    }

    if let Some(url) = lookup(ENV_DEV_SERVER_URL) {
        config.content.dev_url = url;
    }

    if let Some(raw) = lookup(ENV_LOG) {
        match raw.parse() {
            Ok(level) => config.logging.level = level,
            Err(e) => warn!("ignoring {ENV_LOG}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use cellar_common::LogLevel;

    use super::*;

    fn apply(vars: &[(&str, &str)]) -> CellarConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut config = CellarConfig::default();
        apply_env_overrides(&mut config, |key| vars.get(key).cloned());
        config
    }

    #[test]
    fn no_variables_leaves_defaults() {
        assert_eq!(apply(&[]), CellarConfig::default());
    }

    #[test]
    fn mode_and_urls_are_overridden() {
        let config = apply(&[
            (ENV_MODE, "development"),
            (ENV_API_URL, "http://localhost:7000/api"),
            (ENV_DEV_SERVER_URL, "http://localhost:3000/"),
        ]);
        assert!(config.is_dev());
        assert_eq!(config.api.base_url, "http://localhost:7000/api");
        assert_eq!(config.dev_server_url(), Some("http://localhost:3000/"));
    }

    #[test]
    fn invalid_mode_is_ignored() {
        let config = apply(&[(ENV_MODE, "staging")]);
        assert_eq!(config.runtime.mode, RuntimeMode::Production);
    }

    #[test]
    fn log_level_override() {
        assert_eq!(apply(&[(ENV_LOG, "debug")]).logging.level, LogLevel::Debug);
        assert_eq!(apply(&[(ENV_LOG, "chatty")]).logging.level, LogLevel::Info);
    }
}
