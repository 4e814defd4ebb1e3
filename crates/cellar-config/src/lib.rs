//! Cellar configuration system.
//!
//! TOML file first, then environment overrides, then validation. Every
//! section uses serde defaults so a partial (or missing) file works.
//!
//! ```rust,no_run
//! let config = cellar_config::load_config(None).expect("failed to load config");
//! println!("{}", cellar_config::config_to_json(&config));
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{apply_env_overrides, apply_process_env};
pub use schema::{
    ApiConfig, AppSection, CellarConfig, ContentConfig, LoggingConfig, RetryConfig, RuntimeConfig,
    RuntimeMode, WindowConfig, CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use cellar_common::ConfigError;

/// Load the effective configuration.
///
/// Reads `path` if given, otherwise the platform default (created on first
/// run), applies `CELLAR_*` environment overrides and validates the result.
pub fn load_config(path: Option<&Path>) -> Result<CellarConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    apply_process_env(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &CellarConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&CellarConfig::default());
        for section in [
            "\"app\"",
            "\"runtime\"",
            "\"api\"",
            "\"window\"",
            "\"content\"",
            "\"retry\"",
            "\"logging\"",
        ] {
            assert!(json.contains(section), "missing {section}");
        }
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nwidth = 1440\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.window.width, 1440);
        assert_eq!(config.window.height, 768);
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nwidth = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
