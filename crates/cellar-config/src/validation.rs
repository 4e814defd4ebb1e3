//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError::ValidationError`.

use cellar_common::ConfigError;
use url::Url;

use crate::schema::CellarConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CellarConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_app(&mut errors, config);
    validate_window(&mut errors, config);
    validate_urls(&mut errors, config);
    validate_retry(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_app(errors: &mut Vec<String>, config: &CellarConfig) {
    if config.app.name.trim().is_empty() {
        errors.push("app.name must not be empty".into());
    }
    if config.app.version.trim().is_empty() {
        errors.push("app.version must not be empty".into());
    }
}

fn validate_window(errors: &mut Vec<String>, config: &CellarConfig) {
    let w = &config.window;
    for (name, value) in [
        ("window.width", w.width),
        ("window.height", w.height),
        ("window.min_width", w.min_width),
        ("window.min_height", w.min_height),
    ] {
        if value == 0 {
            errors.push(format!("{name} must be > 0"));
        }
    }
    if w.min_width > w.width {
        errors.push(format!(
            "window.min_width = {} exceeds window.width = {}",
            w.min_width, w.width
        ));
    }
    if w.min_height > w.height {
        errors.push(format!(
            "window.min_height = {} exceeds window.height = {}",
            w.min_height, w.height
        ));
    }
    if w.background_rgba().is_none() {
        errors.push(format!(
            "window.background = {:?} is not a #rrggbb color",
            w.background
        ));
    }
}

fn validate_urls(errors: &mut Vec<String>, config: &CellarConfig) {
    match Url::parse(&config.api.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(format!(
            "api.base_url = {:?} is not an http(s) URL",
            config.api.base_url
        )),
    }

    // The dev server must be reachable through the navigation allow-list.
    let dev_url = config.content.dev_url.trim();
    if !dev_url.is_empty() {
        let allowed = Url::parse(dev_url)
            .map(|u| u.scheme() == "http" && u.host_str() == Some("localhost"))
            .unwrap_or(false);
        if !allowed {
            errors.push(format!(
                "content.dev_url = {dev_url:?} must be an http://localhost URL"
            ));
        }
    }
}

fn validate_retry(errors: &mut Vec<String>, config: &CellarConfig) {
    let backoff = config.retry.backoff;
    if !backoff.is_finite() || backoff < 1.0 {
        errors.push(format!("retry.backoff = {backoff} must be a finite value >= 1.0"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(config: &CellarConfig) -> String {
        match validate(config) {
            Err(ConfigError::ValidationError(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&CellarConfig::default()).is_ok());
    }

    #[test]
    fn zero_and_inverted_sizes_are_rejected() {
        let mut config = CellarConfig::default();
        config.window.width = 0;
        let msg = message(&config);
        assert!(msg.contains("window.width must be > 0"));
        assert!(msg.contains("window.min_width = 1280 exceeds window.width = 0"));
    }

    #[test]
    fn errors_are_collected() {
        let mut config = CellarConfig::default();
        config.app.name = " ".into();
        config.window.background = "red".into();
        config.retry.backoff = 0.5;
        let msg = message(&config);
        assert_eq!(msg.split("; ").count(), 3);
    }

    #[test]
    fn api_url_must_be_http() {
        let mut config = CellarConfig::default();
        config.api.base_url = "ftp://backend".into();
        assert!(message(&config).contains("api.base_url"));
        config.api.base_url = "https://api.example.com/v1".into();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn dev_url_must_be_allowlisted() {
        let mut config = CellarConfig::default();
        config.content.dev_url = "https://evil.example.com/".into();
        assert!(message(&config).contains("content.dev_url"));

        config.content.dev_url = "http://localhost.evil.com/".into();
        assert!(message(&config).contains("content.dev_url"));

        config.content.dev_url = String::new();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn non_finite_backoff_is_rejected() {
        let mut config = CellarConfig::default();
        config.retry.backoff = f64::NAN;
        assert!(message(&config).contains("retry.backoff"));
    }
}
