//! Tracing setup and the bootstrap logging used while config loads.

use std::panic::PanicHookInfo;
use std::path::Path;

use cellar_common::{ConfigError, LogLevel};
use cellar_config::CellarConfig;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

/// Directive used while config loads, before the configured level is known.
const BOOTSTRAP_DIRECTIVE: &str = "info";

/// `RUST_LOG` plus each comma-separated part of `directive`. Parts that do
/// not parse are returned so they can be reported once logging is up.
pub fn build_filter(directive: &str) -> (EnvFilter, Vec<String>) {
    let mut filter = EnvFilter::from_default_env();
    let mut rejected = Vec::new();
    for part in directive.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(_) => rejected.push(part.to_string()),
        }
    }
    (filter, rejected)
}

/// `--log-level` when given, otherwise the configured level.
pub fn effective_directive(args: &Args, config: &CellarConfig) -> String {
    args.log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive().to_string())
}

/// Threshold for host-side `Logger`s so they never drop what the filter
/// would print.
pub fn logger_level(directive: &str, configured: LogLevel) -> LogLevel {
    LogLevel::from_directive(directive).unwrap_or(configured)
}

/// Load config with a scoped subscriber writing to `writer`, so warnings
/// raised while reading the file and environment are not lost.
pub fn load_config_reported<W>(args: &Args, writer: W) -> (CellarConfig, Option<ConfigError>)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, _) = build_filter(BOOTSTRAP_DIRECTIVE);
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish();

    let loaded = tracing::subscriber::with_default(bootstrap, || {
        cellar_config::load_config(args.config.as_deref())
    });
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (CellarConfig::default(), Some(e)),
    }
}

/// Install the process-wide subscriber.
pub fn init_tracing(directive: &str) {
    let (filter, rejected) = build_filter(directive);
    tracing_subscriber::fmt().with_env_filter(filter).init();
    for part in rejected {
        tracing::warn!("Ignoring invalid log directive: {part}");
    }
}

/// Report a panic through tracing, naming the crash report if one was
/// written.
pub fn log_panic(info: &PanicHookInfo<'_>, report: Option<&Path>) {
    let message = cellar_platform::crash_report::panic_message(info);
    let location = info
        .location()
        .map(|loc| format!("{}:{}", loc.file(), loc.line()))
        .unwrap_or_default();
    match report {
        Some(path) => tracing::error!(%location, report = %path.display(), "Uncaught panic: {message}"),
        None => tracing::error!(%location, "Uncaught panic: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use clap::Parser;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn filter_accepts_comma_lists() {
        let (_, rejected) = build_filter("cellar=debug,info");
        assert!(rejected.is_empty());

        let (_, rejected) = build_filter("cellar=debug,cellar=loud,warn");
        assert_eq!(rejected, vec!["cellar=loud".to_string()]);
    }

    #[test]
    fn cli_directive_raises_logger_threshold() {
        let args = Args::try_parse_from(["cellar", "--log-level", "cellar=debug,warn"]).unwrap();
        let config = CellarConfig::default();

        let directive = effective_directive(&args, &config);
        assert_eq!(directive, "cellar=debug,warn");
        assert_eq!(logger_level(&directive, config.logging.level), LogLevel::Debug);
    }

    #[test]
    fn configured_level_applies_without_flag() {
        let args = Args::try_parse_from(["cellar"]).unwrap();
        let mut config = CellarConfig::default();
        config.logging.level = LogLevel::Warn;

        let directive = effective_directive(&args, &config);
        assert_eq!(directive, "warn");
        assert_eq!(logger_level(&directive, config.logging.level), LogLevel::Warn);
        assert_eq!(logger_level("wry=debug", LogLevel::Error), LogLevel::Error);
    }

    #[test]
    fn panics_are_logged_through_tracing() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(|info| {
                log_panic(info, Some(Path::new("/tmp/crash_1.json")))
            }));
            let result = std::panic::catch_unwind(|| panic!("till drawer jammed"));
            std::panic::set_hook(previous);
            assert!(result.is_err());
        });

        let out = captured.text();
        assert!(out.contains("Uncaught panic: till drawer jammed"), "{out}");
        assert!(out.contains("/tmp/crash_1.json"), "{out}");
    }

    #[test]
    fn warnings_while_loading_config_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();
        let path_arg = path.to_string_lossy().into_owned();
        let args = Args::try_parse_from(["cellar", "--config", &path_arg]).unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        std::env::set_var(cellar_config::env::ENV_MODE, "staging");
        let (config, error) = load_config_reported(&args, move || writer.clone());
        std::env::remove_var(cellar_config::env::ENV_MODE);

        assert!(error.is_none());
        assert!(!config.is_dev());
        let out = captured.text();
        assert!(out.contains("ignoring CELLAR_ENV=\"staging\""), "{out}");
    }
}
