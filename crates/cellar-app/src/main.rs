mod app_state;
mod cli;
mod logging;
mod native;

use std::process::ExitCode;

use cellar_common::Logger;
use cellar_config::RuntimeMode;
use cellar_shell::ShellDocument;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = cellar_platform::crash_report::write_crash_report(info);
        logging::log_panic(info, path.as_deref());

        eprintln!("\n--- Cellar crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("----------------------\n");

        default_hook(info);
    }));
}

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/cellar-app/
        manifest_dir.join("..").join("..").join(".env"),
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn main() -> ExitCode {
    load_dotenv();
    install_panic_hook();

    let args = cli::parse();

    // A returned config error is reported once tracing is up.
    let (mut config, config_error) = logging::load_config_reported(&args, std::io::stderr);
    if args.dev {
        config.runtime.mode = RuntimeMode::Development;
    }

    let directive = logging::effective_directive(&args, &config);
    logging::init_tracing(&directive);

    let logger = Logger::new("Main");
    logger.set_level(logging::logger_level(&directive, config.logging.level));

    tracing::info!("Cellar v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    tracing::debug!("Effective config: {}", cellar_config::config_to_json(&config));

    if let Some(dir) = &args.export_shell {
        let document = ShellDocument::new(config.app.name.clone(), config.window.background.clone());
        return match cellar_shell::bundle::export(dir, &document) {
            Ok(files) => {
                tracing::info!(count = files.len(), dir = %dir.display(), "shell bundle written");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to write shell bundle: {e}");
                ExitCode::FAILURE
            }
        };
    }

    if config.dev_server_url().is_none() {
        let index = config.content.resolve_index_path();
        match native::check_packaged_bundle(&index) {
            Ok(missing) => {
                for path in missing {
                    tracing::warn!("Packaged shell is missing {}", path.display());
                }
            }
            Err(e) => {
                tracing::error!("Cannot start: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::CellarApp::new(&config, &logger);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }

    if let Some(e) = app.fatal_error() {
        tracing::error!("Exiting after startup failure: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
