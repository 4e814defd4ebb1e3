use std::path::PathBuf;

use cellar_common::PlatformError;

const APP_NAME: &str = "cellar";

/// Platform data directory for Cellar.
///
/// - macOS: `~/Library/Application Support/cellar`
/// - Linux: `$XDG_DATA_HOME/cellar` (defaults to `~/.local/share/cellar`)
/// - Windows: `%APPDATA%\cellar`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    dirs::data_dir()
        .map(|d| d.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))
}

/// `data_dir()/logs`
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// `log_dir()/crash-reports`
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
