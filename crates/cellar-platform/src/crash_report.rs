//! Crash reports for panics in the host process.

use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use crate::info::{arch_name, platform_name};
use crate::paths::crash_report_dir;

/// Extract the human-readable message from a panic payload.
pub fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Build the JSON body of a crash report.
pub fn build_report(
    message: &str,
    location: Option<(&str, u32, u32)>,
    backtrace: &str,
) -> serde_json::Value {
    serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "platform": platform_name(),
        "arch": arch_name(),
        "panic_message": message,
        "location": location.map(|(file, line, column)| serde_json::json!({
            "file": file,
            "line": line,
            "column": column,
        })),
        "backtrace": backtrace,
    })
}

/// Write `report` into `dir` as `crash_<timestamp>.json`.
pub fn write_report_to(dir: &Path, report: &serde_json::Value) -> Option<PathBuf> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let path = dir.join(format!("crash_{timestamp}.json"));

    std::fs::create_dir_all(dir).ok()?;
    std::fs::write(&path, serde_json::to_string_pretty(report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}

/// Write a crash report for a panic. Runs inside the panic hook, so it
/// never panics itself; `None` if anything failed.
pub fn write_crash_report(info: &PanicHookInfo<'_>) -> Option<PathBuf> {
    let message = panic_message(info);
    let location = info
        .location()
        .map(|loc| (loc.file(), loc.line(), loc.column()));
    let backtrace = Backtrace::force_capture().to_string();

    let report = build_report(&message, location, &backtrace);
    write_report_to(&crash_report_dir().ok()?, &report)
}
