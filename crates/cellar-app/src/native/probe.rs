//! Turning a load target into a URL the webview can open, failing early
//! when the content is not there.

use std::net::{TcpStream, ToSocketAddrs};
use std::path::{Path, PathBuf};
use std::time::Duration;

use cellar_common::HostError;
use cellar_host::LoadTarget;
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_millis(300);

/// Resolve `target` to a URL, checking the dev server accepts connections
/// or the packaged file exists.
pub fn content_url(target: &LoadTarget) -> Result<String, HostError> {
    match target {
        LoadTarget::Url(raw) => {
            probe_server(raw).map_err(|reason| load_error(target, reason))?;
            Ok(raw.clone())
        }
        LoadTarget::File(path) => file_url(path).map_err(|reason| load_error(target, reason)),
    }
}

/// Check the packaged shell next to `index` before any window is made.
///
/// A missing index is fatal. Other missing bundle files are only reported,
/// since a custom `content.index_path` may point at a different layout.
pub fn check_packaged_bundle(index: &Path) -> Result<Vec<PathBuf>, HostError> {
    if !index.is_file() {
        return Err(HostError::Load {
            target: index.display().to_string(),
            reason: "packaged shell not found; write one with --export-shell <dir>".to_string(),
        });
    }
    let dir = index.parent().unwrap_or_else(|| Path::new("."));
    Ok(cellar_shell::bundle::missing_files(dir))
}

fn load_error(target: &LoadTarget, reason: String) -> HostError {
    HostError::Load {
        target: target.to_string(),
        reason,
    }
}

fn probe_server(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    let host = url.host_str().ok_or("URL has no host")?;
    let port = url.port_or_known_default().ok_or("URL has no port")?;

    let addrs = (host, port).to_socket_addrs().map_err(|e| e.to_string())?;
    let mut last_err = format!("{host}:{port} did not resolve");
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT) {
            Ok(_) => return Ok(()),
            Err(e) => last_err = e.to_string(),
        }
    }
    Err(last_err)
}

fn file_url(path: &Path) -> Result<String, String> {
    if !path.is_file() {
        return Err("file not found".to_string());
    }
    let absolute = path.canonicalize().map_err(|e| e.to_string())?;
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|()| format!("not an absolute path: {}", absolute.display()))
}
