//! Where the presentation content is loaded from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Relative location of the packaged shell next to the executable.
pub const PACKAGED_INDEX: &str = "dist/index.html";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Dev-server URL used in development. Empty means none is known.
    pub dev_url: String,
    /// Packaged `index.html` used in production. Defaults to
    /// `<exe dir>/dist/index.html`.
    pub index_path: Option<PathBuf>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dev_url: "http://localhost:5173/".into(),
            index_path: None,
        }
    }
}

impl ContentConfig {
    /// Resolve the packaged document. One strategy only: the configured path,
    /// else `dist/index.html` next to the running executable.
    pub fn resolve_index_path(&self) -> PathBuf {
        if let Some(path) = &self.index_path {
            return path.clone();
        }
        let base = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from))
            .unwrap_or_default();
        base.join(PACKAGED_INDEX)
    }
}
