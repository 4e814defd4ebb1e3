//! Writing the packaged presentation bundle to disk.

use std::fs;
use std::path::{Path, PathBuf};

use cellar_common::CellarError;

use crate::document::{ShellDocument, INDEX_FILE, SHELL_FILE};
use crate::routes::Screen;

/// Write `index.html`, `shell.js` and one script per screen into `dir`,
/// creating it if needed. Returns the files written.
pub fn export(dir: &Path, document: &ShellDocument) -> Result<Vec<PathBuf>, CellarError> {
    let screens_dir = dir.join("screens");
    fs::create_dir_all(&screens_dir)?;

    let mut written = Vec::new();
    let mut write = |path: PathBuf, contents: String| -> Result<(), CellarError> {
        fs::write(&path, contents)?;
        tracing::debug!(path = %path.display(), "wrote bundle file");
        written.push(path);
        Ok(())
    };

    write(dir.join(INDEX_FILE), document.index_html())?;
    write(dir.join(SHELL_FILE), document.shell_js())?;
    for screen in document.routes.screens().iter().copied() {
        let file = dir.join(screen.module());
        write(file, ShellDocument::screen_script(screen))?;
    }

    tracing::info!(dir = %dir.display(), files = written.len(), "exported shell bundle");
    Ok(written)
}

/// Bundle files absent from `dir`, in export order. Empty for a complete
/// bundle.
pub fn missing_files(dir: &Path) -> Vec<PathBuf> {
    [INDEX_FILE, SHELL_FILE]
        .into_iter()
        .chain(Screen::ALL.iter().map(|s| s.module()))
        .map(|file| dir.join(file))
        .filter(|path| !path.is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> ShellDocument {
        ShellDocument::new("Liquor Store Management System", "#f9fafb")
    }

    #[test]
    fn export_writes_full_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let dist = tmp.path().join("dist");

        let written = export(&dist, &doc()).unwrap();

        assert_eq!(written.len(), 2 + Screen::ALL.len());
        assert!(missing_files(&dist).is_empty());
        let index = fs::read_to_string(dist.join("index.html")).unwrap();
        assert!(index.contains("shell.js"));
        let pos = fs::read_to_string(dist.join("screens/pos.js")).unwrap();
        assert!(pos.contains("Point of Sale"));
    }

    #[test]
    fn export_overwrites_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("index.html"), "stale").unwrap();

        export(tmp.path(), &doc()).unwrap();

        let index = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn empty_dir_misses_everything() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = missing_files(tmp.path());
        assert_eq!(missing.len(), 2 + Screen::ALL.len());
        assert_eq!(missing[0], tmp.path().join("index.html"));
    }

    #[test]
    fn removed_screen_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        export(tmp.path(), &doc()).unwrap();
        fs::remove_file(tmp.path().join("screens/pos.js")).unwrap();

        assert_eq!(missing_files(tmp.path()), vec![tmp.path().join("screens/pos.js")]);
    }
}
