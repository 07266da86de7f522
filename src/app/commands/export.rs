//! Writing outline download artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::domain::{AppError, DownloadArtifact, Outline, SessionState, outline_artifacts};

/// Build the text and PDF-named artifacts for `outline`.
pub fn artifacts_for(outline: &Outline, timestamp: NaiveDateTime) -> Vec<DownloadArtifact> {
    outline_artifacts(outline.as_bytes(), timestamp)
}

/// Inline download links for `outline`, one per format.
pub fn outline_links(outline: &Outline, timestamp: NaiveDateTime) -> Vec<String> {
    artifacts_for(outline, timestamp).iter().map(DownloadArtifact::link).collect()
}

/// Write every artifact for `outline` into `dir`, creating it if needed.
pub fn write_outline(
    outline: &Outline,
    dir: &Path,
    timestamp: NaiveDateTime,
) -> Result<Vec<PathBuf>, AppError> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for artifact in artifacts_for(outline, timestamp) {
        let path = dir.join(&artifact.filename);
        fs::write(&path, &artifact.bytes)?;
        tracing::debug!(path = %path.display(), bytes = artifact.bytes.len(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}

/// Write the session's current outline into `dir`.
pub fn export_outline(
    state: &SessionState,
    dir: &Path,
    timestamp: NaiveDateTime,
) -> Result<Vec<PathBuf>, AppError> {
    let outline = state
        .outline()
        .ok_or_else(|| AppError::invalid_input("No outline to export. Select an idea first."))?;
    write_outline(outline, dir, timestamp)
}
