//! Save a composed document to a Markdown file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::AppError;

/// Default file name for an export made at `now`.
pub fn default_file_name(now: DateTime<Utc>) -> String {
    format!("prompt-{}.md", now.format("%Y%m%d-%H%M%S"))
}

/// Write `document` to `target`, or to a timestamped file in `dir`.
pub fn execute(
    document: &str,
    target: Option<&Path>,
    dir: &Path,
    now: DateTime<Utc>,
) -> Result<PathBuf, AppError> {
    if document.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }

    let path = match target {
        Some(path) => path.to_path_buf(),
        None => dir.join(default_file_name(now)),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, document)?;
    tracing::debug!(path = %path.display(), "exported prompt");
    Ok(path)
}
