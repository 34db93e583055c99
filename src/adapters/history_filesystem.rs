//! JSON-file history store, one file per identity.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, HistoryEntry, Identity};
use crate::ports::HistoryStore;

/// History persisted at `<dir>/<identity>.json` as a JSON array.
#[derive(Debug, Clone)]
pub struct FilesystemHistoryStore {
    path: PathBuf,
}

impl FilesystemHistoryStore {
    pub fn new(dir: &Path, identity: &Identity) -> Self {
        Self { path: dir.join(format!("{}.json", identity.storage_key())) }
    }

    /// Default history directory under the user's data home.
    pub fn default_dir() -> Result<PathBuf, AppError> {
        if let Some(data_home) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(data_home).join("devprompt").join("history"));
        }
        let home = std::env::var_os("HOME")
            .ok_or_else(|| AppError::EnvironmentVariableMissing("HOME".into()))?;
        Ok(PathBuf::from(home).join(".local/share/devprompt/history"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<HistoryEntry>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|err| {
            AppError::HistoryError(format!("Malformed history file {}: {}", self.path.display(), err))
        })
    }

    fn write_all(&self, entries: &[HistoryEntry]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries).map_err(|err| {
            AppError::HistoryError(format!("Failed to encode history {}: {}", self.path.display(), err))
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl HistoryStore for FilesystemHistoryStore {
    fn save(&self, entry: &HistoryEntry) -> Result<(), AppError> {
        let mut entries = self.read_all()?;
        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(AppError::HistoryError(format!("Entry '{}' already exists", entry.id)));
        }
        entries.push(entry.clone());
        self.write_all(&entries)?;
        tracing::info!(id = %entry.id, path = %self.path.display(), "saved history entry");
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, AppError> {
        let mut entries = self.read_all()?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
        Ok(entries)
    }

    fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut entries = self.read_all()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.write_all(&entries)?;
        tracing::info!(id, "deleted history entry");
        Ok(true)
    }
}
