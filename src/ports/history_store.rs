use crate::domain::{AppError, HistoryEntry};

/// Persistence for generated documents of one identity.
///
/// Stores append and delete whole entries; they never rewrite an existing one.
pub trait HistoryStore {
    /// Persist a new entry.
    fn save(&self, entry: &HistoryEntry) -> Result<(), AppError>;

    /// All entries, newest first.
    fn list(&self) -> Result<Vec<HistoryEntry>, AppError>;

    /// Remove an entry. Returns `false` when no entry had that id.
    fn delete(&self, id: &str) -> Result<bool, AppError>;
}
