//! Per-identity history: save, list, show and delete.

use crate::app::AppContext;
use crate::domain::{AppError, HistoryEntry};
use crate::ports::HistoryStore;

fn store<H: HistoryStore>(ctx: &AppContext<H>) -> Result<&H, AppError> {
    ctx.history().ok_or(AppError::IdentityMissing)
}

/// Save `document` as a new entry.
pub fn save<H: HistoryStore>(ctx: &AppContext<H>, document: &str) -> Result<HistoryEntry, AppError> {
    let history = store(ctx)?;
    if document.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }
    let entry = HistoryEntry::now(document);
    history.save(&entry)?;
    Ok(entry)
}

/// Entries, newest first.
pub fn list<H: HistoryStore>(ctx: &AppContext<H>) -> Result<Vec<HistoryEntry>, AppError> {
    store(ctx)?.list()
}

/// Find one entry by id. A unique id prefix is accepted.
pub fn show<H: HistoryStore>(ctx: &AppContext<H>, id: &str) -> Result<HistoryEntry, AppError> {
    let entries = list(ctx)?;
    if let Some(entry) = entries.iter().find(|entry| entry.id == id) {
        return Ok(entry.clone());
    }

    let mut matches = entries.into_iter().filter(|entry| !id.is_empty() && entry.id.starts_with(id));
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry),
        _ => Err(AppError::HistoryEntryNotFound(id.to_string())),
    }
}

/// Delete an entry by id or unique prefix.
pub fn delete<H: HistoryStore>(ctx: &AppContext<H>, id: &str) -> Result<HistoryEntry, AppError> {
    let entry = show(ctx, id)?;
    if !store(ctx)?.delete(&entry.id)? {
        return Err(AppError::HistoryEntryNotFound(id.to_string()));
    }
    tracing::debug!(id = %entry.id, "deleted history entry");
    Ok(entry)
}
