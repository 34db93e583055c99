//! Copy a composed document to the clipboard and record it in history.

use crate::app::AppContext;
use crate::domain::{AppError, HistoryEntry};
use crate::ports::{ClipboardWriter, HistoryStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Entry saved for the signed-in user; `None` when anonymous or the save failed.
    pub saved: Option<HistoryEntry>,
}

/// Copy `document`. With an identity, the copy is also saved to history.
///
/// A history failure after a successful copy is logged, not returned.
pub fn execute<H: HistoryStore, C: ClipboardWriter>(
    ctx: &AppContext<H>,
    clipboard: &mut C,
    document: &str,
) -> Result<CopyOutcome, AppError> {
    if document.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }

    clipboard.write_text(document)?;
    tracing::debug!(bytes = document.len(), "copied prompt to clipboard");

    let Some(history) = ctx.history() else {
        return Ok(CopyOutcome { saved: None });
    };

    let entry = HistoryEntry::now(document);
    match history.save(&entry) {
        Ok(()) => Ok(CopyOutcome { saved: Some(entry) }),
        Err(err) => {
            tracing::warn!(error = %err, "copied, but saving to history failed");
            Ok(CopyOutcome { saved: None })
        }
    }
}
