//! History entries: generated documents persisted for an identity.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const LABEL_MAX_CHARS: usize = 60;
const UNTITLED_LABEL: &str = "Untitled prompt";

/// A saved document. Immutable once created; entries are only ever deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub generated_text: String,
    pub derived_label: String,
}

impl HistoryEntry {
    /// Create an entry for `text` captured at `timestamp`.
    pub fn new(generated_text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        let generated_text = generated_text.into();
        Self {
            id: entry_id(&generated_text, &timestamp),
            derived_label: derive_label(&generated_text),
            generated_text,
            timestamp,
        }
    }

    /// Create an entry stamped with the current time.
    pub fn now(generated_text: impl Into<String>) -> Self {
        Self::new(generated_text, Utc::now())
    }
}

fn entry_id(text: &str, timestamp: &DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true).as_bytes());
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    digest.iter().take(8).map(|byte| format!("{:02x}", byte)).collect()
}

/// Short label for a document: its first heading, else its first non-blank line.
pub fn derive_label(text: &str) -> String {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let heading = text
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim())
        .filter(|line| !line.is_empty());

    let Some(label) = heading.or_else(|| lines.next()) else {
        return UNTITLED_LABEL.to_string();
    };

    if label.chars().count() <= LABEL_MAX_CHARS {
        return label.to_string();
    }
    let truncated: String = label.chars().take(LABEL_MAX_CHARS - 1).collect();
    format!("{}…", truncated.trim_end())
}
