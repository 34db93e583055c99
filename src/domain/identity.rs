use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The signed-in user as supplied by the identity collaborator.
///
/// Identity only decides whether documents are saved to history; it never
/// changes what gets composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: Option<String>) -> Self {
        Self { id: id.into(), email }
    }

    /// Identifier safe to use as a file stem, distinct for distinct ids.
    ///
    /// Ids made only of `[A-Za-z0-9_-]` are used as-is. Anything else becomes
    /// `sha256.<hex>`, which no plain id can spell because of the dot.
    pub fn storage_key(&self) -> String {
        let plain = !self.id.is_empty()
            && self.id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if plain {
            return self.id.clone();
        }
        let digest = Sha256::digest(self.id.as_bytes());
        let hex: String = digest.iter().map(|byte| format!("{:02x}", byte)).collect();
        format!("sha256.{}", hex)
    }
}
