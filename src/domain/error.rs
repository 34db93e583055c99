use std::io;

use thiserror::Error;

/// Library-wide error type for devprompt operations.
///
/// Composition itself never fails; every variant here belongs to a boundary
/// (files, clipboard, history storage, the enhancer endpoint).
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Embedded or override catalog could not be loaded.
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Answers file could not be read or parsed.
    #[error("Failed to parse answers from {source_name}: {details}")]
    AnswersParseError { source_name: String, details: String },

    /// Action needs a composed document and the answers produce none.
    #[error("The composed prompt is empty; answer at least one question first")]
    EmptyDocument,

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// History store read or write failed.
    #[error("History error: {0}")]
    HistoryError(String),

    /// History entry does not exist.
    #[error("History entry '{0}' not found")]
    HistoryEntryNotFound(String),

    /// Operation requires an identity and none is configured.
    #[error("No identity configured. Set [identity] in config or DEVPROMPT_USER_ID.")]
    IdentityMissing,

    /// Enhancer endpoint returned an error or an unusable response.
    #[error("Enhancer error: {message}")]
    EnhancerError { message: String, status: Option<u16> },

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Interactive prompt failed or was not answerable.
    #[error("Prompt failed: {0}")]
    PromptError(String),

    /// Template rendering failed.
    #[error("Failed to render template {template}: {reason}")]
    TemplateRenderError { template: String, reason: String },
}
