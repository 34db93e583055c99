//! "Enhance with AI" with fallback to the unenhanced document.

use crate::domain::AppError;
use crate::ports::{EnhanceRequest, PromptEnhancer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceOutcome {
    pub text: String,
    /// Why the original document was returned instead of an enhanced one.
    pub fallback_reason: Option<String>,
}

impl EnhanceOutcome {
    pub fn enhanced(&self) -> bool {
        self.fallback_reason.is_none()
    }

    /// Keep `document` unchanged, recording `err` as the reason.
    pub fn fallback(document: &str, err: &AppError) -> Self {
        tracing::warn!(error = %err, "enhancement failed, keeping the original prompt");
        Self { text: document.to_string(), fallback_reason: Some(err.to_string()) }
    }
}

/// Enhance `document`. Enhancer failures never lose the document.
pub fn execute<E: PromptEnhancer>(
    enhancer: &E,
    document: &str,
    system_type: Option<&str>,
) -> Result<EnhanceOutcome, AppError> {
    if document.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }

    let request =
        EnhanceRequest { prompt: document.to_string(), system_type: system_type.map(str::to_string) };
    match enhancer.enhance(&request) {
        Ok(text) if !text.trim().is_empty() => Ok(EnhanceOutcome { text, fallback_reason: None }),
        Ok(_) => Ok(EnhanceOutcome::fallback(
            document,
            &AppError::EnhancerError { message: "empty response".to_string(), status: None },
        )),
        Err(err) => Ok(EnhanceOutcome::fallback(document, &err)),
    }
}
