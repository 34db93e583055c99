use crate::domain::AppError;

/// Input for one enhancement round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceRequest {
    /// The composed document.
    pub prompt: String,
    /// Resolved system type, used to steer the rewrite.
    pub system_type: Option<String>,
}

/// "Enhance with AI": rewrites a composed document through an external model.
pub trait PromptEnhancer {
    fn enhance(&self, request: &EnhanceRequest) -> Result<String, AppError>;
}
