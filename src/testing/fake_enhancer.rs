use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::{EnhanceRequest, PromptEnhancer};

/// Enhancer returning a canned reply, or failing.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct FakeEnhancer {
    reply: Option<String>,
    pub requests: RefCell<Vec<EnhanceRequest>>,
}

#[allow(dead_code)]
impl FakeEnhancer {
    pub fn replying(reply: &str) -> Self {
        Self { reply: Some(reply.to_string()), requests: RefCell::default() }
    }

    pub fn failing() -> Self {
        Self::default()
    }
}

impl PromptEnhancer for FakeEnhancer {
    fn enhance(&self, request: &EnhanceRequest) -> Result<String, AppError> {
        self.requests.borrow_mut().push(request.clone());
        self.reply.clone().ok_or_else(|| AppError::EnhancerError {
            message: "service unavailable".to_string(),
            status: Some(503),
        })
    }
}
