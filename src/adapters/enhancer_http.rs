//! Chat-completions client for "enhance with AI" using reqwest.

use std::time::Duration;

use minijinja::{Environment, context};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::adapters::catalog_embedded::read_embedded_asset;
use crate::domain::{AppError, EnhancerConfig};
use crate::ports::{EnhanceRequest, PromptEnhancer};

const INSTRUCTION_TEMPLATE: &str = "enhance_instruction.j2";
const DEFAULT_STATUS_MESSAGE: &str = "Enhancer request failed";

/// HTTP transport for an OpenAI-compatible chat-completions endpoint.
///
/// One request per call; failures are returned to the caller, which keeps
/// the unenhanced document.
#[derive(Clone)]
pub struct HttpPromptEnhancer {
    api_key: String,
    api_url: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpPromptEnhancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPromptEnhancer")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpPromptEnhancer {
    /// Create a client with the given API key and configuration.
    pub fn new(api_key: String, config: &EnhancerConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::EnhancerError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, api_url: config.api_url.clone(), model: config.model.clone(), client })
    }

    /// Create from the environment variable named in the configuration.
    pub fn from_env_with_config(config: &EnhancerConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| AppError::EnvironmentVariableMissing(config.api_key_env.clone()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ChatRequest) -> Result<String, AppError> {
        tracing::info!(url = %self.api_url, model = %self.model, "requesting prompt enhancement");
        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::EnhancerError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let parsed: ChatResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::EnhancerError {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            let content = parsed
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .map(|content| content.trim().to_string())
                .filter(|content| !content.is_empty())
                .ok_or_else(|| AppError::EnhancerError {
                    message: "Response contained no content".into(),
                    status: Some(status.as_u16()),
                })?;
            return Ok(content);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        tracing::warn!(status = status.as_u16(), %message, "enhancer request rejected");
        Err(AppError::EnhancerError { message, status: Some(status.as_u16()) })
    }
}

/// Render the system instruction sent ahead of the prompt.
pub fn render_instruction(system_type: Option<&str>) -> Result<String, AppError> {
    let template = read_embedded_asset(INSTRUCTION_TEMPLATE)?;
    let env = Environment::new();
    env.render_str(template, context! { system_type => system_type }).map_err(|err| {
        AppError::TemplateRenderError {
            template: INSTRUCTION_TEMPLATE.to_string(),
            reason: err.to_string(),
        }
    })
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl PromptEnhancer for HttpPromptEnhancer {
    fn enhance(&self, request: &EnhanceRequest) -> Result<String, AppError> {
        let instruction = render_instruction(request.system_type.as_deref())?;
        let chat = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage { role: "system", content: instruction },
                ChatMessage { role: "user", content: request.prompt.clone() },
            ],
        };

        self.send_request(&chat)
    }
}
