//! Application configuration loaded from `config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::identity::Identity;

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Signed-in user; history is disabled without one.
    #[serde(default)]
    pub identity: Option<Identity>,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub enhancer: EnhancerConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(identity) = &self.identity
            && identity.id.trim().is_empty()
        {
            return Err(AppError::InvalidConfig("identity.id must not be empty".to_string()));
        }
        self.enhancer.validate()?;
        Ok(())
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Where history files live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    /// Directory holding one JSON file per identity. Defaults to the user data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Catalog override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// TOML file replacing the embedded catalog.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Chat-completions endpoint used by "enhance with AI".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnhancerConfig {
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the bearer token.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout(),
        }
    }
}

impl EnhancerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "enhancer.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("enhancer.model must not be empty".to_string()));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "enhancer.api_key_env must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions").expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_timeout() -> u64 {
    60
}
