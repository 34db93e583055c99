//! Reading and writing answer sets as JSON, TOML or YAML files.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::domain::{AnswerSet, AppError};

/// Source name meaning "read JSON from stdin".
pub const STDIN_SOURCE: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswersFormat {
    Json,
    Toml,
    Yaml,
}

impl AnswersFormat {
    /// Pick the format from a file extension; unknown extensions are JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase) {
            Some(ext) if ext == "toml" => AnswersFormat::Toml,
            Some(ext) if ext == "yml" || ext == "yaml" => AnswersFormat::Yaml,
            _ => AnswersFormat::Json,
        }
    }
}

/// Parse answers from `content` in the given format.
pub fn parse_answers(
    content: &str,
    format: AnswersFormat,
    source_name: &str,
) -> Result<AnswerSet, AppError> {
    let parse_error = |details: String| AppError::AnswersParseError {
        source_name: source_name.to_string(),
        details,
    };

    if content.trim().is_empty() {
        return Ok(AnswerSet::default());
    }

    match format {
        AnswersFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        AnswersFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        AnswersFormat::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
    }
}

/// Load answers from a file path, or from stdin when `source` is `-`.
pub fn load_answers(source: &str) -> Result<AnswerSet, AppError> {
    if source == STDIN_SOURCE {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return parse_answers(&content, AnswersFormat::Json, "stdin");
    }

    let path = Path::new(source);
    let content = fs::read_to_string(path).map_err(|err| AppError::AnswersParseError {
        source_name: source.to_string(),
        details: err.to_string(),
    })?;
    tracing::debug!(path = source, "loaded answers file");
    parse_answers(&content, AnswersFormat::from_path(path), source)
}

/// Write answers to `path` in the format its extension implies.
pub fn save_answers(path: &Path, answers: &AnswerSet) -> Result<(), AppError> {
    let content = match AnswersFormat::from_path(path) {
        AnswersFormat::Json => serde_json::to_string_pretty(answers).map_err(|e| e.to_string()),
        AnswersFormat::Toml => toml::to_string_pretty(answers).map_err(|e| e.to_string()),
        AnswersFormat::Yaml => serde_yaml::to_string(answers).map_err(|e| e.to_string()),
    }
    .map_err(|details| AppError::AnswersParseError {
        source_name: path.display().to_string(),
        details,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
