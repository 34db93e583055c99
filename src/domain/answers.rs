//! Answer set: the immutable snapshot of everything the wizard collected.
//!
//! Field names serialize in camelCase so form state exported by a web client
//! loads unchanged.

use serde::{Deserialize, Serialize};

/// Reserved single-select key that unlocks the free-text companion field.
pub const OTHER_KEY: &str = "outro";

/// How the tech stack is described.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackMode {
    /// Separate frontend and backend choices.
    #[default]
    Separate,
    /// A single fullstack framework.
    Fullstack,
}

/// Structured answers to the wizard questionnaire.
///
/// Every field is optional; blank strings and empty lists mean "unanswered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerSet {
    pub system_type: String,
    pub system_type_custom: String,

    pub objective: String,

    pub general_features: Vec<String>,
    pub general_features_custom: String,
    pub specific_features: Vec<String>,
    pub specific_features_custom: String,

    pub colors: Vec<String>,
    pub colors_custom: String,
    pub visual_style: String,
    pub visual_style_custom: String,
    pub menu_type: String,
    pub menu_type_custom: String,

    pub has_landing_page: bool,
    pub landing_structure: Vec<String>,
    pub landing_structure_custom: String,
    pub landing_elements: Vec<String>,
    pub landing_elements_custom: String,
    pub landing_style: String,
    pub landing_style_custom: String,

    pub auth_type: String,
    pub auth_type_custom: String,

    pub has_dashboard: bool,
    pub dashboard_features: Vec<String>,
    pub dashboard_features_custom: String,

    pub stack_mode: StackMode,
    pub frontend: String,
    pub frontend_custom: String,
    pub backend: String,
    pub backend_custom: String,
    pub fullstack: String,
    pub fullstack_custom: String,
    pub database: String,
    pub database_custom: String,
    pub orm: String,
    pub orm_custom: String,
    pub deploy: String,
    pub deploy_custom: String,

    pub security_requirements: Vec<String>,
    pub security_custom: String,

    pub folder_organization: String,
    pub folder_organization_custom: String,
    pub architecture_pattern: String,
    pub architecture_pattern_custom: String,
    pub best_practices: Vec<String>,
    pub best_practices_custom: String,

    pub restrictions: Vec<String>,
    pub restrictions_custom: String,
}

impl AnswerSet {
    /// Create an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// System type after applying the "other" override.
    pub fn resolved_system_type(&self) -> Option<&str> {
        resolve_choice(&self.system_type, &self.system_type_custom)
    }
}

/// Trimmed text, or `None` when blank.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Resolve a single-select value that supports the "other" override.
///
/// The reserved key yields the companion text (or nothing when that is blank);
/// any other value is used verbatim.
pub fn resolve_choice<'a>(value: &'a str, custom: &'a str) -> Option<&'a str> {
    let value = non_blank(value)?;
    if value == OTHER_KEY { non_blank(custom) } else { Some(value) }
}

/// Order a multi-select for output.
///
/// Catalog entries come first in the catalog's declared order. Stored keys the
/// catalog does not know follow in the order they were stored. The custom
/// companion, when non-blank, is always the last item and is never merged with
/// a catalog entry of the same text.
pub fn ordered_selection(selected: &[String], custom: &str, catalog: &[String]) -> Vec<String> {
    let chosen: Vec<&str> = selected.iter().filter_map(|item| non_blank(item)).collect();

    let mut out: Vec<String> = catalog
        .iter()
        .filter(|option| chosen.contains(&option.as_str()))
        .cloned()
        .collect();

    for item in &chosen {
        if !catalog.iter().any(|option| option == item)
            && !out.iter().any(|existing| existing == item)
        {
            out.push((*item).to_string());
        }
    }

    if let Some(extra) = non_blank(custom) {
        out.push(extra.to_string());
    }

    out
}
