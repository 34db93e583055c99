//! Catalog: ordered option lists and section labels consumed by the composer.
//!
//! The catalog is configuration, not state. The composer reads option order
//! and headings from here and hardcodes no domain text of its own.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::answers::OTHER_KEY;

/// Static, versionless option lists for every catalog-backed field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Catalog {
    pub labels: Labels,
    pub system_types: Vec<String>,
    /// System type key to the ordered list of features specific to it.
    pub specific_features: BTreeMap<String, Vec<String>>,
    pub general_features: Vec<String>,
    pub colors: Vec<String>,
    pub visual_styles: Vec<String>,
    pub menu_types: Vec<String>,
    pub landing_structure: Vec<String>,
    pub landing_elements: Vec<String>,
    pub landing_styles: Vec<String>,
    pub auth_types: Vec<String>,
    pub dashboard_features: Vec<String>,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub fullstack: Vec<String>,
    pub databases: Vec<String>,
    pub orms: Vec<String>,
    pub deploy: Vec<String>,
    pub security_requirements: Vec<String>,
    pub folder_organizations: Vec<String>,
    pub architecture_patterns: Vec<String>,
    pub best_practices: Vec<String>,
    pub restrictions: Vec<String>,
}

/// Headings and fixed sentences used when rendering a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    pub title_prefix: String,
    pub objective: String,
    pub functionalities: String,
    pub general: String,
    pub specific: String,
    pub design: String,
    pub colors: String,
    pub visual_style: String,
    pub menu_type: String,
    pub landing_page: String,
    pub structure: String,
    pub elements: String,
    pub style: String,
    pub authentication: String,
    pub dashboard: String,
    pub tech_stack: String,
    pub frontend: String,
    pub backend: String,
    pub fullstack: String,
    pub database: String,
    pub orm: String,
    pub deploy: String,
    pub security: String,
    pub code_structure: String,
    pub folder_organization: String,
    pub architecture_pattern: String,
    pub best_practices: String,
    pub restrictions: String,
    pub closing_instruction: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title_prefix: "Sistema".into(),
            objective: "Objective".into(),
            functionalities: "Functionalities".into(),
            general: "General".into(),
            specific: "Specific".into(),
            design: "Design".into(),
            colors: "Colors".into(),
            visual_style: "Visual Style".into(),
            menu_type: "Menu Type".into(),
            landing_page: "Landing Page".into(),
            structure: "Structure".into(),
            elements: "Elements".into(),
            style: "Style".into(),
            authentication: "Authentication".into(),
            dashboard: "Dashboard".into(),
            tech_stack: "Tech Stack".into(),
            frontend: "Frontend".into(),
            backend: "Backend".into(),
            fullstack: "Fullstack".into(),
            database: "Database".into(),
            orm: "ORM".into(),
            deploy: "Deploy".into(),
            security: "Security".into(),
            code_structure: "Code Structure".into(),
            folder_organization: "Folder Organization".into(),
            architecture_pattern: "Architecture Pattern".into(),
            best_practices: "Best Practices".into(),
            restrictions: "Restrictions".into(),
            closing_instruction: "Generate the complete code for this system following every \
                                  specification above, ready to run in production."
                .into(),
        }
    }
}

impl Catalog {
    /// Parse and validate a catalog from TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let catalog: Catalog = toml::from_str(content)
            .map_err(|err| AppError::CatalogError(format!("Failed to parse catalog: {}", err)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Features offered for a system type; empty when the type has no list.
    pub fn specific_features_for(&self, system_type: &str) -> &[String] {
        self.specific_features.get(system_type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every flat option list paired with its TOML key.
    pub fn lists(&self) -> Vec<(&'static str, &[String])> {
        vec![
            ("system_types", self.system_types.as_slice()),
            ("general_features", self.general_features.as_slice()),
            ("colors", self.colors.as_slice()),
            ("visual_styles", self.visual_styles.as_slice()),
            ("menu_types", self.menu_types.as_slice()),
            ("landing_structure", self.landing_structure.as_slice()),
            ("landing_elements", self.landing_elements.as_slice()),
            ("landing_styles", self.landing_styles.as_slice()),
            ("auth_types", self.auth_types.as_slice()),
            ("dashboard_features", self.dashboard_features.as_slice()),
            ("frontend", self.frontend.as_slice()),
            ("backend", self.backend.as_slice()),
            ("fullstack", self.fullstack.as_slice()),
            ("databases", self.databases.as_slice()),
            ("orms", self.orms.as_slice()),
            ("deploy", self.deploy.as_slice()),
            ("security_requirements", self.security_requirements.as_slice()),
            ("folder_organizations", self.folder_organizations.as_slice()),
            ("architecture_patterns", self.architecture_patterns.as_slice()),
            ("best_practices", self.best_practices.as_slice()),
            ("restrictions", self.restrictions.as_slice()),
        ]
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for (name, options) in self.lists() {
            ensure_unique(name, options)?;
        }

        for (system_type, features) in &self.specific_features {
            if !self.system_types.iter().any(|known| known == system_type) {
                return Err(AppError::CatalogError(format!(
                    "specific_features key '{}' is not a declared system type",
                    system_type
                )));
            }
            ensure_unique(&format!("specific_features.{}", system_type), features)?;
        }

        if self.system_types.iter().any(|key| key == OTHER_KEY)
            && self.specific_features.contains_key(OTHER_KEY)
        {
            return Err(AppError::CatalogError(format!(
                "'{}' is reserved and cannot carry specific features",
                OTHER_KEY
            )));
        }

        Ok(())
    }
}

fn ensure_unique(name: &str, options: &[String]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for option in options {
        if option.trim().is_empty() {
            return Err(AppError::CatalogError(format!("Blank option in '{}'", name)));
        }
        if !seen.insert(option.as_str()) {
            return Err(AppError::CatalogError(format!(
                "Duplicate option '{}' in '{}'",
                option, name
            )));
        }
    }
    Ok(())
}
