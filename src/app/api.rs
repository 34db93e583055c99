//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution. Each call loads the catalog and identity afresh from
//! the given configuration.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::adapters::{
    ArboardClipboard, ConfigIdentityProvider, FilesystemHistoryStore, HttpPromptEnhancer,
};
use crate::app::{
    AppContext,
    commands::{compose, copy, enhance, export, history},
    config,
};
use crate::domain::{AnswerSet, AppConfig, Catalog, HistoryEntry, StepCompletion};

pub use crate::app::commands::answers_file::{load_answers, save_answers};
pub use crate::app::commands::compose::{ComposeOutcome, format_progress};
pub use crate::app::commands::copy::CopyOutcome;
pub use crate::app::commands::enhance::EnhanceOutcome;
pub use crate::app::config::load_config;
pub use crate::domain::AppError;

/// Create an `AppContext` from configuration.
///
/// History is wired only when an identity is configured.
pub fn create_context(config: &AppConfig) -> Result<AppContext<FilesystemHistoryStore>, AppError> {
    let catalog = config::load_catalog(config)?;
    let identity = ConfigIdentityProvider::from_config_and_env(config.identity.clone());

    AppContext::from_provider(catalog, &identity, |identity| {
        let dir = config::history_dir(config)?;
        let store = FilesystemHistoryStore::new(&dir, identity);
        tracing::debug!(identity = %identity.id, path = %store.path().display(), "history enabled");
        Ok(store)
    })
}

/// Load the active catalog.
pub fn catalog(config: &AppConfig) -> Result<Catalog, AppError> {
    config::load_catalog(config)
}

/// Compose the document for `answers`.
pub fn compose(config: &AppConfig, answers: &AnswerSet) -> Result<ComposeOutcome, AppError> {
    let ctx = create_context(config)?;
    Ok(compose::execute(&ctx, answers))
}

/// Step completion for `answers`.
pub fn progress(config: &AppConfig, answers: &AnswerSet) -> Result<StepCompletion, AppError> {
    compose(config, answers).map(|outcome| outcome.completion)
}

/// Copy `document` to the system clipboard, saving it to history when signed in.
pub fn copy_to_clipboard(config: &AppConfig, document: &str) -> Result<CopyOutcome, AppError> {
    let ctx = create_context(config)?;
    let mut clipboard = ArboardClipboard::new()?;
    copy::execute(&ctx, &mut clipboard, document)
}

/// Write `document` to `target`, or to a timestamped file in the current directory.
pub fn export(document: &str, target: Option<&Path>) -> Result<PathBuf, AppError> {
    let cwd = std::env::current_dir()?;
    export::execute(document, target, &cwd, Utc::now())
}

/// Rewrite `document` through the configured enhancer.
///
/// Missing credentials or a failing endpoint return the original document
/// with a fallback reason instead of an error.
pub fn enhance(
    config: &AppConfig,
    document: &str,
    system_type: Option<&str>,
) -> Result<EnhanceOutcome, AppError> {
    if document.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }
    match HttpPromptEnhancer::from_env_with_config(&config.enhancer) {
        Ok(enhancer) => enhance::execute(&enhancer, document, system_type),
        Err(err) => Ok(EnhanceOutcome::fallback(document, &err)),
    }
}

/// Save `document` to the signed-in user's history.
pub fn history_save(config: &AppConfig, document: &str) -> Result<HistoryEntry, AppError> {
    history::save(&create_context(config)?, document)
}

pub fn history_list(config: &AppConfig) -> Result<Vec<HistoryEntry>, AppError> {
    history::list(&create_context(config)?)
}

pub fn history_show(config: &AppConfig, id: &str) -> Result<HistoryEntry, AppError> {
    history::show(&create_context(config)?, id)
}

pub fn history_delete(config: &AppConfig, id: &str) -> Result<HistoryEntry, AppError> {
    history::delete(&create_context(config)?, id)
}
