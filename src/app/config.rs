//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::{EmbeddedCatalog, FileCatalog, FilesystemHistoryStore};
use crate::domain::configuration::parse_config_content;
use crate::domain::{AppConfig, AppError, Catalog};
use crate::ports::CatalogSource;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DEVPROMPT_CONFIG";

/// Resolve the config file path: explicit flag, then `DEVPROMPT_CONFIG`, then
/// `$HOME/.config/devprompt/config.toml`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let home = std::env::var_os("HOME")
        .ok_or_else(|| AppError::EnvironmentVariableMissing("HOME".into()))?;
    Ok(PathBuf::from(home).join(".config").join("devprompt").join("config.toml"))
}

/// Load configuration; a missing file yields defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let path = resolve_config_path(explicit)?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    let mut config = parse_config_content(&content).map_err(|err| match err {
        AppError::InvalidConfig(reason) => {
            AppError::InvalidConfig(format!("{}: {}", path.display(), reason))
        }
        other => AppError::InvalidConfig(format!("{}: {}", path.display(), other)),
    })?;

    // Relative catalog paths are relative to the config file.
    if let Some(catalog_path) = config.catalog.path.as_mut()
        && catalog_path.is_relative()
        && let Some(parent) = path.parent()
    {
        *catalog_path = parent.join(&*catalog_path);
    }

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Catalog source selected by `[catalog] path`.
pub fn catalog_source(config: &AppConfig) -> Box<dyn CatalogSource> {
    match &config.catalog.path {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(EmbeddedCatalog::new()),
    }
}

pub fn load_catalog(config: &AppConfig) -> Result<Catalog, AppError> {
    catalog_source(config).load()
}

/// History directory from `[history] dir`, else the user data dir.
pub fn history_dir(config: &AppConfig) -> Result<PathBuf, AppError> {
    match &config.history.dir {
        Some(dir) => Ok(dir.clone()),
        None => FilesystemHistoryStore::default_dir(),
    }
}
