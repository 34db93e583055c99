//! Catalog sources: the catalog embedded in the binary and file overrides.

use std::fs;
use std::path::PathBuf;

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, Catalog};
use crate::ports::CatalogSource;

static ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

const CATALOG_ASSET: &str = "catalog.toml";

/// Read a UTF-8 asset embedded in the binary.
pub fn read_embedded_asset(path: &str) -> Result<&'static str, AppError> {
    let file = ASSETS_DIR
        .get_file(path)
        .ok_or_else(|| AppError::CatalogError(format!("Missing embedded asset: {path}")))?;

    file.contents_utf8()
        .ok_or_else(|| AppError::CatalogError(format!("Embedded asset is not valid UTF-8: {path}")))
}

/// The default catalog shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog, AppError> {
        Catalog::from_toml_str(read_embedded_asset(CATALOG_ASSET)?)
    }
}

/// A catalog read from a TOML file on disk.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> Result<Catalog, AppError> {
        tracing::debug!(path = %self.path.display(), "loading catalog override");
        let content = fs::read_to_string(&self.path).map_err(|err| {
            AppError::CatalogError(format!("Failed to read {}: {}", self.path.display(), err))
        })?;
        Catalog::from_toml_str(&content)
    }
}
