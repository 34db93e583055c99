use crate::domain::{AppError, Catalog};

/// Supplies the option catalog the composer renders against.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, AppError>;
}
