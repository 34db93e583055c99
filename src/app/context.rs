use crate::domain::{AppError, Catalog, Identity};
use crate::ports::{HistoryStore, IdentityProvider};

/// Application context holding dependencies for command execution.
pub struct AppContext<H: HistoryStore> {
    catalog: Catalog,
    identity: Option<Identity>,
    history: Option<H>,
}

impl<H: HistoryStore> AppContext<H> {
    /// Create a context for an anonymous user; history is unavailable.
    pub fn anonymous(catalog: Catalog) -> Self {
        Self { catalog, identity: None, history: None }
    }

    /// Create a context for a signed-in user with their history store.
    pub fn with_identity(catalog: Catalog, identity: Identity, history: H) -> Self {
        Self { catalog, identity: Some(identity), history: Some(history) }
    }

    /// Ask `provider` for the identity and open its history store when present.
    pub fn from_provider<P, F>(
        catalog: Catalog,
        provider: &P,
        open_store: F,
    ) -> Result<Self, AppError>
    where
        P: IdentityProvider,
        F: FnOnce(&Identity) -> Result<H, AppError>,
    {
        match provider.current() {
            Some(identity) => {
                let store = open_store(&identity)?;
                Ok(Self::with_identity(catalog, identity, store))
            }
            None => Ok(Self::anonymous(catalog)),
        }
    }

    /// Get a reference to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the current identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Get the history store; present only when an identity is.
    pub fn history(&self) -> Option<&H> {
        self.history.as_ref()
    }
}
