//! In-crate test doubles and fixtures.

mod fake_enhancer;
mod memory_history;
pub mod strategies;

use std::collections::BTreeMap;

use crate::domain::{Catalog, Identity};
use crate::ports::IdentityProvider;

#[allow(unused_imports)]
pub use fake_enhancer::FakeEnhancer;
#[allow(unused_imports)]
pub use memory_history::MemoryHistoryStore;
#[allow(unused_imports)]
pub use mock_clipboard::MockClipboard;

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Small catalog with default labels, used across composer and completion tests.
pub fn sample_catalog() -> Catalog {
    let mut specific_features = BTreeMap::new();
    specific_features.insert("e-commerce".to_string(), strings(&["Cart", "Checkout"]));
    specific_features.insert("saas".to_string(), strings(&["Billing", "Tenants"]));

    Catalog {
        system_types: strings(&["e-commerce", "saas", "outro"]),
        specific_features,
        colors: strings(&["A", "B", "C"]),
        security_requirements: strings(&["Proteção contra SQL Injection, XSS, CSRF", "2FA"]),
        ..Catalog::default()
    }
}

/// Identity provider returning a fixed value.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct FixedIdentity(pub Option<Identity>);

#[allow(dead_code)]
impl FixedIdentity {
    pub fn signed_in(id: &str) -> Self {
        Self(Some(Identity::new(id, None)))
    }
}

impl IdentityProvider for FixedIdentity {
    fn current(&self) -> Option<Identity> {
        self.0.clone()
    }
}
