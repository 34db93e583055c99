use crate::domain::Identity;

/// Supplies the current identity, if any.
pub trait IdentityProvider {
    fn current(&self) -> Option<Identity>;
}
