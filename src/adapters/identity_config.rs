//! Identity supplied by configuration, overridable from the environment.

use crate::domain::Identity;
use crate::ports::IdentityProvider;

pub const USER_ID_ENV: &str = "DEVPROMPT_USER_ID";
pub const USER_EMAIL_ENV: &str = "DEVPROMPT_USER_EMAIL";

#[derive(Debug, Clone, Default)]
pub struct ConfigIdentityProvider {
    identity: Option<Identity>,
}

impl ConfigIdentityProvider {
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }

    /// Apply `DEVPROMPT_USER_ID` / `DEVPROMPT_USER_EMAIL` on top of the configured identity.
    pub fn from_config_and_env(configured: Option<Identity>) -> Self {
        let env_id = std::env::var(USER_ID_ENV).ok().filter(|v| !v.trim().is_empty());
        let env_email = std::env::var(USER_EMAIL_ENV).ok().filter(|v| !v.trim().is_empty());

        let identity = match (env_id, configured) {
            (Some(id), configured) => Some(Identity::new(
                id,
                env_email.or_else(|| configured.and_then(|identity| identity.email)),
            )),
            (None, Some(mut identity)) => {
                if env_email.is_some() {
                    identity.email = env_email;
                }
                Some(identity)
            }
            (None, None) => None,
        };

        Self { identity }
    }
}

impl IdentityProvider for ConfigIdentityProvider {
    fn current(&self) -> Option<Identity> {
        self.identity.clone()
    }
}
