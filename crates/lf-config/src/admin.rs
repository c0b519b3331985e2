//! Admin credential configuration.

use std::fmt;

use lf_core::session::{AdminSession, DEFAULT_ADMIN_PASSWORD};
use serde::{Deserialize, Serialize};

fn default_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

#[derive(Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    /// The single shared admin password.
    #[serde(default = "default_password")]
    pub password: String,
}

impl AdminConfig {
    /// A logged-out session checking against the configured password.
    #[must_use]
    pub fn session(&self) -> AdminSession {
        AdminSession::new(self.password.clone())
    }

    /// Whether the password was left at the built-in default.
    #[must_use]
    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_ADMIN_PASSWORD
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: default_password(),
        }
    }
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_password_is_builtin() {
        let config = AdminConfig::default();
        assert!(config.uses_default_password());
        let mut session = config.session();
        assert!(session.login(DEFAULT_ADMIN_PASSWORD));
    }

    #[test]
    fn debug_hides_password() {
        let config = AdminConfig {
            password: "hunter2".into(),
        };
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
