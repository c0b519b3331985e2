//! Admin session and the capability token admin operations require.
//!
//! This is UI gating, not a security boundary: the credential is a single
//! shared password compared in plain text.

use std::fmt;
use std::marker::PhantomData;

use crate::errors::CoreError;

/// Password accepted when nothing else is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Holds the admin credential and whether it has been presented.
pub struct AdminSession {
    credential: String,
    logged_in: bool,
}

impl AdminSession {
    #[must_use]
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            logged_in: false,
        }
    }

    /// Compare `password` with the credential. On a match the session
    /// becomes an admin session; on a mismatch it stays (or becomes) logged out.
    pub fn login(&mut self, password: &str) -> bool {
        self.logged_in = password == self.credential;
        self.logged_in
    }

    pub const fn logout(&mut self) {
        self.logged_in = false;
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.logged_in
    }

    /// Obtain the capability token admin operations take.
    ///
    /// The token borrows the session, so the session cannot be logged out
    /// while a token is alive.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::AdminRequired` if the session is not logged in.
    pub fn token(&self) -> Result<AdminToken<'_>, CoreError> {
        if self.logged_in {
            Ok(AdminToken {
                _session: PhantomData,
            })
        } else {
            Err(CoreError::AdminRequired)
        }
    }
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PASSWORD)
    }
}

impl fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSession")
            .field("logged_in", &self.logged_in)
            .finish_non_exhaustive()
    }
}

/// Proof that an admin session was logged in. Only [`AdminSession::token`]
/// can construct one.
#[derive(Debug, Clone, Copy)]
pub struct AdminToken<'s> {
    _session: PhantomData<&'s AdminSession>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out() {
        let session = AdminSession::default();
        assert!(!session.is_admin());
        assert!(matches!(session.token(), Err(CoreError::AdminRequired)));
    }

    #[test]
    fn correct_password_grants_token() {
        let mut session = AdminSession::new("hunter2");
        assert!(session.login("hunter2"));
        assert!(session.is_admin());
        assert!(session.token().is_ok());
    }

    #[test]
    fn wrong_password_is_refused() {
        let mut session = AdminSession::default();
        assert!(!session.login("admin"));
        assert!(session.token().is_err());
    }

    #[test]
    fn failed_login_drops_existing_admin_state() {
        let mut session = AdminSession::default();
        assert!(session.login(DEFAULT_ADMIN_PASSWORD));
        assert!(!session.login("nope"));
        assert!(!session.is_admin());
    }

    #[test]
    fn logout_revokes_access() {
        let mut session = AdminSession::default();
        session.login(DEFAULT_ADMIN_PASSWORD);
        session.logout();
        assert!(session.token().is_err());
    }

    #[test]
    fn debug_does_not_leak_credential() {
        let session = AdminSession::new("s3cret");
        assert!(!format!("{session:?}").contains("s3cret"));
    }
}
