//! Cross-cutting error types for the board.
//!
//! Storage-specific errors (`StoreError`) live in `lf-store`; configuration
//! errors live in `lf-config`. A unified error is deferred to `lf-cli`, which
//! converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any board crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A form value failed validation. `field` uses the stored record's
    /// field name (e.g. `dateFound`).
    #[error("Validation error: {field} {reason}")]
    Validation { field: &'static str, reason: String },

    /// An admin-only operation was attempted without a logged-in session.
    #[error("Admin session required")]
    AdminRequired,

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a validation failure on `field`.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
