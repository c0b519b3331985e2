//! Result of an admin mutation that may legitimately do nothing.

/// What an admin action did.
///
/// Lookup misses and declined confirmations are not errors: the board
/// treats them as silent no-ops and reports them here instead.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The mutation happened and was persisted.
    Applied(T),
    /// No record with the given id exists. Nothing changed.
    Missing,
    /// The confirmation prompt was declined. Nothing changed.
    Declined,
    /// The record exists but the action does not apply to its current state.
    Ignored,
}

impl<T> Outcome<T> {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The applied value, if any.
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Missing | Self::Declined | Self::Ignored => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Applied(_) => "applied",
            Self::Missing => "missing",
            Self::Declined => "declined",
            Self::Ignored => "ignored",
        }
    }
}
