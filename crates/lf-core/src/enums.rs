//! Status enums and notification severities for the board.
//!
//! Status enums serialize with their variant names (`"Pending"`, `"Available"`,
//! ...) so stored collections stay readable by earlier versions of the board.
//! Status enums with state machines provide `allowed_next_states()` for the
//! admin-driven transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ItemStatus
// ---------------------------------------------------------------------------

/// Status of a reported item.
///
/// ```text
/// pending → available ⇄ claimed
/// ```
///
/// Approving a claim forces the referenced item to `claimed` from any state;
/// that path bypasses `allowed_next_states()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ItemStatus {
    Pending,
    Available,
    Claimed,
}

impl ItemStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Available],
            Self::Available => &[Self::Claimed],
            Self::Claimed => &[Self::Available],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether items in this state show up in public listings.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Available | Self::Claimed)
    }

    /// The state the admin claimed/available toggle moves to.
    ///
    /// `None` for `Pending`: unapproved items have no toggle.
    #[must_use]
    pub const fn toggled(self) -> Option<Self> {
        match self {
            Self::Pending => None,
            Self::Available => Some(Self::Claimed),
            Self::Claimed => Some(Self::Available),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Available => "Available",
            Self::Claimed => "Claimed",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = CoreError;

    /// Case-insensitive parse, so `available` and `Available` both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Pending, Self::Available, Self::Claimed]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation {
                field: "status",
                reason: format!("unknown item status '{s}'"),
            })
    }
}

// ---------------------------------------------------------------------------
// ClaimStatus
// ---------------------------------------------------------------------------

/// Status of an ownership claim.
///
/// ```text
/// pending → approved
/// ```
///
/// There is no rejected state: rejecting a claim deletes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ClaimStatus {
    Pending,
    Approved,
}

impl ClaimStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved],
            Self::Approved => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(item_pending, ItemStatus, ItemStatus::Pending, "Pending");
    test_serde_roundtrip!(item_claimed, ItemStatus, ItemStatus::Claimed, "Claimed");
    test_serde_roundtrip!(claim_approved, ClaimStatus, ClaimStatus::Approved, "Approved");
    test_serde_roundtrip!(severity_danger, Severity, Severity::Danger, "danger");

    // --- Transition tests ---

    #[test]
    fn item_valid_transitions() {
        assert!(ItemStatus::Pending.can_transition_to(ItemStatus::Available));
        assert!(ItemStatus::Available.can_transition_to(ItemStatus::Claimed));
        assert!(ItemStatus::Claimed.can_transition_to(ItemStatus::Available));
    }

    #[test]
    fn item_invalid_transitions() {
        assert!(!ItemStatus::Pending.can_transition_to(ItemStatus::Claimed));
        assert!(!ItemStatus::Available.can_transition_to(ItemStatus::Pending));
        assert!(!ItemStatus::Claimed.can_transition_to(ItemStatus::Pending));
    }

    #[test]
    fn pending_item_has_no_toggle() {
        assert_eq!(ItemStatus::Pending.toggled(), None);
        assert_eq!(ItemStatus::Available.toggled(), Some(ItemStatus::Claimed));
        assert_eq!(ItemStatus::Claimed.toggled(), Some(ItemStatus::Available));
    }

    #[test]
    fn only_approved_items_are_visible() {
        assert!(!ItemStatus::Pending.is_visible());
        assert!(ItemStatus::Available.is_visible());
        assert!(ItemStatus::Claimed.is_visible());
    }

    #[test]
    fn claim_transitions() {
        assert!(ClaimStatus::Pending.can_transition_to(ClaimStatus::Approved));
        assert!(ClaimStatus::Approved.allowed_next_states().is_empty());
    }

    #[rstest]
    #[case("Available", ItemStatus::Available)]
    #[case("available", ItemStatus::Available)]
    #[case(" CLAIMED ", ItemStatus::Claimed)]
    #[case("pending", ItemStatus::Pending)]
    fn item_status_parses_case_insensitively(#[case] raw: &str, #[case] expected: ItemStatus) {
        assert_eq!(raw.parse::<ItemStatus>().unwrap(), expected);
    }

    #[test]
    fn item_status_rejects_unknown_value() {
        let err = "lost".parse::<ItemStatus>().unwrap_err();
        assert!(matches!(err, CoreError::Validation { field: "status", .. }));
    }

    // --- Display / as_str tests ---

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", ItemStatus::Available), "Available");
        assert_eq!(format!("{}", ClaimStatus::Pending), "Pending");
        assert_eq!(format!("{}", Severity::Success), "success");
    }
}
