//! Collaborator interfaces the board consumes from its front end.
//!
//! The board never talks to a terminal or a browser directly. It asks a
//! [`Confirm`] before destructive admin actions and reports outcomes to a
//! [`Notifier`].

use crate::enums::Severity;

/// Yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Sink for user-facing notifications.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _severity: Severity, _message: &str) {}
}

/// Notification texts shown after successful actions.
pub mod messages {
    pub const ITEM_REPORTED: &str =
        "Item reported successfully! It will be visible after admin approval.";
    pub const ITEM_APPROVED: &str = "Item approved successfully!";
    pub const ITEM_DELETED: &str = "Item deleted successfully!";
    pub const CLAIM_SUBMITTED: &str = "Your claim has been submitted! The finder will be notified and will contact you if approved.";
    pub const CLAIM_APPROVED: &str = "Claim approved! Item marked as claimed.";
    pub const CLAIM_REJECTED: &str = "Claim rejected.";
    pub const CONTACT_SENT: &str = "Thank you! Your message has been sent.";
    pub const LOGIN_OK: &str = "Admin login successful!";
    pub const LOGIN_FAILED: &str = "Incorrect password!";
    pub const SAVE_FAILED: &str = "Something went wrong while saving. Please try again.";

    pub const CONFIRM_DELETE_ITEM: &str = "Are you sure you want to delete this item?";
    pub const CONFIRM_REJECT_CLAIM: &str = "Are you sure you want to reject this claim?";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_confirmations() {
        let yes = |_: &str| true;
        let no = |_: &str| false;
        assert!(yes.confirm(messages::CONFIRM_DELETE_ITEM));
        assert!(!no.confirm(messages::CONFIRM_REJECT_CLAIM));
    }
}
