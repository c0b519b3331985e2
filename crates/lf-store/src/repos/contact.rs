//! Contact messages: an append-only log, loaded only when a message is sent.

use chrono::Utc;

use lf_core::drafts::ContactDraft;
use lf_core::entities::ContactMessage;
use lf_core::enums::Severity;
use lf_core::feedback::messages;

use crate::board::Board;
use crate::error::StoreError;
use crate::kv::{self, CONTACT_KEY, KeyValueStore};

impl<S: KeyValueStore> Board<S> {
    /// Append a message from the contact form.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core(CoreError::Validation)` for an invalid
    /// draft, `StoreError::Corrupt` if the stored log is unreadable, or a
    /// write error.
    pub fn send_contact_message(
        &mut self,
        draft: ContactDraft,
    ) -> Result<ContactMessage, StoreError> {
        let message = draft.into_message(Utc::now())?;

        let mut log: Vec<ContactMessage> = kv::load_collection(self.store(), CONTACT_KEY)?;
        log.push(message.clone());
        kv::save_collection(self.store_mut(), CONTACT_KEY, &log)?;

        tracing::debug!(total = log.len(), "contact message stored");
        self.notify(Severity::Success, messages::CONTACT_SENT);
        Ok(message)
    }

    /// Every stored contact message, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored log is unreadable.
    pub fn contact_messages(&self) -> Result<Vec<ContactMessage>, StoreError> {
        kv::load_collection(self.store(), CONTACT_KEY)
    }
}
