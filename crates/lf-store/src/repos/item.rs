//! Item repository: reporting, approval, claimed toggle, deletion, browsing.

use chrono::Utc;

use lf_core::drafts::ItemDraft;
use lf_core::entities::Item;
use lf_core::enums::{ItemStatus, Severity};
use lf_core::feedback::{Confirm, messages};
use lf_core::filter::{ItemFilter, renderable_items};
use lf_core::session::AdminToken;

use crate::board::Board;
use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::outcome::Outcome;

impl<S: KeyValueStore> Board<S> {
    /// Report a found item. It starts `Pending` and stays hidden from public
    /// listings until an admin approves it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core(CoreError::Validation)` if the draft is
    /// invalid (nothing is stored), or a write error.
    pub fn create_item(&mut self, draft: ItemDraft) -> Result<Item, StoreError> {
        let now = Utc::now();
        let item = draft.into_item(now, || self.next_id(now))?;

        self.items.push(item.clone());
        self.persist_items()?;

        tracing::debug!(item_id = %item.id, name = %item.name, "item reported");
        self.notify(Severity::Success, messages::ITEM_REPORTED);
        Ok(item)
    }

    /// Publish an item by setting it `Available`.
    ///
    /// # Errors
    ///
    /// Returns a write error if persisting fails.
    pub fn approve_item(
        &mut self,
        _admin: &AdminToken<'_>,
        id: &str,
    ) -> Result<Outcome<Item>, StoreError> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(item_id = id, "approve: no such item");
            return Ok(Outcome::Missing);
        };

        if !item.status.can_transition_to(ItemStatus::Available) {
            tracing::debug!(item_id = id, from = %item.status, "re-approving non-pending item");
        }
        item.status = ItemStatus::Available;
        let approved = item.clone();
        self.persist_items()?;

        tracing::debug!(item_id = id, "item approved");
        self.notify(Severity::Success, messages::ITEM_APPROVED);
        Ok(Outcome::Applied(approved))
    }

    /// Flip an approved item between `Available` and `Claimed`.
    ///
    /// Pending items have no toggle; the call is ignored and nothing is
    /// written.
    ///
    /// # Errors
    ///
    /// Returns a write error if persisting fails.
    pub fn toggle_claimed(
        &mut self,
        _admin: &AdminToken<'_>,
        id: &str,
    ) -> Result<Outcome<Item>, StoreError> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(item_id = id, "toggle: no such item");
            return Ok(Outcome::Missing);
        };
        let Some(next) = item.status.toggled() else {
            tracing::warn!(
                item_id = id,
                status = %item.status,
                "toggle ignored for unapproved item"
            );
            return Ok(Outcome::Ignored);
        };

        item.status = next;
        let toggled = item.clone();
        self.persist_items()?;

        tracing::debug!(item_id = id, status = %next, "item toggled");
        let message = format!("Item marked as {}!", next.as_str().to_lowercase());
        self.notify(Severity::Success, &message);
        Ok(Outcome::Applied(toggled))
    }

    /// Remove an item after confirmation.
    ///
    /// Claims referencing the item are left in place with a dangling
    /// `itemId`.
    ///
    /// # Errors
    ///
    /// Returns a write error if persisting fails.
    pub fn delete_item(
        &mut self,
        _admin: &AdminToken<'_>,
        id: &str,
        confirm: &dyn Confirm,
    ) -> Result<Outcome<Item>, StoreError> {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            tracing::debug!(item_id = id, "delete: no such item");
            return Ok(Outcome::Missing);
        };
        if !confirm.confirm(messages::CONFIRM_DELETE_ITEM) {
            tracing::info!(item_id = id, "item deletion declined");
            return Ok(Outcome::Declined);
        }

        let removed = self.items.remove(index);
        self.persist_items()?;

        tracing::debug!(item_id = id, "item deleted");
        self.notify(Severity::Success, messages::ITEM_DELETED);
        Ok(Outcome::Applied(removed))
    }

    /// Items a public listing shows for `filter`, in report order.
    #[must_use]
    pub fn list_visible(&self, filter: &ItemFilter) -> Vec<&Item> {
        renderable_items(&self.items, filter)
    }
}
