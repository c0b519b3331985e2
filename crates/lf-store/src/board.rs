//! The board: an owned repository of items and claims.
//!
//! `Board` loads both collections from a [`KeyValueStore`] when opened and
//! keeps them in memory. Every mutation edits the in-memory collection and
//! then rewrites the affected collections in full. All item, claim, contact,
//! and overview operations are implemented as `impl Board` blocks in
//! [`crate::repos`].

use chrono::{DateTime, Utc};
use lf_core::entities::{Claim, Item};
use lf_core::enums::Severity;
use lf_core::feedback::Notifier;
use lf_core::ids::IdGenerator;

use crate::error::StoreError;
use crate::kv::{self, CLAIMS_KEY, ITEMS_KEY, KeyValueStore};
use crate::notify::TracingNotifier;

/// Items and claims, mirrored to a key-value store on every mutation.
pub struct Board<S: KeyValueStore> {
    store: S,
    pub(crate) items: Vec<Item>,
    pub(crate) claims: Vec<Claim>,
    ids: IdGenerator,
    notifier: Box<dyn Notifier>,
}

impl<S: KeyValueStore> Board<S> {
    /// Load the board from `store`, notifying through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if a stored collection cannot be
    /// deserialized. There is no automatic recovery.
    pub fn open(store: S) -> Result<Self, StoreError> {
        Self::open_with_notifier(store, Box::new(TracingNotifier))
    }

    /// Load the board from `store`, sending notifications to `notifier`.
    ///
    /// # Errors
    ///
    /// See [`Self::open`].
    pub fn open_with_notifier(store: S, notifier: Box<dyn Notifier>) -> Result<Self, StoreError> {
        let items: Vec<Item> = kv::load_collection(&store, ITEMS_KEY)?;
        let claims: Vec<Claim> = kv::load_collection(&store, CLAIMS_KEY)?;
        let ids = IdGenerator::seeded(
            items
                .iter()
                .map(|i| i.id.as_str())
                .chain(claims.iter().map(|c| c.id.as_str())),
        );
        tracing::debug!(items = items.len(), claims = claims.len(), "board loaded");
        Ok(Self {
            store,
            items,
            claims,
            ids,
            notifier,
        })
    }

    /// All items in report order, regardless of status.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All claims in submission order, regardless of status.
    #[must_use]
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Look up an item. `None` if it never existed or was deleted.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up a claim. `None` if it never existed or was rejected.
    #[must_use]
    pub fn claim(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|claim| claim.id == id)
    }

    /// Access the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub(crate) const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub(crate) fn notify(&self, severity: Severity, message: &str) {
        self.notifier.notify(severity, message);
    }

    /// Issue a fresh id, unique across both collections.
    pub(crate) fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let items = &self.items;
        let claims = &self.claims;
        self.ids.next(now, |candidate| {
            items.iter().any(|i| i.id == candidate) || claims.iter().any(|c| c.id == candidate)
        })
    }

    pub(crate) fn persist_items(&mut self) -> Result<(), StoreError> {
        kv::save_collection(&mut self.store, ITEMS_KEY, &self.items)
    }

    pub(crate) fn persist_claims(&mut self) -> Result<(), StoreError> {
        kv::save_collection(&mut self.store, CLAIMS_KEY, &self.claims)
    }
}

#[cfg(test)]
mod tests {
    use crate::kv::{KeyValueStore, MemoryStore};
    use crate::test_support::helpers::{item_draft, test_board};

    use super::*;

    #[test]
    fn opening_empty_store_yields_empty_board() {
        let board = Board::open(MemoryStore::new()).unwrap();
        assert!(board.items().is_empty());
        assert!(board.claims().is_empty());
        assert!(board.store().is_empty(), "opening must not write");
    }

    #[test]
    fn corrupt_items_abort_open() {
        let mut store = MemoryStore::new();
        store.set(ITEMS_KEY, "[{\"id\": 1}]".into()).unwrap();
        let result = Board::open(store);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn ids_are_seeded_past_loaded_records() {
        let (mut board, _) = test_board();
        let item = board.create_item(item_draft("Scarf")).unwrap();
        let store = board.store().clone();

        let mut reopened = Board::open(store).unwrap();
        let next = reopened.next_id(DateTime::<Utc>::MIN_UTC);
        assert!(next.parse::<i64>().unwrap() > item.id.parse::<i64>().unwrap());
    }
}
