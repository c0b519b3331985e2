//! Claim repository: submission, approval, rejection, and back-references.

use chrono::Utc;

use lf_core::drafts::ClaimDraft;
use lf_core::entities::{Claim, Item};
use lf_core::enums::{ClaimStatus, ItemStatus, Severity};
use lf_core::feedback::{Confirm, messages};
use lf_core::responses::{ClaimRef, ItemDetail};
use lf_core::session::AdminToken;

use crate::board::Board;
use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::outcome::Outcome;

impl<S: KeyValueStore> Board<S> {
    /// Submit a claim against `item_id`.
    ///
    /// If the item exists the claim id is appended to its `claims` list. A
    /// missing item does not prevent the claim from being recorded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core(CoreError::Validation)` for an invalid draft,
    /// or a write error.
    pub fn submit_claim(&mut self, item_id: &str, draft: ClaimDraft) -> Result<Claim, StoreError> {
        let now = Utc::now();
        let claim = draft.into_claim(item_id, now, || self.next_id(now))?;

        self.claims.push(claim.clone());
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => item.claims.push(claim.id.clone()),
            None => tracing::debug!(
                item_id,
                claim_id = %claim.id,
                "claim recorded for unknown item"
            ),
        }
        self.persist_claims()?;
        self.persist_items()?;

        tracing::debug!(item_id, claim_id = %claim.id, "claim submitted");
        self.notify(Severity::Success, messages::CLAIM_SUBMITTED);
        Ok(claim)
    }

    /// Approve a claim and mark its item `Claimed`.
    ///
    /// The item side is skipped when the item no longer exists. Approving an
    /// already-approved claim re-applies the same state.
    ///
    /// # Errors
    ///
    /// Returns a write error if persisting fails.
    pub fn approve_claim(
        &mut self,
        _admin: &AdminToken<'_>,
        claim_id: &str,
    ) -> Result<Outcome<Claim>, StoreError> {
        let Some(claim) = self.claims.iter_mut().find(|claim| claim.id == claim_id) else {
            tracing::debug!(claim_id, "approve: no such claim");
            return Ok(Outcome::Missing);
        };
        claim.status = ClaimStatus::Approved;
        let approved = claim.clone();

        match self.items.iter_mut().find(|item| item.id == approved.item_id) {
            Some(item) => item.status = ItemStatus::Claimed,
            None => tracing::debug!(
                claim_id,
                item_id = %approved.item_id,
                "approved claim targets missing item"
            ),
        }
        self.persist_claims()?;
        self.persist_items()?;

        tracing::debug!(claim_id, item_id = %approved.item_id, "claim approved");
        self.notify(Severity::Success, messages::CLAIM_APPROVED);
        Ok(Outcome::Applied(approved))
    }

    /// Reject a claim after confirmation. Rejection deletes the claim; the
    /// item's `claims` list keeps the stale id.
    ///
    /// # Errors
    ///
    /// Returns a write error if persisting fails.
    pub fn reject_claim(
        &mut self,
        _admin: &AdminToken<'_>,
        claim_id: &str,
        confirm: &dyn Confirm,
    ) -> Result<Outcome<Claim>, StoreError> {
        let Some(index) = self.claims.iter().position(|claim| claim.id == claim_id) else {
            tracing::debug!(claim_id, "reject: no such claim");
            return Ok(Outcome::Missing);
        };
        if !confirm.confirm(messages::CONFIRM_REJECT_CLAIM) {
            tracing::info!(claim_id, "claim rejection declined");
            return Ok(Outcome::Declined);
        }

        let removed = self.claims.remove(index);
        self.persist_claims()?;

        tracing::debug!(claim_id, item_id = %removed.item_id, "claim rejected");
        self.notify(Severity::Success, messages::CLAIM_REJECTED);
        Ok(Outcome::Applied(removed))
    }

    /// Claims awaiting review, in submission order.
    #[must_use]
    pub fn list_pending_claims(&self) -> Vec<&Claim> {
        self.claims
            .iter()
            .filter(|claim| claim.status == ClaimStatus::Pending)
            .collect()
    }

    /// Resolve an item's `claims` back-references. Ids of rejected claims
    /// resolve to `None`.
    #[must_use]
    pub fn claims_for_item<'a>(&'a self, item: &'a Item) -> Vec<(&'a str, Option<&'a Claim>)> {
        item.claims
            .iter()
            .map(|id| (id.as_str(), self.claim(id)))
            .collect()
    }

    /// An item with its resolved claims, or `None` if the item is gone.
    #[must_use]
    pub fn item_detail(&self, id: &str) -> Option<ItemDetail> {
        let item = self.item(id)?;
        let claims = self
            .claims_for_item(item)
            .into_iter()
            .map(|(id, claim)| ClaimRef {
                id: id.to_string(),
                claim: claim.cloned(),
            })
            .collect();
        Some(ItemDetail {
            item: item.clone(),
            claimable: item.is_claimable(),
            claims,
        })
    }
}
