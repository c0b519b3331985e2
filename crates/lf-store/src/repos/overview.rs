//! Read-side summaries: public stats and the admin panel.

use lf_core::responses::{AdminOverview, BoardStats};
use lf_core::session::AdminToken;

use crate::board::Board;
use crate::kv::KeyValueStore;

impl<S: KeyValueStore> Board<S> {
    #[must_use]
    pub fn stats(&self) -> BoardStats {
        BoardStats::compute(&self.items, &self.claims)
    }

    /// Pending items, approved items, and pending claims joined with their
    /// items.
    #[must_use]
    pub fn admin_overview(&self, _admin: &AdminToken<'_>) -> AdminOverview {
        AdminOverview::compute(&self.items, &self.claims)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{admin, claim_draft, item_draft, test_board};

    #[test]
    fn stats_track_board_mutations() {
        let (mut board, _) = test_board();
        let session = admin();
        let token = session.token().unwrap();

        let a = board.create_item(item_draft("Wallet")).unwrap();
        let b = board.create_item(item_draft("Keys")).unwrap();
        assert_eq!(board.stats(), BoardStats::default());

        let _ = board.approve_item(&token, &a.id).unwrap();
        let _ = board.approve_item(&token, &b.id).unwrap();
        let claim = board.submit_claim(&a.id, claim_draft("Riley")).unwrap();
        assert_eq!(
            board.stats(),
            BoardStats {
                total_items: 2,
                claimed_items: 0,
                pending_claims: 1,
            }
        );

        let _ = board.approve_claim(&token, &claim.id).unwrap();
        assert_eq!(
            board.stats(),
            BoardStats {
                total_items: 2,
                claimed_items: 1,
                pending_claims: 0,
            }
        );
    }

    #[test]
    fn overview_hides_claims_for_deleted_items() {
        let (mut board, _) = test_board();
        let session = admin();
        let token = session.token().unwrap();
        let kept = board.create_item(item_draft("Wallet")).unwrap();
        let doomed = board.create_item(item_draft("Keys")).unwrap();
        let _ = board.approve_item(&token, &kept.id).unwrap();
        board.submit_claim(&kept.id, claim_draft("A")).unwrap();
        board.submit_claim(&doomed.id, claim_draft("B")).unwrap();
        let _ = board.delete_item(&token, &doomed.id, &|_: &str| true).unwrap();

        let overview = board.admin_overview(&token);
        assert_eq!(overview.pending_count, 0);
        assert_eq!(overview.approved_count, 1);
        assert_eq!(overview.claims_count, 2);
        assert_eq!(overview.pending_claims.len(), 1);
        assert_eq!(overview.pending_claims[0].item.id, kept.id);
    }
}
