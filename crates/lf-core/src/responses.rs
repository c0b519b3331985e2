//! Read-model response types returned by board queries.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Claim, Item};
use crate::enums::{ClaimStatus, ItemStatus};

/// Headline numbers for the home page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    /// Items visible to the public (available or claimed).
    pub total_items: usize,
    pub claimed_items: usize,
    pub pending_claims: usize,
}

impl BoardStats {
    #[must_use]
    pub fn compute(items: &[Item], claims: &[Claim]) -> Self {
        Self {
            total_items: items.iter().filter(|i| i.is_visible()).count(),
            claimed_items: items
                .iter()
                .filter(|i| i.status == ItemStatus::Claimed)
                .count(),
            pending_claims: claims
                .iter()
                .filter(|c| c.status == ClaimStatus::Pending)
                .count(),
        }
    }
}

/// A pending claim joined with the item it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PendingClaim {
    pub claim: Claim,
    pub item: Item,
}

/// Everything the admin panel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub pending_count: usize,
    pub approved_count: usize,
    pub claims_count: usize,
    pub pending_items: Vec<Item>,
    pub approved_items: Vec<Item>,
    /// Pending claims whose item still exists. Claims against deleted items
    /// are counted in `claims_count` but not listed.
    pub pending_claims: Vec<PendingClaim>,
}

impl AdminOverview {
    #[must_use]
    pub fn compute(items: &[Item], claims: &[Claim]) -> Self {
        let pending_items: Vec<Item> = items
            .iter()
            .filter(|i| i.status == ItemStatus::Pending)
            .cloned()
            .collect();
        let approved_items: Vec<Item> = items.iter().filter(|i| i.is_visible()).cloned().collect();
        let open_claims = claims.iter().filter(|c| c.status == ClaimStatus::Pending);
        let claims_count = open_claims.clone().count();
        let pending_claims = open_claims
            .filter_map(|claim| {
                items
                    .iter()
                    .find(|item| item.id == claim.item_id)
                    .map(|item| PendingClaim {
                        claim: claim.clone(),
                        item: item.clone(),
                    })
            })
            .collect();

        Self {
            pending_count: pending_items.len(),
            approved_count: approved_items.len(),
            claims_count,
            pending_items,
            approved_items,
            pending_claims,
        }
    }
}

/// One entry of an item's `claims` back-reference list, resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClaimRef {
    pub id: String,
    /// `None` when the claim was rejected (deleted) after being recorded.
    pub claim: Option<Claim>,
}

/// An item together with its resolved claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub item: Item,
    pub claimable: bool,
    pub claims: Vec<ClaimRef>,
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(id: &str, status: ItemStatus) -> Item {
        Item {
            id: id.into(),
            name: format!("item {id}"),
            category: "Misc".into(),
            description: "something".into(),
            location: "Lobby".into(),
            date_found: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            finder_name: "F".into(),
            finder_contact: "f@example.com".into(),
            photo: None,
            status,
            date_reported: Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap(),
            claims: Vec::new(),
        }
    }

    fn claim(id: &str, item_id: &str, status: ClaimStatus) -> Claim {
        Claim {
            id: id.into(),
            item_id: item_id.into(),
            claimant_name: "C".into(),
            claimant_contact: "c@example.com".into(),
            description: "mine".into(),
            date_submitted: Utc.with_ymd_and_hms(2025, 2, 2, 12, 0, 0).unwrap(),
            status,
        }
    }

    #[test]
    fn stats_count_visible_claimed_and_pending() {
        let items = vec![
            item("1", ItemStatus::Pending),
            item("2", ItemStatus::Available),
            item("3", ItemStatus::Claimed),
        ];
        let claims = vec![
            claim("10", "2", ClaimStatus::Pending),
            claim("11", "3", ClaimStatus::Approved),
        ];
        assert_eq!(
            BoardStats::compute(&items, &claims),
            BoardStats {
                total_items: 2,
                claimed_items: 1,
                pending_claims: 1,
            }
        );
    }

    #[test]
    fn overview_skips_claims_for_deleted_items() {
        let items = vec![item("1", ItemStatus::Pending), item("2", ItemStatus::Available)];
        let claims = vec![
            claim("10", "2", ClaimStatus::Pending),
            claim("11", "gone", ClaimStatus::Pending),
            claim("12", "2", ClaimStatus::Approved),
        ];
        let overview = AdminOverview::compute(&items, &claims);
        assert_eq!(overview.pending_count, 1);
        assert_eq!(overview.approved_count, 1);
        assert_eq!(overview.claims_count, 2);
        assert_eq!(overview.pending_claims.len(), 1);
        assert_eq!(overview.pending_claims[0].claim.id, "10");
        assert_eq!(overview.pending_claims[0].item.id, "2");
    }
}
