use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemStatus;

/// A found object reported to the board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub date_found: NaiveDate,
    pub finder_name: String,
    pub finder_contact: String,
    /// Photo as a `data:` URL.
    #[serde(default)]
    pub photo: Option<String>,
    pub status: ItemStatus,
    pub date_reported: DateTime<Utc>,
    /// Ids of claims submitted against this item, in submission order.
    /// Never pruned, so entries may point at rejected (deleted) claims.
    #[serde(default)]
    pub claims: Vec<String>,
}

impl Item {
    /// Whether the item appears in public listings.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.status.is_visible()
    }

    /// Whether the public listing offers a claim action for this item.
    #[must_use]
    pub fn is_claimable(&self) -> bool {
        self.status == ItemStatus::Available
    }
}
