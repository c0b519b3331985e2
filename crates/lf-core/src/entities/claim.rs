use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ClaimStatus;

/// A request by a third party asserting ownership of an item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    /// Weak reference: the item may have been deleted since.
    pub item_id: String,
    pub claimant_name: String,
    pub claimant_contact: String,
    pub description: String,
    pub date_submitted: DateTime<Utc>,
    pub status: ClaimStatus,
}
