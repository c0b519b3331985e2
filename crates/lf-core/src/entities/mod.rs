//! Entity structs for the board's persisted records.
//!
//! Each entity maps to one record in a stored collection. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` with camelCase field names so
//! the JSON layout matches the collections already on disk.

mod claim;
mod contact;
mod item;

pub use claim::Claim;
pub use contact::ContactMessage;
pub use item::Item;
