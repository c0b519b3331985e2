use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A message sent through the contact form. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Free-form timestamp. New messages use RFC 3339; older logs may hold
    /// locale-formatted text, which is kept as written.
    pub date: String,
}
