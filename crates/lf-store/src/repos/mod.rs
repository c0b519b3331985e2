//! Repository modules implementing the board's operations.
//!
//! Each module adds methods to `Board` via `impl Board` blocks.

pub mod claim;
pub mod contact;
pub mod item;
pub mod overview;
