//! # lf-store
//!
//! Persistence and state management for the lost & found board.
//!
//! - [`kv`]: the key-value persistence adapter (file-backed and in-memory)
//! - [`board::Board`]: the owned repository holding the item and claim
//!   collections; every mutation rewrites the affected collections in full
//! - [`repos`]: item, claim, contact, and overview operations as
//!   `impl Board` blocks
//! - [`photo`]: async encoding of photo files into `data:` URLs

pub mod board;
pub mod error;
pub mod kv;
pub mod notify;
pub mod outcome;
pub mod photo;
pub mod repos;

mod test_support;

pub use board::Board;
pub use error::StoreError;
pub use outcome::Outcome;
