//! Key-value persistence adapter.
//!
//! Each collection lives under one key as a JSON array and is always written
//! whole. There are no transactions: an operation that touches two
//! collections performs two independent writes.
//!
//! ## Implementations
//!
//! - [`FileStore`]: one `<key>.json` file per key in a directory.
//! - [`MemoryStore`]: a `HashMap`, for tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Key holding the item collection.
pub const ITEMS_KEY: &str = "lostFoundItems";
/// Key holding the claim collection.
pub const CLAIMS_KEY: &str = "lostFoundClaims";
/// Key holding the append-only contact messages.
pub const CONTACT_KEY: &str = "contactMessages";

/// Abstract key-value storage of serialized text.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, or `None` if nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` if the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the backend fails.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Load a collection. A missing key is an empty collection.
///
/// # Errors
///
/// Returns `StoreError::Corrupt` if the stored text is not a valid array of
/// `T`, or the backend's read error.
pub fn load_collection<T, S>(store: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(text) => serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

/// Overwrite a collection.
///
/// # Errors
///
/// Returns `StoreError::Serialize` or the backend's write error.
pub fn save_collection<T, S>(store: &mut S, key: &str, records: &[T]) -> Result<(), StoreError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let text = serde_json::to_string(records).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, text)?;
    tracing::trace!(key, records = records.len(), "collection saved");
    Ok(())
}
