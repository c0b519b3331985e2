//! Photo attachment encoding.
//!
//! A photo is stored inline on the item as a base64 `data:` URL, so the
//! stored collection stays self-contained.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::StoreError;

/// Default upper bound on a photo file, in bytes.
pub const DEFAULT_PHOTO_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// MIME type guessed from the file extension.
#[must_use]
pub fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Read `path` and encode it as a `data:<mime>;base64,...` URL.
///
/// # Errors
///
/// Returns `StoreError::PhotoRead` if the file cannot be read, or
/// `StoreError::PhotoTooLarge` if it exceeds `max_bytes`.
pub async fn encode_photo(path: &Path, max_bytes: u64) -> Result<String, StoreError> {
    let read_err = |source| StoreError::PhotoRead {
        path: path.to_path_buf(),
        source,
    };

    let size = tokio::fs::metadata(path).await.map_err(read_err)?.len();
    if size > max_bytes {
        return Err(StoreError::PhotoTooLarge {
            path: path.to_path_buf(),
            size,
            max: max_bytes,
        });
    }

    let bytes = tokio::fs::read(path).await.map_err(read_err)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "photo encoded");
    Ok(format!("data:{};base64,{}", mime_type(path), STANDARD.encode(bytes)))
}
