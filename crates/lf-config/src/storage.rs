//! Where the board keeps its collections.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> PathBuf {
    PathBuf::from(".lostfound/data")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per collection. Relative paths resolve
    /// against the working directory.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}
