//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

/// Default photo size cap: 5 MiB.
const fn default_photo_max_bytes() -> u64 {
    5 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default row limit for listing commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Largest photo file accepted when reporting an item.
    #[serde(default = "default_photo_max_bytes")]
    pub photo_max_bytes: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            photo_max_bytes: default_photo_max_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.photo_max_bytes, 5_242_880);
    }
}
