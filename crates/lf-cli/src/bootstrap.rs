use anyhow::Context;
use lf_config::BoardConfig;

/// Load `.env`, then the layered config, and reject unusable values.
pub fn load_config() -> anyhow::Result<BoardConfig> {
    let config = BoardConfig::load_with_dotenv().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    Ok(config)
}
