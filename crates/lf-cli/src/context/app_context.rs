use std::path::PathBuf;

use anyhow::Context;
use lf_config::BoardConfig;
use lf_store::Board;
use lf_store::kv::FileStore;

use crate::ui::ConsoleNotifier;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub board: Board<FileStore>,
    pub config: BoardConfig,
}

impl AppContext {
    /// Open the file-backed board, preferring `data_dir` over the configured
    /// storage directory.
    pub fn init(config: BoardConfig, data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let dir = data_dir.unwrap_or_else(|| config.storage.dir.clone());
        let store = FileStore::open(&dir)
            .with_context(|| format!("failed to open data directory {}", dir.display()))?;
        let board = Board::open_with_notifier(store, Box::new(ConsoleNotifier))
            .with_context(|| format!("failed to load board from {}", dir.display()))?;

        tracing::debug!(
            dir = %dir.display(),
            items = board.items().len(),
            claims = board.claims().len(),
            "board ready"
        );
        Ok(Self { board, config })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn data_dir_flag_overrides_config() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("override");
        let ctx = AppContext::init(BoardConfig::default(), Some(target.clone())).unwrap();
        assert_eq!(ctx.board.store().dir(), target.as_path());
        assert!(target.is_dir());
    }

    #[test]
    fn corrupt_data_fails_startup() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("lostFoundItems.json"), "{").unwrap();
        let err = AppContext::init(BoardConfig::default(), Some(dir.path().to_path_buf()))
            .err()
            .unwrap();
        assert!(format!("{err:#}").contains("corrupt"));
    }
}
