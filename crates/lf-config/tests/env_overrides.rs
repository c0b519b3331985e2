use std::path::PathBuf;

use figment::Jail;
use lf_config::BoardConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("LOSTFOUND_ADMIN__PASSWORD", "from-env");
        jail.set_env("LOSTFOUND_STORAGE__DIR", "/tmp/lf");
        jail.set_env("LOSTFOUND_GENERAL__DEFAULT_LIMIT", "7");

        let config = BoardConfig::load().expect("config loads");
        assert_eq!(config.admin.password, "from-env");
        assert_eq!(config.storage.dir, PathBuf::from("/tmp/lf"));
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lostfound")?;
        jail.create_file(".lostfound/config.toml", "[admin]\npassword = \"from-file\"\n")?;
        jail.set_env("LOSTFOUND_ADMIN__PASSWORD", "from-env");

        let config = BoardConfig::load().expect("config loads");
        assert_eq!(config.admin.password, "from-env");
        Ok(())
    });
}

#[test]
fn log_filter_var_does_not_break_extraction() {
    Jail::expect_with(|jail| {
        jail.set_env("LOSTFOUND_LOG", "debug");
        let config = BoardConfig::load().expect("config loads");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

