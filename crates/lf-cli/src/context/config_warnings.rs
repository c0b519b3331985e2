use lf_config::{BoardConfig, ENV_PREFIX};

/// Emit warnings for likely mistyped env var keys and an unchanged admin
/// password.
pub fn warn_unconfigured(config: &BoardConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &BoardConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    for section in ["STORAGE", "ADMIN", "GENERAL"] {
        let single = format!("{ENV_PREFIX}{section}_");
        let double = format!("{ENV_PREFIX}{section}__");
        if env_keys
            .iter()
            .any(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "{single}* env vars are ignored. Use double underscores (example: {double}{}).",
                example_field(section)
            ));
        }
    }

    if config.admin.uses_default_password() {
        warnings.push(
            "Admin password is the built-in default. Set LOSTFOUND_ADMIN__PASSWORD or [admin] password."
                .to_string(),
        );
    }

    warnings
}

fn example_field(section: &str) -> &'static str {
    match section {
        "STORAGE" => "DIR",
        "ADMIN" => "PASSWORD",
        _ => "DEFAULT_LIMIT",
    }
}
