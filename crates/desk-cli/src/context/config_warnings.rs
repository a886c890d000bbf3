use desk_config::DeskConfig;

/// Warn about settings that look intended but did not take effect.
pub fn warn_unconfigured(config: &DeskConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &DeskConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.gemini.is_configured() {
        return warnings;
    }

    if has_env_prefix(&env_keys, "DESK_GEMINI") {
        warnings.push(
            "Gemini API key is empty while DESK_GEMINI* env vars exist. Use double underscores (example: DESK_GEMINI__API_KEY)."
                .to_string(),
        );
    } else {
        warnings.push(
            "Gemini API key is not configured; AI answers will be a fallback message. Set GEMINI_API_KEY or DESK_GEMINI__API_KEY."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
