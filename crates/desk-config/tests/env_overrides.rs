use desk_config::DeskConfig;
use desk_core::enums::Tab;
use figment::Jail;

#[test]
fn prefixed_env_sets_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("DESK_GEMINI__API_KEY", "key-from-desk");
        jail.set_env("DESK_GEMINI__MODEL", "gemini-2.0-pro");
        jail.set_env("DESK_GENERAL__DEFAULT_TAB", "ai_buddy");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "key-from-desk");
        assert_eq!(config.gemini.model, "gemini-2.0-pro");
        assert_eq!(config.general.default_tab, Tab::AiBuddy);
        Ok(())
    });
}

#[test]
fn conventional_key_fills_credential() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "plain-key");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "plain-key");
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn gemini_key_beats_generic_api_key() {
    Jail::expect_with(|jail| {
        jail.set_env("API_KEY", "generic");
        jail.set_env("GEMINI_API_KEY", "specific");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "specific");
        Ok(())
    });
}

#[test]
fn prefixed_key_beats_conventional_key() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "plain-key");
        jail.set_env("DESK_GEMINI__API_KEY", "desk-key");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.gemini.api_key, "desk-key");
        Ok(())
    });
}

#[test]
fn invalid_tab_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.set_env("DESK_GENERAL__DEFAULT_TAB", "homework");
        assert!(DeskConfig::load().is_err());
        Ok(())
    });
}
