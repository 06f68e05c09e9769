use figment::Jail;

use board_config::BoardConfig;

#[test]
fn env_fills_nested_api_values() {
    Jail::expect_with(|jail| {
        jail.set_env("SPRINTBOARD_API__BASE_URL", "https://board.example.com");
        jail.set_env("SPRINTBOARD_API__TIMEOUT_SECS", "30");

        let config = BoardConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://board.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn unset_env_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = BoardConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://localhost:8001");
        assert_eq!(config.api.user_agent, "sprintboard/0.1");
        Ok(())
    });
}

#[test]
fn empty_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("SPRINTBOARD_API__BASE_URL", "");

        let result = BoardConfig::load();
        assert!(result.is_err());
        Ok(())
    });
}
