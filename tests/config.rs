use fintra_server::config::{Config, DEFAULT_BASE_URL};

// Single test: Config::from_env reads process-global state, so the
// assertions run in sequence rather than as parallel #[test] fns.
#[test]
fn from_env_validates_the_api_key_at_startup() {
    std::env::remove_var("FINTRA_LISTEN_ADDR");
    std::env::remove_var("FINTRA_BASE_URL");
    std::env::set_var("PORT", "4101");

    std::env::remove_var("FINTRA_API_KEY");
    assert!(Config::from_env().is_err());

    std::env::set_var("FINTRA_API_KEY", "   ");
    assert!(Config::from_env().is_err());

    std::env::set_var("FINTRA_API_KEY", "demo-key");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "demo-key");
    assert_eq!(config.listen_addr.port(), 4101);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.cors_allow, vec!["*".to_string()]);

    std::env::set_var("FINTRA_LISTEN_ADDR", "127.0.0.1:9100");
    let config = Config::from_env().unwrap();
    assert_eq!(config.listen_addr.port(), 9100);

    for key in ["FINTRA_API_KEY", "FINTRA_LISTEN_ADDR", "PORT"] {
        std::env::remove_var(key);
    }
}
