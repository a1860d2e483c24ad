use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let cfg = AuthServiceConfig::new("https://auth.example.com//");
    assert_eq!(cfg.base_url(), "https://auth.example.com");
    assert_eq!(cfg.logout_url(), "https://auth.example.com/v1/logout");
}

#[test]
fn new_trims_whitespace() {
    let cfg = AuthServiceConfig::new("  http://127.0.0.1:9000 ");
    assert_eq!(cfg.logout_url(), "http://127.0.0.1:9000/v1/logout");
}

#[test]
fn default_uses_build_time_url() {
    let cfg = AuthServiceConfig::default();
    assert_eq!(cfg.base_url(), DEFAULT_AUTH_SERVICE_URL.trim_end_matches('/'));
    assert!(cfg.logout_url().ends_with(LOGOUT_PATH));
}
