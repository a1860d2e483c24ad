//! Auth service endpoint configuration.

/// Base URL of the auth service; overridable at build time via `AUTH_SERVICE_URL`.
pub const DEFAULT_AUTH_SERVICE_URL: &str = match option_env!("AUTH_SERVICE_URL") {
    Some(url) => url,
    None => "http://localhost:4555",
};

pub const LOGOUT_PATH: &str = "/v1/logout";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthServiceConfig {
    base_url: String,
}

impl AuthServiceConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn logout_url(&self) -> String {
        format!("{}{LOGOUT_PATH}", self.base_url)
    }
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_SERVICE_URL)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
