//! Logout action against the auth service.
//!
//! The call is a single best-effort `GET /v1/logout` with cookies attached.
//! If the service answered with a redirect, the tab moves to `/signin`.
//! Failures are logged and swallowed: the user stays on the current page and
//! the auth store is left alone.
//!
//! Transport and navigation sit behind traits so the browser path
//! (`gloo-net` + `window.location`, feature `hydrate`) and the native path
//! (`reqwest`) share the same decision logic.

use async_trait::async_trait;

use super::types::{LogoutResponse, ServiceError, SuccessfulResponse, decode_reply};

pub const SIGNIN_PATH: &str = "/signin";

#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid logout url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// What `request_logout` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Service redirected; the tab was sent to `/signin`.
    Navigated,
    /// Service answered without a redirect.
    Stayed,
    /// Request failed and was logged.
    Failed,
}

// =============================================================================
// SEAMS
// =============================================================================

#[async_trait(?Send)]
pub trait LogoutTransport {
    /// Perform the credentialed logout request.
    async fn get_logout(&self) -> Result<LogoutResponse, LogoutError>;
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

// =============================================================================
// ACTION
// =============================================================================

/// Call the logout endpoint once and navigate to `/signin` on redirect.
///
/// Never returns an error; failures are logged and reported as
/// [`LogoutOutcome::Failed`].
pub async fn request_logout<T, N>(transport: &T, navigator: &N) -> LogoutOutcome
where
    T: LogoutTransport + ?Sized,
    N: Navigator + ?Sized,
{
    match transport.get_logout().await {
        Ok(resp) if resp.redirected => {
            navigator.navigate(SIGNIN_PATH);
            LogoutOutcome::Navigated
        }
        Ok(_) => LogoutOutcome::Stayed,
        Err(e) => {
            log::error!("logout request failed: {e}");
            LogoutOutcome::Failed
        }
    }
}

/// Log what the service said when it answered without redirecting.
/// Never affects the outcome.
fn log_reply(ok: bool, body: &str) {
    match decode_reply::<SuccessfulResponse>(ok, body) {
        Ok(reply) => log::debug!("logout: {}", reply.message),
        Err(ServiceError::Rejected(message)) => log::warn!("logout rejected by auth service: {message}"),
        Err(ServiceError::Malformed(_)) => {}
    }
}

// =============================================================================
// BROWSER (hydrate)
// =============================================================================

#[cfg(feature = "hydrate")]
pub struct FetchTransport {
    url: String,
}

#[cfg(feature = "hydrate")]
impl FetchTransport {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl LogoutTransport for FetchTransport {
    async fn get_logout(&self) -> Result<LogoutResponse, LogoutError> {
        let resp = gloo_net::http::Request::get(&self.url)
            .credentials(gloo_net::http::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| LogoutError::Network(e.to_string()))?;
        let redirected = resp.redirected();
        if !redirected {
            if let Ok(body) = resp.text().await {
                log_reply(resp.ok(), &body);
            }
        }
        Ok(LogoutResponse { redirected })
    }
}

/// Navigates by assigning `window.location.href`.
#[cfg(feature = "hydrate")]
pub struct WindowNavigator;

#[cfg(feature = "hydrate")]
impl Navigator for WindowNavigator {
    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

/// Log out of the default auth service from the browser.
#[cfg(feature = "hydrate")]
pub async fn logout() -> LogoutOutcome {
    let transport = FetchTransport::new(crate::config::AuthServiceConfig::default().logout_url());
    request_logout(&transport, &WindowNavigator).await
}

// =============================================================================
// NATIVE (reqwest)
// =============================================================================

/// Native transport. Redirects are followed; the response counts as
/// redirected when the final URL differs from the requested one.
#[cfg(not(target_arch = "wasm32"))]
pub struct ReqwestTransport {
    client: reqwest::Client,
    url: url::Url,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    #[must_use]
    pub fn new(client: reqwest::Client, url: url::Url) -> Self {
        Self { client, url }
    }

    /// Build a transport with its own cookie store for the configured service.
    ///
    /// # Errors
    ///
    /// Returns an error if the logout URL does not parse or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &crate::config::AuthServiceConfig) -> Result<Self, LogoutError> {
        let url = url::Url::parse(&config.logout_url())?;
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| LogoutError::Network(e.to_string()))?;
        Ok(Self::new(client, url))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl LogoutTransport for ReqwestTransport {
    async fn get_logout(&self) -> Result<LogoutResponse, LogoutError> {
        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| LogoutError::Network(e.to_string()))?;
        let redirected = resp.url() != &self.url;
        if !redirected {
            let ok = resp.status().is_success();
            if let Ok(body) = resp.text().await {
                log_reply(ok, &body);
            }
        }
        Ok(LogoutResponse { redirected })
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
