//! Login route with its load guard.
//!
//! The guard recomputes the auth signal from cookies on its own rather than
//! trusting the gate's `Authenticated` extension, so the login page stays
//! protected if it is ever mounted without the gate.

use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::gate::{self, GateRedirect};

/// Result of running the login page load guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Redirect(GateRedirect),
    /// No page data; render the login page as-is.
    Render,
}

/// Send already-authenticated visitors home.
#[must_use]
pub fn load(jar: &CookieJar) -> LoadOutcome {
    if gate::is_authenticated(jar) {
        LoadOutcome::Redirect(GateRedirect::found(gate::HOME_PATH))
    } else {
        LoadOutcome::Render
    }
}

/// `GET /login`
pub async fn login_page(jar: CookieJar) -> Response {
    match load(&jar) {
        LoadOutcome::Redirect(redirect) => {
            tracing::debug!(location = redirect.location, "login guard redirect");
            redirect.into_response()
        }
        LoadOutcome::Render => Html("<!DOCTYPE html><title>Log in</title><main id=\"login\"></main>").into_response(),
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
