//! Request gate — cookie-presence auth check and redirect rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request passes through `request_gate` before it reaches a route.
//! The gate never validates tokens: holding a `token` or `refreshToken`
//! cookie is enough to count as signed in. Real verification belongs to the
//! external auth service.
//!
//! RULES
//! =====
//! 1. `/login*` while authenticated -> 302 `/`
//! 2. `/` while unauthenticated     -> 302 `/signin`
//! 3. anything else passes through with an `Authenticated` extension.

use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

pub const ACCESS_TOKEN_COOKIE: &str = "token";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNIN_PATH: &str = "/signin";

// =============================================================================
// AUTH SIGNAL
// =============================================================================

/// Presence-based auth check shared by the gate and the login load guard.
///
/// Only the cookie name matters; an empty value still counts as present.
#[must_use]
pub fn is_authenticated(jar: &CookieJar) -> bool {
    [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE]
        .iter()
        .any(|name| jar.get(name).is_some())
}

/// Auth signal attached to the request for downstream handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Authenticated(pub bool);

// =============================================================================
// DECISION
// =============================================================================

/// A redirect issued by the gate or a load guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateRedirect {
    pub status: StatusCode,
    pub location: &'static str,
}

impl GateRedirect {
    #[must_use]
    pub const fn found(location: &'static str) -> Self {
        Self { status: StatusCode::FOUND, location }
    }
}

impl IntoResponse for GateRedirect {
    fn into_response(self) -> Response {
        (self.status, [(header::LOCATION, self.location)]).into_response()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    pub authenticated: bool,
    pub redirect: Option<GateRedirect>,
}

/// Apply the gate rules to a request path and cookie jar.
#[must_use]
pub fn evaluate(path: &str, jar: &CookieJar) -> GateDecision {
    let authenticated = is_authenticated(jar);

    let redirect = if path.starts_with(LOGIN_PATH) && authenticated {
        Some(GateRedirect::found(HOME_PATH))
    } else if path == HOME_PATH && !authenticated {
        Some(GateRedirect::found(SIGNIN_PATH))
    } else {
        None
    };

    GateDecision { authenticated, redirect }
}

// =============================================================================
// MIDDLEWARE
// =============================================================================

/// Axum middleware wrapping [`evaluate`]. Install with `middleware::from_fn`.
pub async fn request_gate(jar: CookieJar, mut req: Request, next: Next) -> Response {
    let decision = evaluate(req.uri().path(), &jar);

    if let Some(redirect) = decision.redirect {
        tracing::debug!(
            path = %req.uri().path(),
            authenticated = decision.authenticated,
            location = redirect.location,
            "gate redirect"
        );
        return redirect.into_response();
    }

    req.extensions_mut().insert(Authenticated(decision.authenticated));
    next.run(req).await
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
