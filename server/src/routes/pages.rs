//! Placeholder pages behind the gate.
//!
//! Markup is owned by the frontend; these handlers only exist so the gate
//! and guard have real routes to protect.

use axum::extract::Extension;
use axum::response::Html;

use crate::gate::Authenticated;

/// `GET /` — only reachable when authenticated (the gate redirects otherwise).
pub async fn home(Extension(Authenticated(authenticated)): Extension<Authenticated>) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><title>Home</title><main id=\"home\" data-authenticated=\"{authenticated}\"></main>"
    ))
}

/// `GET /signin`
pub async fn signin() -> Html<&'static str> {
    Html("<!DOCTYPE html><title>Sign in</title><main id=\"signin\"></main>")
}
