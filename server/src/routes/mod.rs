//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route sits behind the request gate. The login route additionally
//! runs its own load guard. Health endpoints are outside both rules because
//! the gate only acts on `/` and `/login*`.

pub mod login;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::Json;
use axum::routing::get;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::gate;

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

/// Build the application router.
pub fn app() -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/signin", get(pages::signin))
        .route("/login", get(login::login_page))
        .route("/status", get(status))
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn(gate::request_gate))
        .layer(TraceLayer::new_for_http())
}

/// `GET /status`
async fn status() -> Json<StatusBody> {
    Json(StatusBody { status: "ok" })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
