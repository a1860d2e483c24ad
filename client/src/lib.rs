//! # client
//!
//! Browser-side auth helpers for the gated web app: the shared auth flag,
//! the logout action, and small DOM/form utilities.
//!
//! Browser bindings (`gloo-net`, `web-sys`) are behind the `hydrate` feature.
//! Without it the crate still builds natively so the logic can be tested and
//! driven over `reqwest`.

pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Install console logging and the panic hook. Call once at startup.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
