//! Network helpers for talking to the auth service.

pub mod api;
pub mod types;
