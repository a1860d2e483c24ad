//! Auth service wire types.
//!
//! Bodies are JSON. Successful calls carry the payload directly; failures
//! carry `{"error": "..."}`. [`decode_reply`] picks the right shape from the
//! HTTP status.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error body returned by the auth service: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Success body returned by the auth service: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessfulResponse {
    pub message: String,
}

/// User claims carried in the access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserJwtData {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Current user profile: token claims plus account timestamps (unix seconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMeData {
    #[serde(flatten)]
    pub user: UserJwtData,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Refresh token record as stored by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenData {
    pub id: String,
    pub jwt_id: String,
    pub user_id: i64,
    pub is_active: bool,
    pub expires_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// The only part of the logout response that drives navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogoutResponse {
    pub redirected: bool,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Service answered with an `ErrorResponse`.
    #[error("auth service rejected request: {0}")]
    Rejected(String),
    #[error("malformed auth service body: {0}")]
    Malformed(String),
}

/// Decode a service body: `T` when `ok`, otherwise an [`ErrorResponse`].
///
/// # Errors
///
/// `Rejected` carries the service's error message; `Malformed` means the
/// body did not match the expected shape.
pub fn decode_reply<T: DeserializeOwned>(ok: bool, body: &str) -> Result<T, ServiceError> {
    if ok {
        return serde_json::from_str(body).map_err(|e| ServiceError::Malformed(e.to_string()));
    }
    let err: ErrorResponse = serde_json::from_str(body).map_err(|e| ServiceError::Malformed(e.to_string()))?;
    Err(ServiceError::Rejected(err.error))
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
