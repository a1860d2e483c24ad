//! `application/x-www-form-urlencoded` helpers.
//!
//! Pairs keep their input order in the output; spaces encode as `+`.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Encode key/value pairs as a form body, e.g. `user=a+b&next=%2F`.
pub fn encode_form_data<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}

/// Decode a form body back into ordered pairs.
#[must_use]
pub fn decode_form_data(body: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(body.as_bytes()).into_owned().collect()
}

// =============================================================================
// LOGIN FORM
// =============================================================================

pub const USERNAME_MIN: usize = 4;
pub const USERNAME_MAX: usize = 16;
pub const PASSWORD_MIN: usize = 5;
pub const PASSWORD_MAX: usize = 128;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum LoginFormError {
    #[error("username must be 4-16 characters")]
    Username,
    #[error("password must be 5-128 characters")]
    Password,
}

/// Credentials posted to the auth service's login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Check lengths the auth service enforces, counted in characters.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of bounds.
    pub fn validate(&self) -> Result<(), LoginFormError> {
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&self.username.chars().count()) {
            return Err(LoginFormError::Username);
        }
        if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&self.password.chars().count()) {
            return Err(LoginFormError::Password);
        }
        Ok(())
    }

    #[must_use]
    pub fn encode(&self) -> String {
        encode_form_data([("username", &self.username), ("password", &self.password)])
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;
