use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::UserId;

//
// ─── CREDENTIALS ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("password must not be empty")]
    EmptyPassword,
}

/// Login payload. Construction validates both fields are non-blank.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    password: String,
}

impl Credentials {
    /// Builds credentials from raw form input.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError` if either field is empty or whitespace.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() {
            return Err(CredentialsError::EmptyUsername);
        }
        if password.trim().is_empty() {
            return Err(CredentialsError::EmptyPassword);
        }

        Ok(Self { username, password })
    }
}

// The password never reaches logs through Debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Authenticated session returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_id: UserId,
    pub token: String,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_reject_blank_username() {
        let err = Credentials::new("  ", "secret").unwrap_err();
        assert_eq!(err, CredentialsError::EmptyUsername);
    }

    #[test]
    fn credentials_reject_blank_password() {
        let err = Credentials::new("ana", "").unwrap_err();
        assert_eq!(err, CredentialsError::EmptyPassword);
    }

    #[test]
    fn debug_output_hides_password() {
        let credentials = Credentials::new("ana", "secret").unwrap();
        let printed = format!("{credentials:?}");
        assert!(printed.contains("ana"));
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn session_parses_camel_case_wire_shape() {
        let session: UserSession =
            serde_json::from_str(r#"{"userId":7,"token":"abc123"}"#).unwrap();
        assert_eq!(session.user_id, UserId::new(7));
        assert_eq!(session.token, "abc123");
    }
}
