#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Quiz App authentication API.
//!
//! The web client encodes requests and decodes responses with these types so
//! the login contract stays in one place.
use serde::{Deserialize, Serialize};

/// Path of the login endpoint relative to the API base URL.
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Error discriminator the API uses for rejected credentials.
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Body of `POST /api/auth/login`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Profile of the authenticated account.
    pub user: UserProfile,
}

/// Public profile of a quiz player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Server-assigned identifier.
    pub id: String,
    /// Account email address.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Display name, when the account has one.
    pub name: Option<String>,
}

/// Error envelope returned on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Machine-readable discriminator (e.g. `"Unauthorized"`).
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional human-readable detail.
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Whether the body reports rejected credentials.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.error == UNAUTHORIZED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_expected_fields() -> Result<(), serde_json::Error> {
        let request = LoginRequest {
            email: "player@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        let value = serde_json::to_value(&request)?;
        assert_eq!(value["email"], "player@example.com");
        assert_eq!(value["password"], "hunter22");
        Ok(())
    }

    #[test]
    fn login_request_debug_hides_password() {
        let request = LoginRequest {
            email: "player@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        let rendered = format!("{request:?}");
        assert!(rendered.contains("player@example.com"));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn login_response_tolerates_missing_name() -> Result<(), serde_json::Error> {
        let response: LoginResponse =
            serde_json::from_str(r#"{"user":{"id":"42","email":"player@example.com"}}"#)?;
        assert_eq!(response.user.id, "42");
        assert_eq!(response.user.name, None);
        Ok(())
    }

    #[test]
    fn error_body_detects_unauthorized() -> Result<(), serde_json::Error> {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Unauthorized"}"#)?;
        assert!(body.is_unauthorized());
        let other: ApiErrorBody =
            serde_json::from_str(r#"{"error":"BadRequest","message":"missing email"}"#)?;
        assert!(!other.is_unauthorized());
        assert_eq!(other.message.as_deref(), Some("missing email"));
        Ok(())
    }
}
