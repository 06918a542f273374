//! Authentication primitives shared across the UI.
//!
//! # Design
//! - Keep credentials as plain data owned by the form for a single submission.
//! - Collapse every failure that is not a credential rejection into one bucket.
//! - Leave transport concerns to the HTTP client so this module stays DOM-free.

use async_trait::async_trait;
use quizapp_api_models::{ApiErrorBody, LoginRequest, UserProfile};
use std::fmt;
use thiserror::Error;

/// Email/password pair submitted for authentication.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Email address as typed by the user.
    pub email: String,
    /// Password as typed by the user.
    pub password: String,
}

impl Credentials {
    /// Build a credential pair from borrowed input.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl From<&Credentials> for LoginRequest {
    fn from(value: &Credentials) -> Self {
        Self {
            email: value.email.clone(),
            password: value.password.clone(),
        }
    }
}

/// Coarse failure discriminator inspected by the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// The server rejected the email/password pair.
    Unauthorized,
    /// Anything else: transport, server or decode failures.
    Other,
}

impl AuthErrorKind {
    /// Stable label used in console diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Other => "other",
        }
    }
}

/// Failure returned by an [`Authenticator`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Credentials were rejected.
    #[error("credentials rejected")]
    Unauthorized,
    /// Server answered with a non-success status.
    #[error("login rejected with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Error discriminator or detail from the response body, when present.
        message: Option<String>,
    },
    /// Request never produced a response.
    #[error("login request failed: {0}")]
    Transport(String),
    /// Response body could not be decoded.
    #[error("login response malformed: {0}")]
    Decode(String),
}

impl AuthError {
    /// Classify a non-success HTTP response.
    ///
    /// A `401` status or an `{"error":"Unauthorized"}` body means rejected
    /// credentials; anything else is reported with its status and detail.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
        if status == 401 || parsed.as_ref().is_some_and(ApiErrorBody::is_unauthorized) {
            return Self::Unauthorized;
        }
        let message = parsed.map(|body| body.message.unwrap_or(body.error));
        Self::Rejected { status, message }
    }

    /// Discriminator used to pick the user-facing message.
    #[must_use]
    pub const fn kind(&self) -> AuthErrorKind {
        match self {
            Self::Unauthorized => AuthErrorKind::Unauthorized,
            Self::Rejected { .. } | Self::Transport(_) | Self::Decode(_) => AuthErrorKind::Other,
        }
    }
}

/// External collaborator that verifies credentials.
///
/// Futures are not `Send`; the UI runs on a single-threaded event loop.
#[async_trait(?Send)]
pub trait Authenticator {
    /// Attempt to sign in with the given credentials.
    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::{AuthError, AuthErrorKind, Credentials};
    use quizapp_api_models::LoginRequest;

    #[test]
    fn only_unauthorized_maps_to_unauthorized_kind() {
        assert_eq!(AuthError::Unauthorized.kind(), AuthErrorKind::Unauthorized);
        let rejected = AuthError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(rejected.kind(), AuthErrorKind::Other);
        assert_eq!(
            AuthError::Transport("offline".into()).kind(),
            AuthErrorKind::Other
        );
        assert_eq!(
            AuthError::Decode("eof".into()).kind(),
            AuthErrorKind::Other
        );
    }

    #[test]
    fn response_classification_detects_unauthorized() {
        assert_eq!(AuthError::from_response(401, ""), AuthError::Unauthorized);
        assert_eq!(
            AuthError::from_response(400, r#"{"error":"Unauthorized"}"#),
            AuthError::Unauthorized
        );
    }

    #[test]
    fn response_classification_keeps_detail_for_other_failures() {
        assert_eq!(
            AuthError::from_response(500, r#"{"error":"Internal","message":"db down"}"#),
            AuthError::Rejected {
                status: 500,
                message: Some("db down".to_string()),
            }
        );
        assert_eq!(
            AuthError::from_response(502, "<html>bad gateway</html>"),
            AuthError::Rejected {
                status: 502,
                message: None,
            }
        );
        assert_eq!(
            AuthError::from_response(429, r#"{"error":"TooManyRequests"}"#).kind(),
            AuthErrorKind::Other
        );
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let credentials = Credentials::new("player@example.com", "hunter22");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("player@example.com"));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn credentials_convert_to_login_request() {
        let credentials = Credentials::new("player@example.com", "hunter22");
        let request = LoginRequest::from(&credentials);
        assert_eq!(request.email, "player@example.com");
        assert_eq!(request.password, "hunter22");
    }
}
