//! Login submission flow.
//!
//! # Design
//! - Two phases only: `Idle` and `Submitting`, with one transition back on settlement.
//! - The phase flips before the first await so a second submit in the same tick is refused.
//! - The flow never retries; every attempt is user-initiated.

use crate::core::auth::{AuthError, AuthErrorKind, Authenticator, Credentials};
use crate::core::toast::Notice;
use crate::features::login::validation::{FieldErrors, validate};
use quizapp_api_models::UserProfile;
use std::cell::Cell;

/// Toast text after a successful login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Successfully logged in";
/// Toast text when the server rejects the credentials.
pub const LOGIN_UNAUTHORIZED_MESSAGE: &str = "The email or password you've entered is incorrect";
/// Toast text for every other failure.
pub const LOGIN_FAILED_MESSAGE: &str = "An error occurred";

/// Submission gate state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Ready to accept a submission.
    #[default]
    Idle,
    /// One request is in flight.
    Submitting,
}

/// Result of a single call to [`LoginFlow::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; the collaborator was not called.
    Invalid(FieldErrors),
    /// Another submission is already in flight; nothing happened.
    InFlight,
    /// The collaborator accepted the credentials.
    Authenticated(UserProfile),
    /// The collaborator rejected the credentials or failed.
    Failed(AuthError),
}

impl SubmitOutcome {
    /// Notification to show for this outcome, if any.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Invalid(_) | Self::InFlight => None,
            Self::Authenticated(_) => Some(Notice::success(LOGIN_SUCCESS_MESSAGE)),
            Self::Failed(err) => Some(failure_notice(err.kind())),
        }
    }
}

/// Notification for a failed login.
#[must_use]
pub fn failure_notice(kind: AuthErrorKind) -> Notice {
    match kind {
        AuthErrorKind::Unauthorized => Notice::error(LOGIN_UNAUTHORIZED_MESSAGE),
        AuthErrorKind::Other => Notice::error(LOGIN_FAILED_MESSAGE),
    }
}

/// Validates, gates and dispatches login submissions for one form instance.
#[derive(Debug)]
pub struct LoginFlow<A> {
    authenticator: A,
    phase: Cell<SubmitPhase>,
}

impl<A: Authenticator> LoginFlow<A> {
    /// Create an idle flow around an authentication collaborator.
    #[must_use]
    pub const fn new(authenticator: A) -> Self {
        Self {
            authenticator,
            phase: Cell::new(SubmitPhase::Idle),
        }
    }

    /// Current gate state.
    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase() == SubmitPhase::Submitting
    }

    /// Borrow the collaborator.
    #[must_use]
    pub const fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Validate `credentials` and, when valid and idle, run one login attempt.
    pub async fn submit(&self, credentials: &Credentials) -> SubmitOutcome {
        let errors = validate(credentials);
        if !errors.is_valid() {
            return SubmitOutcome::Invalid(errors);
        }
        if self.phase.replace(SubmitPhase::Submitting) == SubmitPhase::Submitting {
            return SubmitOutcome::InFlight;
        }
        let result = self.authenticator.login(credentials).await;
        self.phase.set(SubmitPhase::Idle);
        match result {
            Ok(user) => SubmitOutcome::Authenticated(user),
            Err(err) => SubmitOutcome::Failed(err),
        }
    }
}
