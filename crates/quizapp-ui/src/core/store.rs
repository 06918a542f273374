//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared session state in one store to avoid ad-hoc contexts.
//! - Reducers are plain functions over the slice so they stay testable off-DOM.
//! - No tokens live here; the session only remembers who signed in.

use crate::core::auth::{AuthError, AuthErrorKind};
use quizapp_api_models::UserProfile;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Signed-in session state.
    pub session: SessionSlice,
}

/// Lifecycle of the browser session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Nobody is signed in.
    #[default]
    Anonymous,
    /// A login request is in flight.
    Authenticating,
    /// A user is signed in.
    Authenticated,
}

/// Shared session state for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSlice {
    /// Current lifecycle step.
    pub status: SessionStatus,
    /// Profile of the signed-in user.
    pub user: Option<UserProfile>,
    /// Kind of the most recent login failure, cleared on success.
    pub last_failure: Option<AuthErrorKind>,
}

/// Mark a login attempt as started.
pub fn begin_login(session: &mut SessionSlice) {
    session.status = SessionStatus::Authenticating;
}

/// Record the settled outcome of a login attempt.
pub fn finish_login(session: &mut SessionSlice, result: &Result<UserProfile, AuthError>) {
    match result {
        Ok(user) => {
            session.status = SessionStatus::Authenticated;
            session.user = Some(user.clone());
            session.last_failure = None;
        }
        Err(err) => {
            session.status = if session.user.is_some() {
                SessionStatus::Authenticated
            } else {
                SessionStatus::Anonymous
            };
            session.last_failure = Some(err.kind());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: "7".to_string(),
            email: "player@example.com".to_string(),
            name: Some("Player".to_string()),
        }
    }

    #[test]
    fn success_records_user() {
        let mut session = SessionSlice::default();
        begin_login(&mut session);
        assert_eq!(session.status, SessionStatus::Authenticating);
        finish_login(&mut session, &Ok(profile()));
        assert_eq!(session.status, SessionStatus::Authenticated);
        assert_eq!(session.user, Some(profile()));
        assert_eq!(session.last_failure, None);
    }

    #[test]
    fn failure_leaves_session_anonymous() {
        let mut session = SessionSlice::default();
        begin_login(&mut session);
        finish_login(&mut session, &Err(AuthError::Unauthorized));
        assert_eq!(session.status, SessionStatus::Anonymous);
        assert_eq!(session.user, None);
        assert_eq!(session.last_failure, Some(AuthErrorKind::Unauthorized));
    }

    #[test]
    fn failure_keeps_existing_user() {
        let mut session = SessionSlice::default();
        finish_login(&mut session, &Ok(profile()));
        begin_login(&mut session);
        finish_login(&mut session, &Err(AuthError::Transport("offline".into())));
        assert_eq!(session.status, SessionStatus::Authenticated);
        assert_eq!(session.user, Some(profile()));
        assert_eq!(session.last_failure, Some(AuthErrorKind::Other));
    }
}
