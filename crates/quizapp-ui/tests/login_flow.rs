#![cfg(not(target_arch = "wasm32"))]
//! End-to-end login scenarios over the DOM-free API.

use async_trait::async_trait;
use quizapp_api_models::UserProfile;
use quizapp_ui::core::auth::{AuthError, Authenticator, Credentials};
use quizapp_ui::core::store::{SessionSlice, SessionStatus, begin_login, finish_login};
use quizapp_ui::core::toast::{ToastKind, ToastQueue};
use quizapp_ui::features::login::flow::{
    LOGIN_FAILED_MESSAGE, LOGIN_SUCCESS_MESSAGE, LOGIN_UNAUTHORIZED_MESSAGE, LoginFlow,
    SubmitOutcome,
};
use quizapp_ui::features::login::state::{LoginFormAction, LoginFormState};
use quizapp_ui::features::login::validation::{Field, FieldError};
use std::cell::RefCell;

/// Fake server keyed on the submitted password; records the session like the store action.
struct FakeServer {
    session: RefCell<SessionSlice>,
    seen: RefCell<Vec<String>>,
}

impl FakeServer {
    fn new() -> Self {
        Self {
            session: RefCell::new(SessionSlice::default()),
            seen: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl Authenticator for FakeServer {
    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, AuthError> {
        begin_login(&mut self.session.borrow_mut());
        self.seen.borrow_mut().push(credentials.email.clone());
        let result = match credentials.password.as_str() {
            "correct-horse" => Ok(UserProfile {
                id: "u-1".to_string(),
                email: credentials.email.clone(),
                name: Some("Quizzer".to_string()),
            }),
            "server-down" => Err(AuthError::from_response(503, "")),
            _ => Err(AuthError::from_response(401, r#"{"error":"Unauthorized"}"#)),
        };
        finish_login(&mut self.session.borrow_mut(), &result);
        result
    }
}

fn fill(email: &str, password: &str) -> LoginFormState {
    LoginFormState::default()
        .apply(LoginFormAction::SetEmail(email.to_string()))
        .apply(LoginFormAction::SetPassword(password.to_string()))
        .apply(LoginFormAction::TouchAll)
}

async fn submit(
    flow: &LoginFlow<FakeServer>,
    form: &LoginFormState,
    toasts: ToastQueue,
) -> (SubmitOutcome, ToastQueue) {
    let outcome = flow.submit(&form.credentials()).await;
    let toasts = match outcome.notice() {
        Some(notice) => toasts.pushed(notice),
        None => toasts,
    };
    (outcome, toasts)
}

#[tokio::test]
async fn invalid_form_shows_inline_errors_and_no_toast() {
    let flow = LoginFlow::new(FakeServer::new());
    let form = fill("not-an-email", "abc");
    assert_eq!(
        form.visible_error(Field::Email),
        Some(FieldError::InvalidFormat)
    );
    assert_eq!(
        form.visible_error(Field::Password),
        Some(FieldError::TooShort)
    );

    let (outcome, toasts) = submit(&flow, &form, ToastQueue::default()).await;
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert!(toasts.items().is_empty());
    assert!(flow.authenticator().seen.borrow().is_empty());
}

#[tokio::test]
async fn wrong_password_then_retry_succeeds() {
    let flow = LoginFlow::new(FakeServer::new());
    let toasts = ToastQueue::default();

    let (outcome, toasts) = submit(&flow, &fill("quizzer@example.com", "wrong-pass"), toasts).await;
    assert!(matches!(outcome, SubmitOutcome::Failed(AuthError::Unauthorized)));
    assert_eq!(toasts.items().len(), 1);
    assert_eq!(toasts.items()[0].kind, ToastKind::Error);
    assert_eq!(toasts.items()[0].message, LOGIN_UNAUTHORIZED_MESSAGE);
    assert_eq!(
        flow.authenticator().session.borrow().status,
        SessionStatus::Anonymous
    );
    assert!(!flow.is_submitting());

    let (outcome, toasts) =
        submit(&flow, &fill("quizzer@example.com", "correct-horse"), toasts).await;
    assert!(matches!(outcome, SubmitOutcome::Authenticated(_)));
    assert_eq!(toasts.items().len(), 2);
    assert_eq!(toasts.items()[1].kind, ToastKind::Success);
    assert_eq!(toasts.items()[1].message, LOGIN_SUCCESS_MESSAGE);

    let session = flow.authenticator().session.borrow();
    assert_eq!(session.status, SessionStatus::Authenticated);
    assert_eq!(
        session.user.as_ref().map(|user| user.email.as_str()),
        Some("quizzer@example.com")
    );
    assert_eq!(flow.authenticator().seen.borrow().len(), 2);
}

#[tokio::test]
async fn server_failure_shows_generic_error() {
    let flow = LoginFlow::new(FakeServer::new());
    let (outcome, toasts) = submit(
        &flow,
        &fill("quizzer@example.com", "server-down"),
        ToastQueue::default(),
    )
    .await;
    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(AuthError::Rejected { status: 503, .. })
    ));
    assert_eq!(toasts.items()[0].message, LOGIN_FAILED_MESSAGE);
    assert!(!flow.is_submitting());
}
