//! Login form state.
//!
//! # Design
//! - Keep inputs as raw strings; validation errors are derived, never stored.
//! - Errors are only surfaced for touched fields, and submit touches everything.
//! - The submitting flag mirrors the flow gate for rendering only.

use crate::core::auth::Credentials;
use crate::features::login::validation::{Field, FieldError, FieldErrors, validate};
use std::rc::Rc;
use yew::functional::Reducible;

/// Which fields the user has left at least once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Touched {
    /// Email was blurred or submitted.
    pub email: bool,
    /// Password was blurred or submitted.
    pub password: bool,
}

/// Local state backing the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    /// Email input value.
    pub email: String,
    /// Password input value.
    pub password: String,
    /// Fields eligible for inline errors.
    pub touched: Touched,
    /// A login request is in flight.
    pub submitting: bool,
    /// Password is rendered as plain text.
    pub show_password: bool,
}

/// User and flow events that change the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginFormAction {
    /// Email input changed.
    SetEmail(String),
    /// Password input changed.
    SetPassword(String),
    /// A field lost focus.
    Blur(Field),
    /// Submit was pressed; every field becomes touched.
    TouchAll,
    /// The flow gate opened or closed.
    SetSubmitting(bool),
    /// Show/hide password toggle.
    TogglePassword,
}

impl LoginFormState {
    /// Current values as a credential pair.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    /// Validation result for the current values.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        validate(&self.credentials())
    }

    /// Error to render next to `field`, if it has been touched.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        let touched = match field {
            Field::Email => self.touched.email,
            Field::Password => self.touched.password,
        };
        if touched {
            self.errors().get(field)
        } else {
            None
        }
    }

    /// Input type for the password field.
    #[must_use]
    pub const fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    /// Apply an action, returning the next state.
    #[must_use]
    pub fn apply(&self, action: LoginFormAction) -> Self {
        let mut next = self.clone();
        match action {
            LoginFormAction::SetEmail(value) => next.email = value,
            LoginFormAction::SetPassword(value) => next.password = value,
            LoginFormAction::Blur(Field::Email) => next.touched.email = true,
            LoginFormAction::Blur(Field::Password) => next.touched.password = true,
            LoginFormAction::TouchAll => {
                next.touched = Touched {
                    email: true,
                    password: true,
                };
            }
            LoginFormAction::SetSubmitting(value) => next.submitting = value,
            LoginFormAction::TogglePassword => next.show_password = !next.show_password,
        }
        next
    }
}

impl Reducible for LoginFormState {
    type Action = LoginFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
