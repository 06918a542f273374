//! Login field validation.
//!
//! # Design
//! - Each field has one pure rule function; the first failing rule wins.
//! - Emptiness is checked before format so blank fields read "Required".
//! - Input is not trimmed: whitespace is part of what the user typed.

use crate::core::auth::Credentials;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length in UTF-16 code units, the unit browsers report for input length.
pub const MIN_PASSWORD_LEN: usize = 6;

// Letters outside ASCII that may appear anywhere in an address.
macro_rules! intl {
    () => {
        r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}"
    };
}

const EMAIL_PATTERN_SRC: &str = concat!(
    r"(?i)^(?:",
    // dot-atom local part
    r"[a-z0-9!#$%&'*+\-/=?^_`{|}~",
    intl!(),
    r"]+(?:\.[a-z0-9!#$%&'*+\-/=?^_`{|}~",
    intl!(),
    r"]+)*",
    // quoted local part
    r#"|"(?:(?:(?:[ \t]*\r\n)?[ \t]+)?(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x7f\x21\x23-\x5b\x5d-\x7e"#,
    intl!(),
    r"]|\\[\x01-\x09\x0b\x0c\x0d-\x7f",
    intl!(),
    r#"]))*(?:(?:[ \t]*\r\n)?[ \t]+)?""#,
    r")@(?:(?:[a-z0-9",
    intl!(),
    r"]|[a-z0-9",
    intl!(),
    r"][a-z0-9\-._~",
    intl!(),
    r"]*[a-z0-9",
    intl!(),
    r"])\.)+(?:[a-z",
    intl!(),
    r"]|[a-z",
    intl!(),
    r"][a-z0-9\-._~",
    intl!(),
    r"]*[a-z",
    intl!(),
    r"])$",
);

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN_SRC).ok());

/// Form fields subject to validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Email input.
    Email,
    /// Password input.
    Password,
}

/// Reason a single field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Field is empty.
    Required,
    /// Email is not a well-formed address.
    InvalidFormat,
    /// Password is shorter than [`MIN_PASSWORD_LEN`].
    TooShort,
}

impl FieldError {
    /// Inline message shown under the field.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::InvalidFormat => "Invalid email address",
            Self::TooShort => "Must be at least 6 characters",
        }
    }
}

/// Per-field validation result for a credential pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// Email failure, if any.
    pub email: Option<FieldError>,
    /// Password failure, if any.
    pub password: Option<FieldError>,
}

impl FieldErrors {
    /// Whether every field passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    /// Failure for a single field.
    #[must_use]
    pub const fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }
}

/// Whether `value` looks like a deliverable email address.
#[must_use]
pub fn is_well_formed_email(value: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

/// Validate the email field.
///
/// # Errors
///
/// Returns [`FieldError::Required`] for an empty value and
/// [`FieldError::InvalidFormat`] for anything that is not an email address.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if !is_well_formed_email(value) {
        return Err(FieldError::InvalidFormat);
    }
    Ok(())
}

/// Validate the password field.
///
/// # Errors
///
/// Returns [`FieldError::Required`] for an empty value and
/// [`FieldError::TooShort`] below [`MIN_PASSWORD_LEN`] UTF-16 code units.
pub fn validate_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if value.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(FieldError::TooShort);
    }
    Ok(())
}

/// Run every field rule against a credential pair.
#[must_use]
pub fn validate(credentials: &Credentials) -> FieldErrors {
    FieldErrors {
        email: validate_email(&credentials.email).err(),
        password: validate_password(&credentials.password).err(),
    }
}
