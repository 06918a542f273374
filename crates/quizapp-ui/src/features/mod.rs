//! Feature slices of the Web UI.
pub mod login;
