//! Login feature wiring.
//!
//! # Design
//! - Validation and the submit gate are DOM-free and run in native tests.
//! - Only the view and the store-backed action touch the browser.
//! - Inline field errors never become notifications.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod flow;
pub mod state;
pub mod validation;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
