//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod breakpoints;
pub mod config;
pub mod store;
pub mod theme;
pub mod toast;
