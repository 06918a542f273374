//! Browser-side transport services.
pub(crate) mod api;
