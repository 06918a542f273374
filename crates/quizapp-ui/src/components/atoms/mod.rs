//! Shared UI atoms used across the pages.

pub(crate) mod icon_button;
pub(crate) mod icons;

pub(crate) use icon_button::IconButton;
