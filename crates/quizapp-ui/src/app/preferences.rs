//! Environment helpers for the app shell.

use crate::core::config::{API_BASE_URL_OVERRIDE, DEFAULT_API_BASE_URL, compose_api_base};
use gloo::utils::window;
use web_sys::Url;

pub(crate) fn api_base_url() -> String {
    if let Some(base) = API_BASE_URL_OVERRIDE.filter(|value| !value.trim().is_empty()) {
        return base.to_string();
    }
    let Ok(href) = window().location().href() else {
        return DEFAULT_API_BASE_URL.to_string();
    };
    if let Ok(url) = Url::new(&href) {
        return compose_api_base(&url.protocol(), &url.hostname(), &url.port());
    }
    DEFAULT_API_BASE_URL.to_string()
}
