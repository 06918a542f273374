//! Static configuration for the web client.
//!
//! # Design
//! - Resolve the API base URL once per boot from the page location.
//! - Keep the mapping pure so it can be tested off-DOM.

/// Id of the element the app mounts into.
pub const MOUNT_POINT_ID: &str = "root";
/// Build-time override for the API base URL.
pub const API_BASE_URL_OVERRIDE: Option<&str> = option_env!("QUIZAPP_API_BASE_URL");
/// Fallback when the page location cannot be read.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
/// Port the Trunk dev server listens on.
const DEV_SERVER_PORT: &str = "8080";
/// Port the API listens on during development.
const DEV_API_PORT: &str = "3001";

/// Compose the API base URL from the page's protocol, host and port.
///
/// `protocol` carries the trailing colon as reported by `URL.protocol`.
#[must_use]
pub fn compose_api_base(protocol: &str, host: &str, port: &str) -> String {
    let mapped_port = match port {
        "" => None,
        DEV_SERVER_PORT => Some(DEV_API_PORT),
        other => Some(other),
    };
    let mut base = format!("{protocol}//{host}");
    if let Some(port) = mapped_port {
        base.push(':');
        base.push_str(port);
    }
    base
}

/// Join a base URL and an absolute API path without doubling slashes.
#[must_use]
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_server_port_maps_to_api_port() {
        assert_eq!(
            compose_api_base("http:", "localhost", "8080"),
            "http://localhost:3001"
        );
    }

    #[test]
    fn other_ports_are_preserved() {
        assert_eq!(
            compose_api_base("https:", "quiz.example.com", "8443"),
            "https://quiz.example.com:8443"
        );
        assert_eq!(
            compose_api_base("https:", "quiz.example.com", ""),
            "https://quiz.example.com"
        );
    }

    #[test]
    fn api_url_trims_trailing_slash() {
        assert_eq!(
            api_url("http://localhost:3001/", "/api/auth/login"),
            "http://localhost:3001/api/auth/login"
        );
        assert_eq!(
            api_url(DEFAULT_API_BASE_URL, "/api/auth/login"),
            "http://localhost:3001/api/auth/login"
        );
    }
}
