//! HTTP client helpers (REST).

use crate::core::auth::{AuthError, Credentials};
use crate::core::config::api_url;
use gloo_net::http::Request;
use quizapp_api_models::{LOGIN_PATH, LoginRequest, LoginResponse, UserProfile};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub(crate) async fn login(&self, credentials: &Credentials) -> Result<UserProfile, AuthError> {
        let body = LoginRequest::from(credentials);
        let response = Request::post(&api_url(&self.base_url, LOGIN_PATH))
            .header("accept", "application/json")
            .json(&body)
            .map_err(|err| AuthError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| AuthError::Transport(err.to_string()))?;
        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AuthError::from_response(status, &text));
        }
        let payload = response
            .json::<LoginResponse>()
            .await
            .map_err(|err| AuthError::Decode(err.to_string()))?;
        Ok(payload.user)
    }
}
