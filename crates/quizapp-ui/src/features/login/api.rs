//! Store-backed login action.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Mirror every attempt into the shared session slice so other views can react.

use crate::core::auth::{AuthError, Authenticator, Credentials};
use crate::core::store::{AppStore, begin_login, finish_login};
use crate::services::api::ApiClient;
use async_trait::async_trait;
use gloo::console;
use quizapp_api_models::UserProfile;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Dispatches login attempts through the API client and records them in the store.
pub(crate) struct StoreLogin {
    client: Rc<ApiClient>,
    dispatch: Dispatch<AppStore>,
}

impl StoreLogin {
    pub(crate) const fn new(client: Rc<ApiClient>, dispatch: Dispatch<AppStore>) -> Self {
        Self { client, dispatch }
    }
}

#[async_trait(?Send)]
impl Authenticator for StoreLogin {
    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, AuthError> {
        self.dispatch.reduce_mut(|store| begin_login(&mut store.session));
        let result = self.client.login(credentials).await;
        if let Err(err) = &result {
            console::error!("login failed", err.kind().as_str(), err.to_string());
        }
        self.dispatch
            .reduce_mut(|store| finish_login(&mut store.session, &result));
        result
    }
}
