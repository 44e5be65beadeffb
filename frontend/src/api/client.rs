use leptos::use_context;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{config, state::session::Session};

use super::types::ApiError;

/// Thin typed client over the member API. Holds the session it was built
/// with; every request sent through [`ApiClient::send`] carries the session
/// token as a bearer credential when one is present.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.expire_session();
        }
        Ok(response)
    }

    pub(super) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(error_from(response).await)
        }
    }

    pub(super) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from(response).await)
        }
    }

    fn expire_session(&self) {
        self.session.clear();
        redirect_to_login_if_needed();
    }
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    response
        .json::<ApiError>()
        .await
        .unwrap_or_else(|_| ApiError::request_failed(format!("Request failed with status {}", status)))
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login_if_needed() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == "/login" {
                return;
            }
        }
        let _ = location.set_href("/login");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login_if_needed() {}

pub fn use_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(Session::new()))
}
