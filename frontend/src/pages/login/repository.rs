use std::rc::Rc;

use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn repository_delegates_to_the_api() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({"access_token": "tok-r"}));
        });

        let client = ApiClient::new_with_base_url(server.url("/api"), Session::new());
        let repo = LoginRepository::new_with_client(Rc::new(client));
        let response = repo
            .login(LoginRequest {
                email: "daye@example.com".into(),
                password: "pass-word".into(),
            })
            .await
            .expect("login");
        assert_eq!(response.access_token, "tok-r");
    }
}
