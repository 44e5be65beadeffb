use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/auth/login", base_url))
                    .json(&request),
            )
            .await?;
        self.map_json_response(response).await
    }
}
