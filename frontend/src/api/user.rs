use super::{
    client::ApiClient,
    types::{ApiError, UpdateUserRequest, UserResponse},
};

impl ApiClient {
    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/users/me", base_url)))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn update_user(&self, request: UpdateUserRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/users/me", base_url))
                    .json(&request),
            )
            .await?;
        self.map_empty_response(response).await
    }
}
