use std::rc::Rc;

use crate::api::{ApiClient, ApiError, UpdateUserRequest, UserResponse};

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl ProfileRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self) -> Result<UserResponse, ApiError> {
        self.client.get_me().await
    }

    pub async fn update(&self, request: UpdateUserRequest) -> Result<(), ApiError> {
        self.client.update_user(request).await
    }
}
