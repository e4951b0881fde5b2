use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, UserResponse},
};
use crate::utils::storage as storage_utils;

impl ApiClient {
    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let url = self.endpoint("/auth/me").await;
        let response = self.send(self.with_auth(self.http_client().get(&url))).await?;
        Self::parse_json(response).await
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = self
            .send(self.http_client().post(&url).json(&request))
            .await?;
        let login: LoginResponse = Self::parse_json(response).await?;
        if let Some(token) = login.access_token.as_deref() {
            storage_utils::store_access_token(token);
        }
        Ok(login)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/logout").await;
        let result = match self
            .send(self.with_auth(self.http_client().post(&url).json(&serde_json::json!({}))))
            .await
        {
            Ok(response) => Self::parse_empty(response).await,
            Err(err) => Err(err),
        };
        storage_utils::clear_access_token();
        result
    }
}
