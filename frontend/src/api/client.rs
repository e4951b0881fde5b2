use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, utils::storage as storage_utils};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Attaches the stored bearer token, if any.
    pub(crate) fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match storage_utils::access_token() {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::parse_error(response).await)
        }
    }

    pub(crate) async fn parse_empty(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(response).await)
        }
    }

    async fn parse_error(response: Response) -> ApiError {
        let status = response.status();
        let parsed = response.json::<ApiError>().await.ok();
        if status == StatusCode::UNAUTHORIZED {
            let message = parsed
                .map(|e| e.error)
                .unwrap_or_else(|| "Not signed in".to_string());
            return ApiError::unauthorized(message);
        }
        parsed.unwrap_or_else(|| ApiError::unknown(format!("Request failed with status {}", status)))
    }
}
