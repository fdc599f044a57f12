//! Admin API Command Wrappers
//!
//! Client bindings to the admin REST backend, organized by domain.

mod question;
mod scenario;

#[cfg(test)]
mod fixture;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ConsoleConfig;

/// Errors from the admin backend or the transport to it
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for a 404 from the backend
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP client rooted at `<base_url><api_prefix>`
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: &ConsoleConfig) -> ApiResult<Self> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http,
            base: config.api_base(),
        })
    }

    /// Absolute URL for an API path such as `/questions/`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Send and decode a JSON body
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = checked(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and ignore the body (confirmation messages)
    async fn send_empty(&self, request: RequestBuilder) -> ApiResult<()> {
        checked(request).await.map(|_| ())
    }
}

async fn checked(request: RequestBuilder) -> ApiResult<reqwest::Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    log::warn!("admin api returned {}: {}", status, body);
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}
