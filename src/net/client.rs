//! Shared API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ApiClient` is built per page load and handed to every consumer
//! (context for components, constructor argument for services). Clones share
//! the same transport and credential backend.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`]; transport failures pass
//! through untouched. Nothing is retried.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::error::ApiError;
use super::interceptor::prepare_request;
use super::request::{ApiRequest, ApiResponse, Method};
use super::transport::Transport;
use crate::config::ApiConfig;
use crate::credentials::Credentials;

/// Transport shared across client clones and component contexts.
pub type SharedTransport = Arc<dyn Transport + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: SharedTransport,
    credentials: Arc<dyn Credentials>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: SharedTransport, credentials: Arc<dyn Credentials>) -> Self {
        Self { config, transport, credentials }
    }

    /// Client wired to `fetch`, `localStorage` and `document.cookie`, with the
    /// base URL baked in at build time.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        Self::new(
            ApiConfig::from_build_env(),
            Arc::new(super::transport::BrowserTransport),
            Arc::new(crate::credentials::BrowserCredentials),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn with_credentials(&self) -> bool {
        self.config.with_credentials
    }

    pub fn credentials(&self) -> &Arc<dyn Credentials> {
        &self.credentials
    }

    /// Join `path` onto the base URL. Absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.config.base_url)
        } else {
            format!("{}/{path}", self.config.base_url)
        }
    }

    /// A request for `path` carrying this client's credentials flag.
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        let mut request = ApiRequest::new(method, self.url(path));
        request.with_credentials = self.config.with_credentials;
        request
    }

    /// Prepare and send `request`.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or [`ApiError::Status`] for any non-2xx
    /// response.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        prepare_request(&mut request, &*self.credentials);
        log::debug!("{} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::debug!("request failed with status {}", response.status);
            return Err(ApiError::Status { status: response.status, body: response.body });
        }
        Ok(response)
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(self.request(Method::Get, path)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<ApiResponse, ApiError> {
        self.send(with_body(self.request(Method::Post, path), body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn put(&self, path: &str, body: Option<Value>) -> Result<ApiResponse, ApiError> {
        self.send(with_body(self.request(Method::Put, path), body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn patch(&self, path: &str, body: Option<Value>) -> Result<ApiResponse, ApiError> {
        self.send(with_body(self.request(Method::Patch, path), body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(self.request(Method::Delete, path)).await
    }
}

fn with_body(request: ApiRequest, body: Option<Value>) -> ApiRequest {
    match body {
        Some(body) => request.with_json(body),
        None => request,
    }
}
