//! HTTP transport seam.
//!
//! Browser builds send through `gloo-net` (fetch); the CLI plugs in a
//! `reqwest` transport and tests plug in a recording mock. Futures are not
//! `Send` because fetch futures are bound to the browser's single thread.

use async_trait::async_trait;

use super::error::ApiError;
use super::request::{ApiRequest, ApiResponse};

#[async_trait(?Send)]
pub trait Transport {
    /// Perform `request` and return the raw response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] or [`ApiError::Network`] when no response
    /// was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Fetch-backed transport; honours `with_credentials` as
/// `RequestCredentials::Include`.
#[cfg(feature = "csr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use super::request::Method;
        use gloo_net::http::{Method as HttpMethod, RequestBuilder};

        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Patch => HttpMethod::PATCH,
            Method::Delete => HttpMethod::DELETE,
        };

        let mut builder = RequestBuilder::new(&request.url).method(method);
        if request.with_credentials {
            builder = builder.credentials(web_sys::RequestCredentials::Include);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Request(e.to_string()))?;

        let resp = built.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse::new(status, body))
    }
}
