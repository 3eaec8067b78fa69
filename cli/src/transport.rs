//! `reqwest` transport for native callers.
//!
//! Cookies round-trip through a shared jar, which is how the browser's
//! "include credentials" behaviour looks outside a browser: whatever the
//! server sets (session, `csrftoken`) is sent back on later requests.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::Arc;

use async_trait::async_trait;
use lab_web::net::ApiError;
use lab_web::net::request::{ApiRequest, ApiResponse, Method};
use lab_web::net::transport::Transport;
use reqwest::cookie::Jar;

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client that stores and replays cookies through `jar`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(jar: Arc<Jar>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().cookie_provider(jar).build()?;
        Ok(Self { client })
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = self.client.request(http_method(request.method), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| {
            if e.is_builder() {
                ApiError::Request(e.to_string())
            } else {
                ApiError::Network(e.to_string())
            }
        })?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        tracing::debug!(status, url = %request.url, "response received");
        Ok(ApiResponse::new(status, body))
    }
}
