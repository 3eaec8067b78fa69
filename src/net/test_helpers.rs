//! Shared fakes for client and service tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::client::ApiClient;
use super::error::ApiError;
use super::request::{ApiRequest, ApiResponse};
use super::transport::Transport;
use crate::config::ApiConfig;
use crate::credentials::MemoryCredentials;

/// Records every request and answers from a queue (default: `200` empty body).
#[derive(Default)]
pub struct MockTransport {
    pub requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: Result<ApiResponse, ApiError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn respond_json(&self, status: u16, body: &serde_json::Value) {
        self.respond(Ok(ApiResponse::new(status, body.to_string())));
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, "")))
    }
}

/// Client over a fresh mock transport and in-memory credentials.
pub fn mock_client() -> (ApiClient, Arc<MockTransport>, Arc<MemoryCredentials>) {
    let transport = Arc::new(MockTransport::new());
    let creds = Arc::new(MemoryCredentials::new());
    let client = ApiClient::new(ApiConfig::resolve(None), transport.clone(), creds.clone());
    (client, transport, creds)
}
