//! Authentication endpoints and bearer-token lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call goes through the shared [`ApiClient`], so the `Authorization`
//! and `X-CSRFToken` headers are attached automatically. The token is written
//! only after a successful login that issued one, and removed only after a
//! successful logout.
//!
//! ERROR HANDLING
//! ==============
//! Errors are returned exactly as the client produced them; a failed call
//! never touches stored credentials.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{LoginRequest, issued_token};
use crate::credentials::{CredentialProvider, TokenStore};

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const LOGOUT_PATH: &str = "/api/auth/logout/";
pub const CURRENT_USER_PATH: &str = "/api/auth/user/";

#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Log in via `POST /api/auth/login/` and persist any issued token.
    ///
    /// The decoded body is returned untouched whether or not it carried a
    /// token. Only `token` is inspected.
    ///
    /// # Errors
    ///
    /// Returns the request error unchanged, or [`ApiError::Decode`] if the
    /// success body is not JSON.
    pub async fn login(&self, username: &str, password: &str) -> Result<Value, ApiError> {
        let payload = serde_json::to_value(LoginRequest { username, password })
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let resp = self.client.post(LOGIN_PATH, Some(payload)).await?;
        let body = resp.json_value()?;

        if let Some(token) = issued_token(&body) {
            self.client.credentials().store_token(token);
            log::info!("logged in as {username}");
        } else {
            log::warn!("login for {username} succeeded without a token");
        }
        Ok(body)
    }

    /// Log out via `POST /api/auth/logout/`, then drop the stored token.
    ///
    /// # Errors
    ///
    /// Returns the request error unchanged; the token is kept in that case.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.post(LOGOUT_PATH, None).await?;
        self.client.credentials().clear_token();
        log::info!("logged out");
        Ok(())
    }

    /// Fetch `GET /api/auth/user/` and return the body untouched.
    ///
    /// # Errors
    ///
    /// Returns the request error unchanged (e.g. status 401 when signed out).
    pub async fn get_current_user(&self) -> Result<Value, ApiError> {
        self.client.get(CURRENT_USER_PATH).await?.json_value()
    }

    /// Whether a non-empty token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.client.credentials().token().is_some_and(|t| !t.is_empty())
    }
}
