//! Auth wire payloads.
//!
//! Response bodies stay untyped `Value`s; the helpers here only pick fields
//! out of them because this layer does not validate server responses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// The token a login body issued, if it carries a non-empty string `token`.
///
/// Every other field is ignored, so `null` or oddly typed `message`/`role`
/// values never cost the caller its token.
pub fn issued_token(body: &Value) -> Option<&str> {
    body.get("token").and_then(Value::as_str).filter(|t| !t.is_empty())
}

/// Read-only view over the untyped current-user payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl CurrentUser {
    /// Pick `username`/`role` out of a current-user body; `None` when there
    /// is no username.
    pub fn from_value(value: &Value) -> Option<Self> {
        let username = value.get("username")?.as_str()?.to_owned();
        let role = value.get("role").and_then(Value::as_str).map(str::to_owned);
        Some(Self { username, role })
    }
}
