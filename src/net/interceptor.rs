//! Outbound request preparation.
//!
//! Runs before every send and only ever adds headers; it never rejects or
//! short-circuits a request.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use super::request::{ApiRequest, Method};
use crate::credentials::CredentialProvider;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// `Authorization` value for a stored token. The server expects the `Token`
/// scheme, not `Bearer`.
pub fn authorization_value(token: &str) -> String {
    format!("Token {token}")
}

/// Attach credential headers to `request`.
///
/// - `Authorization: Token <token>` whenever a non-empty token is stored.
/// - `X-CSRFToken: <cookie>` when a `csrftoken` cookie exists and the method
///   is anything but GET.
pub fn prepare_request<C>(request: &mut ApiRequest, credentials: &C)
where
    C: CredentialProvider + ?Sized,
{
    if let Some(token) = credentials.token().filter(|t| !t.is_empty()) {
        request.set_header(AUTHORIZATION_HEADER, authorization_value(&token));
    }

    if request.method != Method::Get {
        if let Some(csrf) = credentials.csrf_token() {
            request.set_header(CSRF_HEADER, csrf);
        }
    }
}
