//! Credential material consumed by the request-preparation step.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token lives in persistent storage under [`TOKEN_KEY`]; the CSRF
//! token is owned by the cookie store and only ever read. Both are looked up
//! fresh for every request so server-side rotation is picked up immediately.
//!
//! Browser-backed access is `csr`-only; [`MemoryCredentials`] backs tests and
//! any host without a DOM.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::sync::{Mutex, PoisonError};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Cookie the server uses to hand out the CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Read access to the credentials attached to outbound requests.
pub trait CredentialProvider {
    /// Bearer token from persistent storage, if any.
    fn token(&self) -> Option<String>;

    /// Current value of the `csrftoken` cookie, if any.
    fn csrf_token(&self) -> Option<String>;
}

/// Write access to the persisted bearer token.
pub trait TokenStore {
    fn store_token(&self, token: &str);
    fn clear_token(&self);
}

/// Everything the shared client needs from its credential backend.
pub trait Credentials: CredentialProvider + TokenStore + Send + Sync {}

impl<T> Credentials for T where T: CredentialProvider + TokenStore + Send + Sync {}

/// Extract the `csrftoken` value from a `document.cookie`-style string.
///
/// Entries are separated by `"; "`. The value is the text between the first
/// and second `=` of the matching entry, taken verbatim (no URL decoding).
/// An empty value counts as absent.
pub fn csrf_from_cookies(cookies: &str) -> Option<String> {
    let prefix = format!("{CSRF_COOKIE}=");
    let row = cookies.split("; ").find(|row| row.starts_with(&prefix))?;
    row.split('=').nth(1).filter(|value| !value.is_empty()).map(str::to_owned)
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local credentials: a token slot plus a settable cookie string.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: Mutex<Option<String>>,
    cookies: Mutex<String>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(self, token: &str) -> Self {
        self.store_token(token);
        self
    }

    #[must_use]
    pub fn with_cookies(self, cookies: &str) -> Self {
        self.set_cookies(cookies);
        self
    }

    /// Replace the cookie string, as a server `Set-Cookie` would.
    pub fn set_cookies(&self, cookies: &str) {
        *self.cookies.lock().unwrap_or_else(PoisonError::into_inner) = cookies.to_owned();
    }
}

impl CredentialProvider for MemoryCredentials {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn csrf_token(&self) -> Option<String> {
        csrf_from_cookies(&self.cookies.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl TokenStore for MemoryCredentials {
    fn store_token(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear_token(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `localStorage` + `document.cookie` credentials.
///
/// Holds no state: every call goes back to the live browser objects.
#[cfg(feature = "csr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCredentials;

/// Warning text for a `localStorage` call that threw.
#[cfg(any(feature = "csr", test))]
fn storage_failure(action: &str, detail: &str) -> String {
    format!("failed to {action} token in localStorage under \"{TOKEN_KEY}\": {detail}")
}

#[cfg(feature = "csr")]
impl BrowserCredentials {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    fn cookie_string() -> Option<String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
    }
}

#[cfg(feature = "csr")]
impl CredentialProvider for BrowserCredentials {
    fn token(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn csrf_token(&self) -> Option<String> {
        csrf_from_cookies(&Self::cookie_string()?)
    }
}

#[cfg(feature = "csr")]
impl TokenStore for BrowserCredentials {
    fn store_token(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; token not persisted");
            return;
        };
        if let Err(e) = storage.set_item(TOKEN_KEY, token) {
            log::warn!("{}", storage_failure("store", &format!("{e:?}")));
        }
    }

    fn clear_token(&self) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; token not cleared");
            return;
        };
        if let Err(e) = storage.remove_item(TOKEN_KEY) {
            log::warn!("{}", storage_failure("clear", &format!("{e:?}")));
        }
    }
}
