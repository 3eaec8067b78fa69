//! API client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The base URL is resolved exactly once, when the shared client is built.
//! Browser builds bake the value in at compile time (there is no process
//! environment inside WASM); native callers read it at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "LAB_API_URL";

/// Base URL used when `LAB_API_URL` is absent or empty.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Send browser credential cookies on every request, cross-origin included.
    pub with_credentials: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl ApiConfig {
    /// Build config from an optional base URL value.
    ///
    /// A missing, empty or whitespace-only value falls back to
    /// [`DEFAULT_API_URL`].
    ///
    /// A supplied value is not kept byte for byte: surrounding whitespace
    /// and one trailing `/` are dropped, so `"https://api.example.com/ "`
    /// resolves to `"https://api.example.com"` and `/api/...` paths join
    /// without a double slash.
    pub fn resolve(base_url: Option<&str>) -> Self {
        Self { base_url: resolve_base_url(base_url), with_credentials: true }
    }

    /// Read `LAB_API_URL` from the runtime environment.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Read `LAB_API_URL` as it was set when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("LAB_API_URL"))
    }
}

fn resolve_base_url(raw: Option<&str>) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    value.strip_suffix('/').unwrap_or(value).to_owned()
}
