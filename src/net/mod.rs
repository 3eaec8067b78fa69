//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns the shared configured client, `interceptor` attaches
//! credential headers before each send, `transport` is the pluggable HTTP
//! backend, and `auth` implements the authentication endpoints on top.

pub mod auth;
pub mod client;
pub mod error;
pub mod interceptor;
pub mod request;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use auth::AuthService;
pub use client::ApiClient;
pub use error::ApiError;
