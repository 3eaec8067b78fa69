//! # lab-web
//!
//! Leptos + WASM front-end data-access layer for the lab requisition app.
//!
//! This crate contains the shared API client (credential and CSRF header
//! injection over a pluggable transport), the authentication service, the
//! root component with routing, and the browser bootstrap. Browser-only code
//! sits behind the `csr` feature so the rest builds and tests natively.

pub mod app;
pub mod boot;
pub mod config;
pub mod credentials;
pub mod net;
pub mod pages;
pub mod state;
