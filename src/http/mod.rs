//! HTTP client module
//!
//! Thin wrapper over `reqwest` used by the upstream clients.
//!
//! # Features
//!
//! - **Default Headers**: credentials are attached to every request
//! - **Timeouts**: per-client default with per-request override
//! - **Error Classification**: status, connection and timeout failures map
//!   to distinct error kinds

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
