//! Error types for the sports proxy
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The HTTP status each variant maps to lives in [`Error::status_code`].

use thiserror::Error;

/// The main error type for the sports proxy
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Client Input Errors
    // ============================================================================
    #[error("{message}")]
    Validation { message: String },

    // ============================================================================
    // Upstream Errors
    // ============================================================================
    #[error("{entity} not found: no {entity} with ID {id} exists")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Upstream API error (HTTP {status}): {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Upstream API unavailable: cannot connect to {url}")]
    Unavailable { url: String },

    #[error("Timeout: the upstream API took longer than {timeout_ms}ms to respond")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Unexpected upstream response: {message}")]
    Decode { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create an upstream status error
    pub fn upstream_status(status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status the facade answers with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation { .. } => 400,
            Error::NotFound { .. } => 404,
            Error::UpstreamStatus { .. }
            | Error::Decode { .. }
            | Error::JsonParse(_)
            | Error::Http(_) => 502,
            Error::Unavailable { .. } => 503,
            Error::Timeout { .. } => 504,
            Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::InvalidConfigValue { .. }
            | Error::InvalidUrl(_)
            | Error::YamlParse(_)
            | Error::Io(_)
            | Error::FileNotFound { .. } => 500,
        }
    }

    /// Check if this error was caused by the upstream API rather than the caller
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::UpstreamStatus { .. }
                | Error::Unavailable { .. }
                | Error::Timeout { .. }
                | Error::Http(_)
                | Error::Decode { .. }
                | Error::JsonParse(_)
        )
    }
}

/// Result type alias for the sports proxy
pub type Result<T> = std::result::Result<T, Error>;
