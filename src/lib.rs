//! # Sports Proxy
//!
//! HTTP proxy that republishes the BallDontLie CS2 and NBA APIs under one
//! local surface with page-number pagination.
//!
//! ## Features
//!
//! - **Page Numbers over Cursors**: `?page=N` is served by following the
//!   upstream `next_cursor` chain from the first page
//! - **Rate-Limit Pacing**: a configurable pause between consecutive
//!   upstream calls of one walk (12s for the CS2 tier by default)
//! - **Typed Records**: upstream JSON is decoded into Team/Player shapes
//! - **Classified Failures**: upstream status, connection, timeout and
//!   decode failures map to distinct HTTP statuses
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sports_proxy::config::ProxyConfig;
//! use sports_proxy::pagination::PageRequest;
//! use sports_proxy::service::SportService;
//! use sports_proxy::sport::Nba;
//! use sports_proxy::SportKind;
//!
//! #[tokio::main]
//! async fn main() -> sports_proxy::Result<()> {
//!     let config = ProxyConfig::load(None)?;
//!     let nba = SportService::<Nba>::new(&config.upstream_for(SportKind::Nba)?)?;
//!
//!     let outcome = nba.list_teams(PageRequest::new(2, 25)?).await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  HTTP Facade (axum)                       │
//! │  /cs2/teams  /cs2/players  /nba/teams  /nba/players       │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────────────────────────────────────────────────────┐
//! │              SportService<Cs2> / <Nba>                    │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬──────────────┬──────────────┬─────────────┐
//! │  Pagination  │   Upstream   │    Decode    │    HTTP     │
//! ├──────────────┼──────────────┼──────────────┼─────────────┤
//! │ Page walker  │ SportClient  │ Envelope     │ reqwest     │
//! │ Cursor       │ 404 mapping  │ Team/Player  │ Timeouts    │
//! │ Warm-up wait │              │              │ Classify    │
//! └──────────────┴──────────────┴──────────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the proxy
pub mod error;

/// Common types and type aliases
pub mod types;

/// Configuration loading
pub mod config;

/// HTTP client with error classification
pub mod http;

/// Page-number pagination over upstream cursors
pub mod pagination;

/// Response decoding
pub mod decode;

/// Sport schemas and record types
pub mod sport;

/// Upstream API clients
pub mod upstream;

/// Client plus walker per sport
pub mod service;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use pagination::{Cursor, Page, PageRequest, WalkOutcome};
pub use service::SportService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
