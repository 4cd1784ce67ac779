//! CLI module
//!
//! Command-line interface for running the proxy.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP server
//! - `check` - Test the connection to both upstream APIs

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{build_router, serve, AppState, ListParams, EXHAUSTED_DETAIL};
