//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Page-number proxy for the BallDontLie CS2 and NBA APIs
#[derive(Parser, Debug)]
#[command(name = "sports-proxy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML); environment variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Test the connection to every upstream API
    Check,
}
