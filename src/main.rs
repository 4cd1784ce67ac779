//! Sports proxy CLI
//!
//! Command-line entry point for serving and checking the proxy

use clap::Parser;
use sports_proxy::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
