//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::cli::server::{build_router, serve, AppState};
use crate::config::ProxyConfig;
use crate::error::{Error, Result};
use crate::service::SportService;
use crate::sport::{Cs2, Nba};
use crate::types::SportKind;
use serde_json::json;
use std::net::SocketAddr;
use tracing::{error, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Serve { host, port } => self.serve(config, host.as_deref(), *port).await,
            Commands::Check => self.check(&config).await,
        }
    }

    /// Load the YAML file (if any) with environment overrides
    fn load_config(&self) -> Result<ProxyConfig> {
        let config = ProxyConfig::load(self.cli.config.as_deref())?;
        if self.cli.verbose {
            info!(server = ?config.server, timeout_secs = config.upstream.timeout_secs, "Loaded configuration");
        }
        Ok(config)
    }

    /// Build both services; any missing setting aborts startup
    fn build_state(config: &ProxyConfig) -> Result<AppState> {
        let cs2 = SportService::<Cs2>::new(&config.upstream_for(SportKind::Cs2)?)?;
        let nba = SportService::<Nba>::new(&config.upstream_for(SportKind::Nba)?)?;
        Ok(AppState::new(cs2, nba))
    }

    /// Start the HTTP server
    async fn serve(&self, config: ProxyConfig, host: Option<&str>, port: Option<u16>) -> Result<()> {
        let state = Self::build_state(&config)?;

        let host = host.unwrap_or(&config.server.host);
        let port = port.unwrap_or(config.server.port);
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| Error::invalid_value("HOST", format!("'{host}:{port}': {e}")))?;

        serve(build_router(state), addr).await
    }

    /// Probe every upstream with one single-record listing
    async fn check(&self, config: &ProxyConfig) -> Result<()> {
        let mut failed = Vec::new();

        for kind in SportKind::ALL {
            let result = match kind {
                SportKind::Cs2 => Self::check_sport::<Cs2>(config, kind).await,
                SportKind::Nba => Self::check_sport::<Nba>(config, kind).await,
            };

            let status = match &result {
                Ok(()) => json!({ "sport": kind, "status": "SUCCEEDED" }),
                Err(e) => {
                    error!(sport = %kind, error = %e, "Upstream check failed");
                    failed.push(kind.as_str());
                    json!({ "sport": kind, "status": "FAILED", "message": e.to_string() })
                }
            };
            println!("{}", serde_json::to_string(&status).unwrap_or_default());
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(Error::config(format!(
                "upstream check failed for: {}",
                failed.join(", ")
            )))
        }
    }

    async fn check_sport<S: crate::sport::Sport>(
        config: &ProxyConfig,
        kind: SportKind,
    ) -> Result<()> {
        let service = SportService::<S>::new(&config.upstream_for(kind)?)?;
        info!(sport = %kind, base_url = service.client().base_url(), "Checking connection");
        service.check().await
    }
}
