//! Configuration for the proxy
//!
//! Settings come from an optional YAML file and are then overridden by
//! environment variables (a `.env` file is loaded into the environment by the
//! binary before this runs). Required values are only checked when a sport's
//! upstream config is resolved, so a missing URL names the variable to set.
//!
//! ```yaml
//! api_key: "..."
//! server:
//!   host: 0.0.0.0
//!   port: 8000
//! upstream:
//!   timeout_secs: 30
//!   cs2:
//!     base_url: https://api.balldontlie.io/cs/v1
//!     warmup_delay_ms: 12000
//!   nba:
//!     base_url: https://api.balldontlie.io/v1
//! ```

use crate::error::{Error, Result};
use crate::types::SportKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the shared upstream API key
pub const API_KEY_VAR: &str = "API_KEY";

/// Environment variable overriding the upstream request timeout
pub const TIMEOUT_VAR: &str = "UPSTREAM_TIMEOUT_SECS";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete proxy configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Shared API key sent in the `Authorization` header
    #[serde(default)]
    pub api_key: Option<String>,

    /// Listen address
    #[serde(default)]
    pub server: ServerSettings,

    /// Upstream API settings
    #[serde(default)]
    pub upstream: UpstreamSettings,
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("server", &self.server)
            .field("upstream", &self.upstream)
            .finish()
    }
}

/// Listen address for the HTTP facade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Settings shared by both upstream APIs plus per-sport sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamSettings {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub cs2: SportSettings,

    #[serde(default)]
    pub nba: SportSettings,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            cs2: SportSettings::default(),
            nba: SportSettings::default(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

impl UpstreamSettings {
    /// Settings section for one sport
    pub fn sport(&self, kind: SportKind) -> &SportSettings {
        match kind {
            SportKind::Cs2 => &self.cs2,
            SportKind::Nba => &self.nba,
        }
    }

    fn sport_mut(&mut self, kind: SportKind) -> &mut SportSettings {
        match kind {
            SportKind::Cs2 => &mut self.cs2,
            SportKind::Nba => &mut self.nba,
        }
    }
}

/// Upstream settings for one sport
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SportSettings {
    /// Base URL of the upstream API
    #[serde(default)]
    pub base_url: Option<String>,

    /// Pause between pagination warm-up calls. `0` disables it; unset uses
    /// the sport's default.
    #[serde(default)]
    pub warmup_delay_ms: Option<u64>,
}

// ============================================================================
// Loading
// ============================================================================

impl ProxyConfig {
    /// Parse a config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from an optional file, then apply the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override values from an environment lookup.
    ///
    /// Empty variables are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup(API_KEY_VAR) {
            self.api_key = Some(key);
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_number("PORT", &port)?;
        }
        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            self.upstream.timeout_secs = parse_number(TIMEOUT_VAR, &timeout)?;
        }

        for kind in SportKind::ALL {
            let settings = self.upstream.sport_mut(kind);
            if let Some(url) = lookup(kind.base_url_var()) {
                settings.base_url = Some(url);
            }
            if let Some(delay) = lookup(kind.warmup_delay_var()) {
                settings.warmup_delay_ms = Some(parse_number(kind.warmup_delay_var(), &delay)?);
            }
        }

        Ok(())
    }

    /// Resolve the runtime upstream config for one sport.
    ///
    /// Fails when the API key or the sport's base URL is missing.
    pub fn upstream_for(&self, kind: SportKind) -> Result<UpstreamConfig> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::missing_field(API_KEY_VAR))?;

        let settings = self.upstream.sport(kind);
        let base_url = settings
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::missing_field(kind.base_url_var()))?;

        let warmup_delay = match settings.warmup_delay_ms {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => kind.default_warmup_delay(),
        };

        if self.upstream.timeout_secs == 0 {
            return Err(Error::invalid_value(TIMEOUT_VAR, "must be greater than 0"));
        }

        Ok(UpstreamConfig {
            sport: kind,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout: Duration::from_secs(self.upstream.timeout_secs),
            warmup_delay,
        })
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::invalid_value(field, format!("expected a number, got '{value}'")))
}

// ============================================================================
// Resolved Upstream Config
// ============================================================================

/// Everything needed to build the client for one sport
#[derive(Clone)]
pub struct UpstreamConfig {
    pub sport: SportKind,
    /// Base URL without a trailing slash
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
    /// Pause between pagination warm-up calls, if any
    pub warmup_delay: Option<Duration>,
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("sport", &self.sport)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("warmup_delay", &self.warmup_delay)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn config_from_env(pairs: &[(&str, &str)]) -> Result<ProxyConfig> {
        let vars = env(pairs);
        let mut config = ProxyConfig::default();
        config.apply_env(|key| vars.get(key).cloned())?;
        Ok(config)
    }

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.upstream.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_upstream_from_env() {
        let config = config_from_env(&[
            ("API_KEY", "secret"),
            ("CS2_BALLDONTLIE_API_URL", "https://api.example.com/cs/v1/"),
            ("NBA_BALLDONTLIE_API_URL", "https://api.example.com/v1"),
        ])
        .unwrap();

        let cs2 = config.upstream_for(SportKind::Cs2).unwrap();
        assert_eq!(cs2.base_url, "https://api.example.com/cs/v1");
        assert_eq!(cs2.api_key, "secret");
        assert_eq!(cs2.warmup_delay, Some(Duration::from_secs(12)));
        assert_eq!(cs2.timeout, Duration::from_secs(30));

        let nba = config.upstream_for(SportKind::Nba).unwrap();
        assert_eq!(nba.base_url, "https://api.example.com/v1");
        assert_eq!(nba.warmup_delay, None);
    }

    #[test]
    fn test_missing_api_key() {
        let config =
            config_from_env(&[("CS2_BALLDONTLIE_API_URL", "https://api.example.com")]).unwrap();
        let err = config.upstream_for(SportKind::Cs2).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "API_KEY"));
    }

    #[test]
    fn test_missing_base_url_only_affects_that_sport() {
        let config = config_from_env(&[
            ("API_KEY", "secret"),
            ("NBA_BALLDONTLIE_API_URL", "https://api.example.com/v1"),
        ])
        .unwrap();

        let err = config.upstream_for(SportKind::Cs2).unwrap_err();
        assert!(
            matches!(err, Error::MissingConfigField { ref field } if field == "CS2_BALLDONTLIE_API_URL")
        );
        assert!(config.upstream_for(SportKind::Nba).is_ok());
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let config = config_from_env(&[
            ("API_KEY", "   "),
            ("CS2_BALLDONTLIE_API_URL", "https://api.example.com"),
        ])
        .unwrap();
        assert!(config.upstream_for(SportKind::Cs2).is_err());
    }

    #[test]
    fn test_warmup_delay_overrides() {
        let config = config_from_env(&[
            ("API_KEY", "secret"),
            ("CS2_BALLDONTLIE_API_URL", "https://api.example.com"),
            ("NBA_BALLDONTLIE_API_URL", "https://api.example.com"),
            ("CS2_WARMUP_DELAY_MS", "0"),
            ("NBA_WARMUP_DELAY_MS", "250"),
        ])
        .unwrap();

        assert_eq!(config.upstream_for(SportKind::Cs2).unwrap().warmup_delay, None);
        assert_eq!(
            config.upstream_for(SportKind::Nba).unwrap().warmup_delay,
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn test_invalid_number() {
        let err = config_from_env(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "PORT"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = config_from_env(&[
            ("API_KEY", "secret"),
            ("NBA_BALLDONTLIE_API_URL", "https://api.example.com"),
            ("UPSTREAM_TIMEOUT_SECS", "0"),
        ])
        .unwrap();
        assert!(matches!(
            config.upstream_for(SportKind::Nba),
            Err(Error::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_from_yaml_then_env() {
        let yaml = r#"
api_key: from-file
server:
  port: 9000
upstream:
  timeout_secs: 5
  cs2:
    base_url: https://cs2.example.com
    warmup_delay_ms: 100
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let mut config = ProxyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");

        let vars = env(&[("API_KEY", "from-env")]);
        config.apply_env(|key| vars.get(key).cloned()).unwrap();

        let cs2 = config.upstream_for(SportKind::Cs2).unwrap();
        assert_eq!(cs2.api_key, "from-env");
        assert_eq!(cs2.timeout, Duration::from_secs(5));
        assert_eq!(cs2.warmup_delay, Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_missing_file() {
        let err = ProxyConfig::from_file("/nonexistent/proxy.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = config_from_env(&[
            ("API_KEY", "super-secret"),
            ("NBA_BALLDONTLIE_API_URL", "https://api.example.com"),
        ])
        .unwrap();
        let upstream = config.upstream_for(SportKind::Nba).unwrap();
        let debug = format!("{upstream:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_proxy_config_debug_redacts_api_key() {
        let config = config_from_env(&[("API_KEY", "super-secret"), ("PORT", "9100")]).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("9100"));

        let debug = format!("{:?}", ProxyConfig::default());
        assert!(debug.contains("api_key: None"));
    }
}
