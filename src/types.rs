//! Common types used throughout the sports proxy
//!
//! This module contains shared type definitions, type aliases,
//! and small enums used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Sport Kind
// ============================================================================

/// The upstream APIs this proxy republishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportKind {
    /// Counter-Strike 2 (rate limited upstream tier)
    Cs2,
    /// NBA basketball (unmetered upstream tier)
    Nba,
}

impl SportKind {
    /// All supported sports, in route registration order
    pub const ALL: [SportKind; 2] = [SportKind::Cs2, SportKind::Nba];

    /// Route prefix and config key for this sport
    pub fn as_str(self) -> &'static str {
        match self {
            SportKind::Cs2 => "cs2",
            SportKind::Nba => "nba",
        }
    }

    /// Environment variable holding the upstream base URL
    pub fn base_url_var(self) -> &'static str {
        match self {
            SportKind::Cs2 => "CS2_BALLDONTLIE_API_URL",
            SportKind::Nba => "NBA_BALLDONTLIE_API_URL",
        }
    }

    /// Environment variable overriding the warm-up delay
    pub fn warmup_delay_var(self) -> &'static str {
        match self {
            SportKind::Cs2 => "CS2_WARMUP_DELAY_MS",
            SportKind::Nba => "NBA_WARMUP_DELAY_MS",
        }
    }

    /// Pause between warm-up calls when none is configured.
    ///
    /// The CS2 tier allows 5 requests per minute, so calls are spaced 12s
    /// apart. The NBA tier is unmetered.
    pub fn default_warmup_delay(self) -> Option<Duration> {
        match self {
            SportKind::Cs2 => Some(Duration::from_secs(12)),
            SportKind::Nba => None,
        }
    }
}

impl fmt::Display for SportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cs2" => Ok(SportKind::Cs2),
            "nba" => Ok(SportKind::Nba),
            other => Err(format!("unknown sport: {other}")),
        }
    }
}

// ============================================================================
// Resource
// ============================================================================

/// Upstream collections exposed for each sport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Teams,
    Players,
}

impl Resource {
    /// Path segment on both the upstream and the local routes
    pub fn path(self) -> &'static str {
        match self {
            Resource::Teams => "teams",
            Resource::Players => "players",
        }
    }

    /// Singular name used in messages
    pub fn entity_name(self) -> &'static str {
        match self {
            Resource::Teams => "team",
            Resource::Players => "player",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
