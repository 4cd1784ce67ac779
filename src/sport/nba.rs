//! NBA records

use super::Sport;
use crate::types::SportKind;
use serde::{Deserialize, Serialize};

/// Marker for the BallDontLie NBA API
#[derive(Debug, Clone, Copy, Default)]
pub struct Nba;

impl Sport for Nba {
    const KIND: SportKind = SportKind::Nba;
    type Team = NbaTeam;
    type Player = NbaPlayer;
}

/// An NBA franchise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NbaTeam {
    pub id: i64,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// An NBA player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NbaPlayer {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub height_feet: Option<u32>,
    #[serde(default)]
    pub height_inches: Option<u32>,
    #[serde(default)]
    pub weight_pounds: Option<u32>,
    #[serde(default)]
    pub team: Option<NbaTeam>,
}
