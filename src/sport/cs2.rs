//! Counter-Strike 2 records

use super::Sport;
use crate::types::{Resource, SportKind};
use serde::{Deserialize, Serialize};

/// Marker for the BallDontLie CS2 API
#[derive(Debug, Clone, Copy, Default)]
pub struct Cs2;

impl Sport for Cs2 {
    const KIND: SportKind = SportKind::Cs2;
    type Team = Cs2Team;
    type Player = Cs2Player;

    fn default_per_page(resource: Resource) -> u32 {
        match resource {
            Resource::Teams => 100,
            Resource::Players => super::DEFAULT_PER_PAGE,
        }
    }
}

/// A CS2 team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cs2Team {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
}

/// A CS2 player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cs2Player {
    pub id: i64,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub team: Option<Cs2Team>,
    #[serde(default)]
    pub age: Option<u32>,
    /// As sent upstream (`YYYY-MM-DD`)
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub steam_id: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}
