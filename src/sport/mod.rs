//! Sport schemas
//!
//! Each upstream API is described by a zero-sized marker type implementing
//! [`Sport`]. The marker fixes the record shapes and listing defaults; the
//! client, walker and routes are generic over it, so both sports share one
//! implementation.

mod cs2;
mod nba;

pub use cs2::{Cs2, Cs2Player, Cs2Team};
pub use nba::{Nba, NbaPlayer, NbaTeam};

use crate::types::{Resource, SportKind};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// `per_page` used when the caller does not pass one
pub const DEFAULT_PER_PAGE: u32 = 25;

/// A record served by the upstream API
pub trait Entity: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {}

impl<T> Entity for T where T: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {}

/// Schema and defaults for one upstream API
pub trait Sport: Send + Sync + 'static {
    /// Which upstream this is
    const KIND: SportKind;

    /// Team record
    type Team: Entity;

    /// Player record
    type Player: Entity;

    /// `per_page` for a listing when the caller omits it
    fn default_per_page(_resource: Resource) -> u32 {
        DEFAULT_PER_PAGE
    }
}
