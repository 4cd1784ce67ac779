//! Sport service
//!
//! Binds one [`SportClient`] to a [`PageWalker`] configured with that sport's
//! warm-up delay. The HTTP routes only talk to this layer: it validates ids
//! and page numbers, then either walks to a numbered page or forwards a
//! single lookup.

use crate::config::UpstreamConfig;
use crate::error::{Error, Result};
use crate::pagination::{PageRequest, PageWalker, WalkOutcome};
use crate::sport::Sport;
use crate::types::Resource;
use crate::upstream::SportClient;

/// Page-number access to one sport's teams and players
#[derive(Debug)]
pub struct SportService<S: Sport> {
    client: SportClient<S>,
    walker: PageWalker,
}

impl<S: Sport> SportService<S> {
    /// Build the client and walker from resolved upstream settings
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        Ok(Self::from_parts(
            SportClient::new(config)?,
            PageWalker::with_delay(config.warmup_delay),
        ))
    }

    /// Assemble a service from an existing client and walker
    pub fn from_parts(client: SportClient<S>, walker: PageWalker) -> Self {
        Self { client, walker }
    }

    /// Underlying upstream client
    pub fn client(&self) -> &SportClient<S> {
        &self.client
    }

    /// Walker used for listings
    pub fn walker(&self) -> &PageWalker {
        &self.walker
    }

    /// `per_page` used when the caller omits it
    pub fn default_per_page(&self, resource: Resource) -> u32 {
        S::default_per_page(resource)
    }

    /// Fetch a numbered page of teams
    pub async fn list_teams(&self, request: PageRequest) -> Result<WalkOutcome<S::Team>> {
        let per_page = request.per_page();
        self.walker
            .walk(request, |cursor| async move {
                self.client.list_teams(cursor.as_ref(), per_page).await
            })
            .await
    }

    /// Fetch a numbered page of players
    pub async fn list_players(&self, request: PageRequest) -> Result<WalkOutcome<S::Player>> {
        let per_page = request.per_page();
        self.walker
            .walk(request, |cursor| async move {
                self.client.list_players(cursor.as_ref(), per_page).await
            })
            .await
    }

    /// Fetch one team
    pub async fn get_team(&self, id: i64) -> Result<S::Team> {
        validate_id(Resource::Teams, id)?;
        self.client.get_team(id).await
    }

    /// Fetch one player
    pub async fn get_player(&self, id: i64) -> Result<S::Player> {
        validate_id(Resource::Players, id)?;
        self.client.get_player(id).await
    }

    /// Probe the upstream, see [`SportClient::check`]
    pub async fn check(&self) -> Result<()> {
        self.client.check().await
    }
}

fn validate_id(resource: Resource, id: i64) -> Result<()> {
    if id < 1 {
        return Err(Error::validation(format!(
            "{} id must be greater than 0",
            resource.entity_name()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
