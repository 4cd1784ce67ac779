//! Upstream API client
//!
//! One [`SportClient`] talks to one BallDontLie API. It is generic over the
//! [`Sport`] marker, which fixes the record types it decodes, so the CS2 and
//! NBA clients share this code.
//!
//! Every operation is exactly one HTTP call. Failures are classified by
//! [`HttpClient`]; single-record lookups additionally turn an upstream 404
//! into [`Error::NotFound`].

use crate::config::UpstreamConfig;
use crate::decode::{decode_page, decode_single};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{Cursor, Page};
use crate::sport::Sport;
use crate::types::{Resource, SportKind};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;
use url::Url;

/// Authenticated client for one upstream sports API
pub struct SportClient<S: Sport> {
    http: HttpClient,
    base_url: String,
    _sport: PhantomData<S>,
}

impl<S: Sport> SportClient<S> {
    /// Build a client from resolved upstream settings.
    ///
    /// Fails when the base URL does not parse as an absolute URL.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;

        if config.api_key.trim().is_empty() {
            return Err(Error::missing_field(crate::config::API_KEY_VAR));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let http_config = HttpClientConfig::builder()
            .base_url(base_url.clone())
            .timeout(config.timeout)
            .header("Authorization", config.api_key.clone())
            .build();

        Ok(Self {
            http: HttpClient::with_config(http_config)?,
            base_url,
            _sport: PhantomData,
        })
    }

    /// Which upstream this client talks to
    pub fn kind(&self) -> SportKind {
        S::KIND
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of teams
    pub async fn list_teams(&self, cursor: Option<&Cursor>, per_page: u32) -> Result<Page<S::Team>> {
        self.list(Resource::Teams, cursor, per_page).await
    }

    /// Fetch one team by id
    pub async fn get_team(&self, id: i64) -> Result<S::Team> {
        self.get(Resource::Teams, id).await
    }

    /// Fetch one page of players
    pub async fn list_players(
        &self,
        cursor: Option<&Cursor>,
        per_page: u32,
    ) -> Result<Page<S::Player>> {
        self.list(Resource::Players, cursor, per_page).await
    }

    /// Fetch one player by id
    pub async fn get_player(&self, id: i64) -> Result<S::Player> {
        self.get(Resource::Players, id).await
    }

    /// Probe the upstream with the smallest possible listing
    pub async fn check(&self) -> Result<()> {
        self.list_teams(None, 1).await.map(|_| ())
    }

    async fn list<T: DeserializeOwned>(
        &self,
        resource: Resource,
        cursor: Option<&Cursor>,
        per_page: u32,
    ) -> Result<Page<T>> {
        let request = RequestConfig::new()
            .query("per_page", per_page.to_string())
            .query_opt("cursor", cursor.map(Cursor::to_query_value));

        debug!(sport = %S::KIND, %resource, per_page, ?cursor, "Listing upstream records");
        let body = self
            .http
            .get_json_with_config(&format!("/{}", resource.path()), request)
            .await?;
        decode_page(body)
    }

    async fn get<T: DeserializeOwned>(&self, resource: Resource, id: i64) -> Result<T> {
        debug!(sport = %S::KIND, %resource, id, "Fetching upstream record");
        let body = self
            .http
            .get_json(&format!("/{}/{id}", resource.path()))
            .await
            .map_err(|e| match e {
                Error::UpstreamStatus { status: 404, .. } => {
                    Error::not_found(resource.entity_name(), id)
                }
                other => other,
            })?;
        decode_single(body)
    }
}

impl<S: Sport> std::fmt::Debug for SportClient<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SportClient")
            .field("sport", &S::KIND)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
