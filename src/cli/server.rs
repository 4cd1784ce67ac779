//! HTTP server mode: the REST facade over both sports
//!
//! Routes, per sport prefix (`/cs2`, `/nba`):
//!
//! - `GET /{sport}/teams?page&per_page` - JSON array of teams
//! - `GET /{sport}/teams/:id` - one team
//! - `GET /{sport}/players?page&per_page` - `{ "data": [...], "meta": {...} }`
//! - `GET /{sport}/players/:id` - one player
//!
//! A listing past the last upstream page answers 200 with
//! `{"detail": "No more pages available"}`. Errors answer with
//! `{"detail": "..."}` and the status from [`Error::status_code`].

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::error::{Error, Result};
use crate::pagination::{PageRequest, WalkOutcome};
use crate::service::SportService;
use crate::sport::{Cs2, Nba, Sport};
use crate::types::Resource;

/// Detail message for a listing past the last upstream page
pub const EXHAUSTED_DETAIL: &str = "No more pages available";

/// Services shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub cs2: Arc<SportService<Cs2>>,
    pub nba: Arc<SportService<Nba>>,
}

impl AppState {
    /// Wrap both services for sharing between requests
    pub fn new(cs2: SportService<Cs2>, nba: SportService<Nba>) -> Self {
        Self {
            cs2: Arc::new(cs2),
            nba: Arc::new(nba),
        }
    }
}

/// Query string of the listing routes
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListParams {
    /// Apply defaults and validate
    fn into_request(self, default_per_page: u32) -> Result<PageRequest> {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(i64::from(default_per_page)),
        )
    }
}

// ============================================================================
// Router
// ============================================================================

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    // Allow all origins, the facade is read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/cs2", sport_routes(state.cs2))
        .nest("/nba", sport_routes(state.nba))
        .fallback(fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn sport_routes<S: Sport>(service: Arc<SportService<S>>) -> Router {
    Router::new()
        .route("/teams", get(list_teams::<S>))
        .route("/teams/:id", get(get_team::<S>))
        .route("/players", get(list_players::<S>))
        .route("/players/:id", get(get_player::<S>))
        .with_state(service)
}

/// Start the HTTP server and run until Ctrl+C
pub async fn serve(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

// ============================================================================
// Handlers
// ============================================================================

/// Welcome endpoint
async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the CS2 and NBA API" }))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

async fn list_teams<S: Sport>(
    State(service): State<Arc<SportService<S>>>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Response> {
    let request = list_request(params, service.default_per_page(Resource::Teams))?;
    Ok(match service.list_teams(request).await? {
        WalkOutcome::Page(page) => Json(page.data).into_response(),
        WalkOutcome::Exhausted { last_page } => exhausted(last_page),
    })
}

async fn list_players<S: Sport>(
    State(service): State<Arc<SportService<S>>>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Response> {
    let request = list_request(params, service.default_per_page(Resource::Players))?;
    Ok(match service.list_players(request).await? {
        WalkOutcome::Page(page) => Json(page).into_response(),
        WalkOutcome::Exhausted { last_page } => exhausted(last_page),
    })
}

async fn get_team<S: Sport>(
    State(service): State<Arc<SportService<S>>>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<S::Team>> {
    let Path(id) = id.map_err(|e| Error::validation(e.body_text()))?;
    Ok(Json(service.get_team(id).await?))
}

async fn get_player<S: Sport>(
    State(service): State<Arc<SportService<S>>>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<S::Player>> {
    let Path(id) = id.map_err(|e| Error::validation(e.body_text()))?;
    Ok(Json(service.get_player(id).await?))
}

fn list_request(
    params: std::result::Result<Query<ListParams>, QueryRejection>,
    default_per_page: u32,
) -> Result<PageRequest> {
    let Query(params) = params.map_err(|e| Error::validation(e.body_text()))?;
    params.into_request(default_per_page)
}

fn exhausted(last_page: u32) -> Response {
    Json(json!({ "detail": EXHAUSTED_DETAIL, "last_page": last_page })).into_response()
}

// ============================================================================
// Error Responses
// ============================================================================

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.is_upstream() {
            error!(status = status.as_u16(), error = %self, "Upstream request failed");
        } else if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let mut body = json!({ "detail": self.to_string() });
        if let Error::UpstreamStatus {
            status: upstream_status,
            body: upstream_body,
        } = &self
        {
            body["upstream_status"] = json!(upstream_status);
            body["upstream_body"] = json!(upstream_body);
        }

        (status, Json(body)).into_response()
    }
}
