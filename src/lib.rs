//! artist-registry - minimal artist record-management service
//!
//! An HTTP CRUD API over a single SQLite table of artists. The storage
//! gateway (`db`) owns table lifecycle and row mutation; the request
//! handlers (`api`) validate payloads and map results to JSON responses.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;
pub mod validate;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// Unknown routes fall through to axum's 404; unsupported methods on known
/// routes produce 405.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route(
            "/artists",
            get(api::list_artists)
                .post(api::create_artist)
                .put(api::update_artist),
        )
        .route(
            "/artists/:user_id",
            get(api::get_artist).delete(api::delete_artist),
        )
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
