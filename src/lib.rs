use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod monitoring;
pub mod security;
pub mod state;

use api::create_api_router;
use monitoring::monitoring_router;
use security::{cors_layer, security_headers_middleware};
use state::AppState;

use axum::middleware as axum_middleware;

pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Health/readiness endpoints (no auth, at the root)
        .merge(monitoring_router())
        // JSON API under /api
        .merge(create_api_router())
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(axum_middleware::from_fn(security_headers_middleware))
}
