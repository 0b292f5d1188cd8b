use axum::{middleware as axum_mw, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::middleware::timing;
use crate::AppState;

/// Route serving the host snapshot.
pub const PERFORMANCE_DATA_PATH: &str = "/api/v1/performance-data";

/// Builds the Axum `Router` with the single API route and global middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            PERFORMANCE_DATA_PATH,
            get(handlers::performance::get_performance_data),
        )
        .with_state(state)
        // ── Global middleware (applied bottom-up) ───────────────
        .layer(axum_mw::from_fn(timing::timing_middleware))
        .layer(CorsLayer::permissive())
}
