//! Serves point-in-time host resource usage over HTTP.
//!
//! `GET /api/v1/performance-data` samples CPU, memory, disk and cumulative
//! network bytes on every request and returns them as one flat JSON object.
//! Nothing is cached or retained between requests.

use std::sync::Arc;

pub mod config;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod server;

use metrics::Sampler;

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// Stateless sampler invoked once per request.
    pub sampler: Arc<dyn Sampler>,
}

impl AppState {
    pub fn new(sampler: impl Sampler + 'static) -> Self {
        Self {
            sampler: Arc::new(sampler),
        }
    }
}
