use axum::{extract::State, Json};
use std::sync::Arc;

use crate::metrics::Snapshot;
use crate::AppState;

use super::AppError;

// ─── GET /api/v1/performance-data ────────────────────────────────
/// Samples the host once and returns the readings as a flat JSON object.
///
/// Sampling blocks for the CPU measurement window, so it runs on the
/// blocking pool rather than on an async worker.
pub async fn get_performance_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Snapshot>, AppError> {
    let sampler = state.sampler.clone();

    let snapshot = tokio::task::spawn_blocking(move || sampler.sample())
        .await
        .map_err(|e| AppError::Internal(format!("sampler task failed: {e}")))?
        .inspect_err(|e| tracing::warn!(error = %e, "host sampling failed"))?;

    Ok(Json(snapshot))
}
