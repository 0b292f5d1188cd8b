pub mod performance;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::metrics::SamplingError;

// ─── Unified error type ──────────────────────────────────────────

#[derive(Debug)]
pub enum AppError {
    /// An OS query behind the snapshot failed.
    Sampling(SamplingError),
    Internal(String),
}

impl From<SamplingError> for AppError {
    fn from(err: SamplingError) -> Self {
        Self::Sampling(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Sampling(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("sampling failed: {err}"),
            ),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error":  message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
