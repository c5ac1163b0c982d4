use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tokio::task::JoinError;

/// Failures of the detached `/process` task. Request input never produces one.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("processing task aborted: {0}")]
    ProcessingAborted(#[from] JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ProcessingAborted(err) => {
                if err.is_panic() {
                    tracing::error!(error = %err, "processing task panicked");
                } else if err.is_cancelled() {
                    tracing::error!(error = %err, "processing task was cancelled");
                }

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "status": "failed" })),
                )
                    .into_response()
            }
        }
    }
}
