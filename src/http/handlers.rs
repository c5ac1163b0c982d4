//! Axum HTTP handlers for the web server

use std::sync::atomic::Ordering;

use axum::{body::Bytes, extract::State, Json};
use tracing::debug;

use crate::{
    domain::{
        descriptor::ServiceDescriptor,
        envelope::{parse_payload, ResultEnvelope},
    },
    errors::AppError,
    AppState,
};

pub async fn health() -> &'static str {
    "OK"
}

pub async fn discovery() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor::current())
}

/// Echoes the payload after the configured processing delay.
///
/// The delay runs on a detached task, so a client that disconnects early does not cut the
/// simulated work short.
pub async fn process(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ResultEnvelope>, AppError> {
    let payload = parse_payload(&body);
    let config = state.config.clone();
    let completed_jobs = state.completed_jobs.clone();

    let envelope = tokio::spawn(async move {
        tokio::time::sleep(config.processing_delay()).await;
        let envelope =
            ResultEnvelope::new(payload, config.host_id.clone(), config.processing_time_ms);
        let completed = completed_jobs.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(
            processing_time_ms = envelope.processing_duration_ms,
            completed_jobs = completed,
            "processing completed"
        );
        envelope
    })
    .await?;

    Ok(Json(envelope))
}
