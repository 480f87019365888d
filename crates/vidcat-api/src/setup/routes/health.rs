//! Health check handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use vidcat_core::models::HealthResponse;

/// Liveness probe - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - the storage root exists and is a directory.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = &state.media.store;

    if store.is_available().await {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ready".to_string(),
                storage: "ready".to_string(),
            }),
        )
    } else {
        tracing::error!(path = %store.root().display(), "Storage root unavailable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "not_ready".to_string(),
                storage: "unavailable".to_string(),
            }),
        )
    }
}
