use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use vidcat_core::MediaFileRecord;

#[utoipa::path(
    get,
    path = "/api/media",
    tag = "media",
    responses(
        (status = 200, description = "Stored media files sorted by name", body = Vec<MediaFileRecord>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_media(State(state): State<Arc<AppState>>) -> Json<Vec<MediaFileRecord>> {
    // The listing never fails from the client's point of view.
    match state.media.store.list().await {
        Ok(records) => Json(records),
        Err(e) => {
            tracing::error!(
                error = %e,
                path = %state.media.store.root().display(),
                "Failed to list media, returning an empty catalogue"
            );
            Json(Vec::new())
        }
    }
}
