use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::MediaUploadService;
use crate::state::AppState;
use crate::utils::upload::extract_multipart_files;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use std::sync::Arc;
use vidcat_core::{AppError, UploadResponse};

#[utoipa::path(
    post,
    path = "/api/media/upload",
    tag = "media",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "All files uploaded", body = UploadResponse),
        (status = 400, description = "No files, or a file that is not MP4", body = ErrorResponse),
        (status = 413, description = "Request body exceeds the upload ceiling", body = ErrorResponse),
        (status = 500, description = "Saving the files failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_media(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let multipart = multipart.map_err(|rejection| {
        AppError::Validation(format!("Invalid multipart request: {}", rejection.body_text()))
    })?;

    let files = extract_multipart_files(multipart, state.config.max_upload_bytes()).await?;
    let count = MediaUploadService::new(&state.media).upload(files).await?;

    tracing::info!(count, "Upload successful");
    Ok(Json(UploadResponse::success()))
}
