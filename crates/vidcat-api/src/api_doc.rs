use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use vidcat_core::models::HealthResponse;
use vidcat_core::{MediaFileRecord, UploadResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vidcat API",
        version = "0.1.0",
        description = "Minimal MP4 media catalogue: list stored videos, upload new ones and stream them back as static files."
    ),
    paths(
        handlers::media_list::list_media,
        handlers::media_upload::upload_media,
    ),
    components(
        schemas(
            MediaFileRecord,
            UploadResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "media", description = "Media catalogue endpoints")
    )
)]
pub struct ApiDoc;
