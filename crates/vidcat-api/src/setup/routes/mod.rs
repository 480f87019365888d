//! Route configuration and setup.
//!
//! API routes live under `/api`, stored files are served from `/media`, and every
//! other path falls through to the static web root.

mod health;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::middleware::{payload_too_large_as_json, redact_error_details};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::{RequestBodyLimitLayer, ResponseBody};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use vidcat_core::constants::MEDIA_URL_PREFIX;
use vidcat_core::Config;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    // Only the upload route accepts large bodies; the ceiling covers the whole request.
    let upload = post(handlers::media_upload::upload_media).layer(
        ServiceBuilder::new()
            .layer(axum::middleware::map_response_with_state(
                config.max_upload_bytes(),
                payload_too_large_as_json::<ResponseBody<Body>>,
            ))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.max_upload_bytes())),
    );

    let api_routes = Router::new()
        .route("/api/media", get(handlers::media_list::list_media))
        .route("/api/media/upload", upload)
        .route("/api/openapi.json", get(openapi_json))
        .route("/health", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state.clone());

    let media_files = ServeDir::new(state.media.store.root());
    let web_root = ServeDir::new(config.web_root());

    let app = api_routes
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .nest_service(MEDIA_URL_PREFIX, media_files)
        .fallback_service(web_root)
        .layer(axum::middleware::map_response_with_state(
            config.is_production(),
            redact_error_details,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
