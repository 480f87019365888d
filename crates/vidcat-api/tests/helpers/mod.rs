//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p vidcat-api --test media_test`.

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use std::path::PathBuf;
use tempfile::TempDir;
use vidcat_api::setup;
use vidcat_core::config::{BaseConfig, CatalogueConfig, LogFormat};
use vidcat_core::constants::MAX_UPLOAD_BYTES;
use vidcat_core::Config;

/// Test application: server plus the temporary web root it serves.
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
    web_root: PathBuf,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn web_root(&self) -> PathBuf {
        self.web_root.clone()
    }

    /// Storage root the app writes uploads into.
    pub fn media_dir(&self) -> PathBuf {
        self.web_root.join("media")
    }
}

pub fn create_test_config(
    web_root: PathBuf,
    max_upload_bytes: usize,
    environment: &str,
) -> Config {
    Config(Box::new(CatalogueConfig {
        base: BaseConfig {
            server_port: 5000,
            cors_origins: vec!["*".to_string()],
            environment: environment.to_string(),
            log_format: LogFormat::Compact,
        },
        web_root,
        max_upload_bytes,
    }))
}

/// Setup test app over a fresh temporary web root with the default upload ceiling.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(MAX_UPLOAD_BYTES, "test").await
}

pub async fn setup_test_app_with_limit(max_upload_bytes: usize) -> TestApp {
    setup_test_app_with(max_upload_bytes, "test").await
}

pub async fn setup_test_app_with(max_upload_bytes: usize, environment: &str) -> TestApp {
    let (temp_dir, web_root, app) = build_test_router(max_upload_bytes, environment).await;

    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
        web_root,
    }
}

/// Bare router over a fresh temporary web root, for requests `TestServer` cannot
/// express (e.g. bodies without a `Content-Length`).
pub async fn build_test_router(
    max_upload_bytes: usize,
    environment: &str,
) -> (TempDir, PathBuf, Router) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let web_root = temp_dir.path().join("wwwroot");

    let config = create_test_config(web_root.clone(), max_upload_bytes, environment);
    let (_state, app) = setup::build_app(config)
        .await
        .expect("Failed to build application");

    (temp_dir, web_root, app)
}
