//! Media catalogue API integration tests.
//!
//! Run with: `cargo test -p vidcat-api --test media_test`

mod helpers;

use axum_test::multipart::MultipartForm;
use helpers::fixtures::{fake_mp4, files_form, mp4_part};
use helpers::{setup_test_app, setup_test_app_with, setup_test_app_with_limit};
use serde_json::Value;
use vidcat_core::MediaFileRecord;

#[tokio::test]
async fn test_list_empty_catalogue() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/media").await;

    assert_eq!(response.status_code(), 200);
    let records: Vec<MediaFileRecord> = response.json();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_startup_creates_storage_root() {
    let app = setup_test_app().await;
    assert!(app.media_dir().is_dir());
}

#[tokio::test]
async fn test_upload_then_list() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/api/media/upload")
        .multipart(files_form(vec![
            ("b.mp4", fake_mp4(2 * 1024 * 1024)),
            ("a.mp4", fake_mp4(4096)),
        ]))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Upload successful.");

    let listing: Value = client.get("/api/media").await.json();
    assert_eq!(
        listing,
        serde_json::json!([
            { "fileName": "a.mp4", "fileSizeBytes": 4096, "fileSizeDisplay": "4.0 KB" },
            { "fileName": "b.mp4", "fileSizeBytes": 2097152, "fileSizeDisplay": "2.0 MB" }
        ])
    );
}

#[tokio::test]
async fn test_uppercase_extension_is_accepted() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/api/media/upload")
        .multipart(files_form(vec![("HOLIDAY.MP4", fake_mp4(100))]))
        .await;
    assert_eq!(response.status_code(), 200);

    let records: Vec<MediaFileRecord> = client.get("/api/media").await.json();
    assert_eq!(records, vec![MediaFileRecord::new("HOLIDAY.MP4", 100)]);
}

#[tokio::test]
async fn test_reupload_overwrites_existing_file() {
    let app = setup_test_app().await;
    let client = app.client();

    for len in [500, 50] {
        let response = client
            .post("/api/media/upload")
            .multipart(files_form(vec![("clip.mp4", fake_mp4(len))]))
            .await;
        assert_eq!(response.status_code(), 200);
    }

    let records: Vec<MediaFileRecord> = client.get("/api/media").await.json();
    assert_eq!(records, vec![MediaFileRecord::new("clip.mp4", 50)]);
}

#[tokio::test]
async fn test_invalid_file_rejects_whole_batch() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/api/media/upload")
        .multipart(files_form(vec![
            ("good.mp4", fake_mp4(100)),
            ("notes.txt", b"not a video".to_vec()),
        ]))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "Invalid file type. Only MP4 files are allowed. Offending file: notes.txt"
    );
    assert_eq!(body["code"], "VALIDATION_ERROR");

    assert!(!app.media_dir().join("good.mp4").exists());
    let records: Vec<MediaFileRecord> = client.get("/api/media").await.json();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_empty_file_is_rejected() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/media/upload")
        .multipart(files_form(vec![("empty.mp4", Vec::new())]))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("empty.mp4"));
}

#[tokio::test]
async fn test_upload_without_files_is_rejected() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_text("note", "nothing attached");
    let response = app.client().post("/api/media/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "No files uploaded.");
}

#[tokio::test]
async fn test_files_under_other_field_names_are_ignored() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part("video", mp4_part("clip.mp4", fake_mp4(100)));
    let response = app.client().post("/api/media/upload").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    assert!(!app.media_dir().join("clip.mp4").exists());
}

#[tokio::test]
async fn test_upload_over_ceiling_is_rejected() {
    let app = setup_test_app_with_limit(4 * 1024).await;

    let response = app
        .client()
        .post("/api/media/upload")
        .multipart(files_form(vec![("big.mp4", fake_mp4(64 * 1024))]))
        .await;

    assert_eq!(response.status_code(), 413);
    let body: Value = response.json();
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
    assert_eq!(
        body["message"],
        "Upload failed: total upload size exceeds 4.0 KB."
    );
    assert!(!app.media_dir().join("big.mp4").exists());
}

#[tokio::test]
async fn test_unreadable_storage_root_lists_empty() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/api/media/upload")
        .multipart(files_form(vec![("clip.mp4", fake_mp4(10))]))
        .await;
    assert_eq!(response.status_code(), 200);

    // Replace the storage root with a regular file so the directory scan fails.
    std::fs::remove_dir_all(app.media_dir()).unwrap();
    std::fs::write(app.media_dir(), b"not a directory").unwrap();

    let response = client.get("/api/media").await;
    assert_eq!(response.status_code(), 200);
    let records: Vec<MediaFileRecord> = response.json();
    assert!(records.is_empty());

    let response = client.get("/ready").await;
    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert_eq!(body["storage"], "unavailable");
}

#[tokio::test]
async fn test_production_storage_failure_hides_os_text() {
    let app = setup_test_app_with(vidcat_core::constants::MAX_UPLOAD_BYTES, "production").await;
    std::fs::create_dir(app.media_dir().join("blocked.mp4")).unwrap();

    let response = app
        .client()
        .post("/api/media/upload")
        .multipart(files_form(vec![("blocked.mp4", fake_mp4(10))]))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["message"], "An error occurred while saving the files.");
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("blocked.mp4"));
    assert!(!detail.contains("os error"));
    assert!(!detail.contains("Storage error"));
}

#[tokio::test]
async fn test_storage_failure_returns_500_with_detail() {
    let app = setup_test_app().await;
    // A directory with the same name blocks the write.
    std::fs::create_dir(app.media_dir().join("blocked.mp4")).unwrap();

    let response = app
        .client()
        .post("/api/media/upload")
        .multipart(files_form(vec![
            ("first.mp4", fake_mp4(10)),
            ("blocked.mp4", fake_mp4(10)),
        ]))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["message"], "An error occurred while saving the files.");
    assert_eq!(body["code"], "STORAGE_ERROR");
    assert!(body["detail"].as_str().unwrap().contains("blocked.mp4"));

    // Files written before the failure stay.
    assert!(app.media_dir().join("first.mp4").is_file());
}

#[tokio::test]
async fn test_path_traversal_stays_in_storage_root() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/api/media/upload")
        .multipart(files_form(vec![("../../evil.mp4", fake_mp4(10))]))
        .await;
    assert_eq!(response.status_code(), 200);

    assert!(app.media_dir().join("evil.mp4").is_file());
    assert!(!app.web_root().join("evil.mp4").exists());
    assert!(!app.web_root().parent().unwrap().join("evil.mp4").exists());
}

#[tokio::test]
async fn test_uploaded_file_is_served_statically() {
    let app = setup_test_app().await;
    let client = app.client();
    let data = fake_mp4(3000);

    let response = client
        .post("/api/media/upload")
        .multipart(files_form(vec![("my video (1).mp4", data.clone())]))
        .await;
    assert_eq!(response.status_code(), 200);

    let response = client.get("/media/my%20video%20%281%29.mp4").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().to_vec(), data);
}

#[tokio::test]
async fn test_missing_media_file_is_404() {
    let app = setup_test_app().await;

    let response = app.client().get("/media/nope.mp4").await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_web_root_serves_index() {
    let app = setup_test_app().await;
    std::fs::write(app.web_root().join("index.html"), "<h1>Catalogue</h1>").unwrap();

    let response = app.client().get("/").await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("Catalogue"));
}

#[tokio::test]
async fn test_readiness_reports_storage() {
    let app = setup_test_app().await;

    let response = app.client().get("/ready").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["storage"], "ready");
}

#[tokio::test]
async fn test_openapi_document_lists_media_routes() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;
    assert_eq!(response.status_code(), 200);
    let doc: Value = response.json();
    assert!(doc["paths"].get("/api/media").is_some());
    assert!(doc["paths"].get("/api/media/upload").is_some());
}
