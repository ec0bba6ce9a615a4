//! Server Startup Tests
//!
//! Tests for configuration loading and startup behavior with the real
//! ElevenLabs-backed state.

use std::net::TcpListener;
use std::path::Path;

use axum::{body::Body, http::Request};
use serial_test::serial;
use tempfile::TempDir;
use tower::util::ServiceExt;

use emotion_tts_gateway::{ServerConfig, routes, state::AppState};

/// Helper function to create a minimal test configuration
fn create_minimal_config(port: u16, root: &Path) -> ServerConfig {
    let public_dir = root.join("public");
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port,
        tls: None,
        elevenlabs_api_key: None,
        elevenlabs_voice_id: None,
        elevenlabs_model_id: "eleven_multilingual_v2".to_string(),
        elevenlabs_base_url: "https://api.elevenlabs.io".to_string(),
        audio_dir: public_dir.join("audio"),
        public_dir,
        cors_allowed_origins: "*".to_string(),
    }
}

/// Find an available port for testing
fn find_available_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// The server starts without any ElevenLabs credentials
#[tokio::test]
async fn test_minimal_config_boot() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_minimal_config(find_available_port(), temp_dir.path());

    let app_state = AppState::new(config).unwrap();
    let app = routes::create_app(app_state);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["provider_configured"], false);
}

/// Missing credentials surface as a 500 when synthesis is attempted
#[tokio::test]
async fn test_missing_api_keys_returns_error_on_use() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_minimal_config(find_available_port(), temp_dir.path());
    let app_state = AppState::new(config).unwrap();
    let app = routes::api::create_api_router().with_state(app_state);

    for uri in ["/api/tts", "/api/tts-stream"] {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(r#"{"text":"Hello, test."}"#))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

/// Validation runs before the provider is consulted
#[tokio::test]
async fn test_validation_without_credentials_is_400() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_minimal_config(find_available_port(), temp_dir.path());
    let app = routes::api::create_api_router().with_state(AppState::new(config).unwrap());

    let request = Request::builder()
        .method("POST")
        .uri("/api/chat-tts")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

/// Malformed JSON is a client error, not a server error
#[tokio::test]
async fn test_malformed_json_is_400() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_minimal_config(find_available_port(), temp_dir.path());
    let app = routes::api::create_api_router().with_state(AppState::new(config).unwrap());

    let request = Request::builder()
        .method("POST")
        .uri("/api/tts")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

/// Files under the public directory are served at the root
#[tokio::test]
async fn test_public_directory_is_served() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_minimal_config(find_available_port(), temp_dir.path());
    std::fs::create_dir_all(&config.public_dir).unwrap();
    std::fs::write(config.public_dir.join("index.html"), "<h1>tts</h1>").unwrap();

    let app = routes::create_app(AppState::new(config).unwrap());

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body.as_ref(), b"<h1>tts</h1>");

    let request = Request::builder()
        .uri("/missing.js")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

/// API routes only accept POST
#[tokio::test]
async fn test_api_routes_reject_get() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_minimal_config(find_available_port(), temp_dir.path());
    let app = routes::api::create_api_router().with_state(AppState::new(config).unwrap());

    let request = Request::builder().uri("/api/tts").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_address_parsing() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_minimal_config(8080, temp_dir.path());
    assert_eq!(config.address(), "127.0.0.1:8080");
    assert!(!config.is_tls_enabled());
}

/// Test loading configuration from a YAML file
#[tokio::test]
#[serial]
async fn test_yaml_config_boot() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    let public_dir = temp_dir.path().join("site");
    std::fs::write(
        &config_path,
        format!(
            r#"
server:
  host: "127.0.0.1"
  port: 3999
providers:
  elevenlabs_api_key: "yaml-key"
  elevenlabs_voice_id: "yaml-voice"
storage:
  public_dir: "{}"
"#,
            public_dir.display()
        ),
    )
    .unwrap();

    let config = ServerConfig::from_file(&config_path).unwrap();
    assert_eq!(config.port, 3999);
    assert_eq!(config.audio_dir, public_dir.join("audio"));
    assert!(config.has_elevenlabs_credentials());

    let app = routes::create_app(AppState::new(config).unwrap());
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["provider_configured"], true);
}

/// Test concurrent request handling capability
#[tokio::test]
async fn test_concurrent_request_handling() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_minimal_config(find_available_port(), temp_dir.path());
    let app = routes::create_app(AppState::new(config).unwrap());

    let tasks: Vec<_> = (0..10)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let request = Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap();
                let response = app.oneshot(request).await.unwrap();
                response.status()
            })
        })
        .collect();

    for task in tasks {
        let status = task.await.expect("Task should complete");
        assert_eq!(status, axum::http::StatusCode::OK);
    }
}
