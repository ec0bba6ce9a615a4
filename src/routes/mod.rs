pub mod api;
pub mod static_files;

use std::sync::Arc;

use axum::{Router, routing::get};
use http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::handlers::api::health_check;
use crate::state::AppState;

/// Build the CORS layer from a comma-separated origin list, or `*` for any
/// origin.
///
/// Explicit origins allow credentials; the wildcard does not.
pub fn cors_layer(origins: &str) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.trim() == "*" {
        return base.allow_origin(Any).allow_credentials(false);
    }

    // Parse comma-separated origins
    let origins: Vec<HeaderValue> = origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    base.allow_origin(origins).allow_credentials(true)
}

/// Assemble the full application: health check, API routes, static files,
/// CORS and security headers.
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);
    let static_routes = static_files::create_static_router(&state.config);

    // Static routes go last: they own the fallback
    Router::new()
        .route("/health", get(health_check))
        .merge(api::create_api_router())
        .merge(static_routes)
        .with_state(state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    async fn preflight(layer: CorsLayer, origin: &str) -> axum::http::Response<Body> {
        let app = Router::new()
            .route("/api/tts", axum::routing::post(|| async { "ok" }))
            .layer(layer);
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/tts")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_cors_layer_wildcard() {
        let response = preflight(cors_layer("*"), "https://anywhere.example").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_cors_layer_origin_list() {
        let layer = cors_layer("https://a.example, https://b.example");

        let response = preflight(layer.clone(), "https://b.example").await;
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://b.example"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );

        let response = preflight(layer, "https://evil.example").await;
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }
}
