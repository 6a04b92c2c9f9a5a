//! Shared harness for API integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production) on top of the per-test database pool provided by
//! `#[sqlx::test]`, plus helpers for JWT auth headers and JSON bodies.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use sitepulse_api::auth::jwt::{generate_access_token, JwtConfig};
use sitepulse_api::config::ServerConfig;
use sitepulse_api::router::build_app_router;
use sitepulse_api::state::AppState;
use sitepulse_events::{EventBus, HookRegistry};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a fixed JWT secret so tests can mint their own tokens.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_hooks(pool, Arc::new(HookRegistry::new()))
}

/// Like [`build_test_app`], but with a caller-supplied hook registry so
/// tests can register default-layout filters.
pub fn build_test_app_with_hooks(pool: PgPool, layout_hooks: Arc<HookRegistry>) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::new(EventBus::default()),
        layout_hooks,
    };

    build_app_router(state, &config)
}

/// Mint a `Bearer ...` header value for the given login and role.
pub fn bearer(login: &str, role: &str) -> String {
    let token = generate_access_token(login, role, &test_config().jwt)
        .expect("test token generation should succeed");
    format!("Bearer {token}")
}

/// Issue an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Issue an authenticated GET request.
pub async fn get_auth(app: Router, uri: &str, login: &str, role: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", bearer(login, role))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Issue an authenticated PUT request with a JSON body.
pub async fn put_json(
    app: Router,
    uri: &str,
    login: &str,
    role: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("authorization", bearer(login, role))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
