//! HTTP route handlers.
//!
//! Two endpoints: the greeting on `/` (also the fallback for every other path)
//! and the liveness probe on `/healthz`. Both accept any method and are served
//! with `Cache-Control: no-store`.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Liveness probe path polled by orchestrators
pub const HEALTH_PATH: &str = "/healthz";

/// Creates the Axum router with both routes, cache headers and request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, any(health::health))
        .route("/", any(home::index))
        .fallback(home::index)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::container::ContainerId;

    fn test_router(version: &str) -> Router {
        create_router(AppState::new(ContainerId::new("replica-1"), version))
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, String, Option<String>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let cache_control = response
            .headers()
            .get(CACHE_CONTROL)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap(), cache_control)
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let (status, body, _) = send(test_router("0.0.13"), Method::GET, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn root_returns_greeting() {
        let (status, body, _) = send(test_router("0.0.13"), Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello, world! I'm container: replica-1. version 0.0.13\n");
    }

    #[tokio::test]
    async fn greeting_is_plain_text() {
        let response = test_router("0.0.13")
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let content_type = response.headers().get(http::header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    }

    #[tokio::test]
    async fn configured_version_is_reported() {
        let (_, body, _) = send(test_router("2.0.0"), Method::GET, "/").await;
        assert_eq!(body, "Hello, world! I'm container: replica-1. version 2.0.0\n");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_greeting() {
        let (status, body, _) = send(test_router("0.0.13"), Method::GET, "/some/other/path").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello, world! I'm container: replica-1. version 0.0.13\n");
    }

    #[tokio::test]
    async fn any_method_is_answered() {
        let (status, body, _) = send(test_router("0.0.13"), Method::POST, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("Hello, world!"));

        let (status, body, _) = send(test_router("0.0.13"), Method::DELETE, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn responses_are_not_cacheable() {
        for uri in ["/", "/healthz", "/elsewhere"] {
            let (_, _, cache_control) = send(test_router("0.0.13"), Method::GET, uri).await;
            assert_eq!(cache_control.as_deref(), Some("no-store"), "uri {uri}");
        }
    }
}
