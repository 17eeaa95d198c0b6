use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes(dist_dir: &Path) -> Router {
    // frontend в режиме trunk serve ходит с другого порта
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/contact-requests",
            post(handlers::a002_contact_request::submit),
        )
        .fallback_service(ServeDir::new(dist_dir))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn post_contact(body: &str) -> (StatusCode, String, serde_json::Value) {
        let response = configure_routes(Path::new("dist"))
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/contact-requests")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_contact_missing_field_returns_json_error() {
        let (status, content_type, body) =
            post_contact(r#"{"name":"A","email":"a@b.ru"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(content_type, "application/json");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_contact_malformed_json_returns_json_error() {
        let (status, _, body) = post_contact("{not json").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_contact_valid_body_accepted() {
        let (status, _, body) = post_contact(
            r#"{"name":"Анна","email":"anna@example.ru","message":"Нужен счёт"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["status"], "accepted");
    }
}
