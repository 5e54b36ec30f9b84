use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 SUPPORT CONTACT
        // ========================================
        .route(
            "/api/support_contact",
            get(handlers::a001_support_contact::list_all)
                .post(handlers::a001_support_contact::create),
        )
        .route(
            "/api/support_contact/testdata",
            post(handlers::a001_support_contact::insert_test_data),
        )
        .route(
            "/api/support_contact/:id",
            get(handlers::a001_support_contact::get_by_id)
                .put(handlers::a001_support_contact::update)
                .delete(handlers::a001_support_contact::delete),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_responds_ok() {
        let response = configure_routes()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let response = configure_routes()
            .oneshot(
                Request::get("/api/support_contact/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_rejected() {
        let response = configure_routes()
            .oneshot(
                Request::builder()
                    .method(Method::PATCH)
                    .uri("/api/support_contact/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
