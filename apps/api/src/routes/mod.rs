pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat_handlers;
use crate::directory::handlers as directory_handlers;
use crate::predict::handlers as predict_handlers;
use crate::state::AppState;
use crate::upstream::handlers as upstream_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Directory endpoints (synthetic dataset)
        .route(
            "/api/v1/colleges",
            get(directory_handlers::handle_list_colleges),
        )
        .route(
            "/api/v1/colleges/find",
            get(directory_handlers::handle_find_college),
        )
        .route(
            "/api/v1/colleges/by-state",
            get(directory_handlers::handle_colleges_by_state),
        )
        // Prediction endpoints (cutoff snapshot)
        .route("/api/v1/predict", get(predict_handlers::handle_predict))
        .route(
            "/api/v1/predict/by-state",
            get(predict_handlers::handle_predict_by_state),
        )
        .route(
            "/api/v1/predict/by-category",
            get(predict_handlers::handle_predict_by_category),
        )
        .route(
            "/api/v1/predict/by-rank",
            get(predict_handlers::handle_predict_by_rank),
        )
        // External backends
        .route(
            "/api/v1/recommendations",
            get(upstream_handlers::handle_recommendations),
        )
        .route("/api/v1/chat", post(chat_handlers::handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::directory::generator::generate_dataset;
    use crate::upstream::UpstreamClient;

    fn make_state() -> AppState {
        AppState {
            colleges: Arc::new(generate_dataset()),
            cutoffs: Arc::new(Vec::new()),
            upstream: UpstreamClient::new("http://127.0.0.1:8000".to_string()),
            chat: None,
            config: Config {
                port: 8080,
                rust_log: "info".to_string(),
                upstream_base_url: "http://127.0.0.1:8000".to_string(),
                gemini_api_key: None,
                college_data_path: None,
            },
        }
    }

    async fn get_status(uri: &str) -> StatusCode {
        let app = build_router(make_state());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_health_responds_ok() {
        assert_eq!(get_status("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_colleges_listing_responds_ok() {
        assert_eq!(get_status("/api/v1/colleges?limit=5").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_predict_without_required_params_is_bad_request() {
        assert_eq!(get_status("/api/v1/predict").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_predict_with_empty_snapshot_responds_ok() {
        assert_eq!(
            get_status("/api/v1/predict?exam=NEET&rank=500").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_chat_without_key_is_service_unavailable() {
        let app = build_router(make_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"messages":[{"role":"user","content":"hi"}]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_unknown_college_lookup_is_not_found() {
        assert_eq!(
            get_status("/api/v1/colleges/find?name=Hogwarts").await,
            StatusCode::NOT_FOUND
        );
    }
}
