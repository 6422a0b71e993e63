pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::discovery::handlers as discovery;
use crate::message::handlers as message;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-message",
            post(message::handle_generate_message),
        )
        .route("/api/fetch-profile", post(profile::handle_fetch_profile))
        .route(
            "/api/prospects/search",
            post(discovery::handle_prospect_search),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::config::{Config, ProfileSourceKind};
    use crate::discovery::filter::FormerEmployeeFilter;
    use crate::discovery::search::{SearchClient, SearchError};
    use crate::discovery::service::DiscoveryService;
    use crate::llm_client::LlmClient;
    use crate::message::generator::MessageService;
    use crate::profile::cache::PROFILE_CACHE_TTL;
    use crate::profile::service::ProfileService;
    use crate::profile::source::{ProfileSource, SourceError};
    use crate::state::AppState;

    struct StaticSource;

    #[async_trait]
    impl ProfileSource for StaticSource {
        async fn fetch_profile(&self, _username: &str) -> Result<Value, SourceError> {
            Ok(json!({"firstName": "Jane", "lastName": "Doe"}))
        }
    }

    struct EmptyResults;

    #[async_trait]
    impl SearchClient for EmptyResults {
        async fn fetch_results(&self, _query: &str) -> Result<String, SearchError> {
            Ok("<html><body></body></html>".to_string())
        }
    }

    fn test_state() -> AppState {
        let config = Config {
            rapidapi_key: "test".to_string(),
            rapidapi_host: "test.example.com".to_string(),
            linkedin_api_username: "user".to_string(),
            linkedin_api_password: "pass".to_string(),
            openai_api_key: "test".to_string(),
            profile_source: ProfileSourceKind::Proxy,
            port: 8000,
            rust_log: "info".to_string(),
        };
        AppState {
            profiles: Arc::new(ProfileService::new(Arc::new(StaticSource), PROFILE_CACHE_TTL)),
            discovery: Arc::new(DiscoveryService::new(
                Arc::new(EmptyResults),
                Arc::new(FormerEmployeeFilter),
            )),
            messages: Arc::new(MessageService::new(LlmClient::new("test".to_string()))),
            config,
        }
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_fetch_profile_rejects_empty_username() {
        let (status, body) = post_json("/api/fetch-profile", json!({"username": ""})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Username required");
    }

    #[tokio::test]
    async fn test_fetch_profile_rejects_missing_username() {
        let (status, body) = post_json("/api/fetch-profile", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Username required");
    }

    #[tokio::test]
    async fn test_fetch_profile_returns_normalized_record() {
        let (status, body) = post_json("/api/fetch-profile", json!({"username": "jane-doe"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["basic_info"]["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_prospect_search_rejects_empty_roles() {
        let (status, body) = post_json(
            "/api/prospects/search",
            json!({"companyName": "Acme", "targetRoles": []}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Company name and target roles are required");
    }

    #[tokio::test]
    async fn test_prospect_search_rejects_missing_company() {
        let (status, _) = post_json(
            "/api/prospects/search",
            json!({"targetRoles": ["CTO"]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test(start_paused = true)]
    async fn test_prospect_search_empty_results_are_a_200() {
        let (status, body) = post_json(
            "/api/prospects/search",
            json!({"companyName": "Acme", "targetRoles": ["CTO"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "No prospects found");
        assert_eq!(body["prospects"], json!([]));
    }

    #[tokio::test]
    async fn test_generate_message_rejects_missing_target() {
        let (status, body) = post_json(
            "/api/generate-message",
            json!({"sender": {"name": "Ada"}}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Target username required");
    }
}
