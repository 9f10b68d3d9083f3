#[cfg(test)]
mod router_tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::api::{app_state::AppState, create_router};
    use crate::knowledge::create_knowledge_facade;
    use crate::observability::AppMetrics;
    use crate::services::{ResultCache, create_dispatcher};

    fn test_app() -> axum::Router {
        let facade = create_knowledge_facade();
        let metrics = Arc::new(AppMetrics::default());
        let dispatcher = create_dispatcher(
            Arc::clone(&facade),
            None,
            Arc::new(ResultCache::new(true, 0)),
            Arc::clone(&metrics),
        );
        create_router(AppState::new(dispatcher, facade, metrics))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_design_hardcoded_concept_returns_200() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/visualizations/design")
                    .header("Content-Type", "application/json")
                    .body(Body::from(json!({"concept": "DNA"}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["concept"], "DNA");
        assert_eq!(body["source"], "hardcoded");
        assert_eq!(body["visualization"]["type"], "double_helix");
    }

    #[tokio::test]
    async fn test_design_blank_concept_returns_400() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/visualizations/design")
                    .header("Content-Type", "application/json")
                    .body(Body::from(json!({"concept": "  "}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_design_unlisted_concept_without_provider_returns_502() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/visualizations/design")
                    .header("Content-Type", "application/json")
                    .body(Body::from(json!({"concept": "RNA"}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_hardcoded_catalog_returns_200() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/concepts/hardcoded")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["total"].as_u64().unwrap() >= 5);
    }

    #[tokio::test]
    async fn test_search_returns_matches() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/concepts/search?q=dna")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["total"].as_u64().unwrap() >= 1);
    }

    #[tokio::test]
    async fn test_search_without_query_returns_400() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/concepts/search")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_concept_detail_always_complete() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/concepts/DNA")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["curated"], true);
        assert!(body["analysis"].is_object());
        assert!(body["prerequisites"].is_object());
        assert!(body["enrichment"].is_object());
    }

    #[tokio::test]
    async fn test_concept_graph_returns_nodes_and_links() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/concepts/DNA/graph")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["graph"]["nodes"].as_array().unwrap().len() >= 1);
        assert!(body["graph"]["links"].is_array());
    }
}
