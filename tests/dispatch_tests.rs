//! 调度流程集成测试
//!
//! 覆盖两级调度、结果缓存与生成式后端的端到端行为。
//! 生成式后端用 wiremock 模拟 OpenAI 兼容接口。

use std::sync::Arc;

use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use genoviz::config::ProviderConfig;
use genoviz::error::AppError;
use genoviz::knowledge::create_knowledge_facade;
use genoviz::models::{BundleSource, ResolutionMode};
use genoviz::observability::AppMetrics;
use genoviz::provider::{GenerativeProvider, HttpGenerativeProvider};
use genoviz::services::{ResultCache, create_dispatcher};

fn provider_config(base_url: &str) -> ProviderConfig {
    ProviderConfig {
        backend: "http".to_string(),
        base_url: base_url.to_string(),
        model_name: "test-model".to_string(),
        api_key: String::new(),
        request_timeout: 5,
        temperature: 0.3,
    }
}

fn chat_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

fn generative_payload(title: &str) -> String {
    json!({
        "visualization": {
            "type": "knowledge_graph",
            "title": title,
            "description": "测试生成的可视化方案",
            "elements": ["节点", "连线"]
        },
        "insights": []
    })
    .to_string()
}

#[tokio::test]
async fn test_http_provider_parses_fenced_json() {
    let server = MockServer::start().await;
    let content = format!("设计如下：\n```json\n{}\n```", generative_payload("基因突变图谱"));
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(&content)))
        .expect(1)
        .mount(&server)
        .await;

    let provider = HttpGenerativeProvider::new(&provider_config(&server.uri())).unwrap();
    let facade = create_knowledge_facade();
    let output = provider.generate(&facade.bundle("基因突变")).await.unwrap();

    assert_eq!(output.visualization.title, "基因突变图谱");
}

#[tokio::test]
async fn test_http_provider_prose_reply_is_output_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_body("抱歉，我没法设计这个可视化。")),
        )
        .mount(&server)
        .await;

    let provider = HttpGenerativeProvider::new(&provider_config(&server.uri())).unwrap();
    let facade = create_knowledge_facade();
    let err = provider
        .generate(&facade.bundle("基因突变"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ProviderOutput(_)));
}

#[tokio::test]
async fn test_http_provider_server_error_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let provider = HttpGenerativeProvider::new(&provider_config(&server.uri())).unwrap();
    let facade = create_knowledge_facade();
    let err = provider
        .generate(&facade.bundle("基因突变"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Provider(_)));
}

#[tokio::test]
async fn test_dispatcher_caches_generated_bundle_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_body(&generative_payload("转录与翻译图谱"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = Arc::new(HttpGenerativeProvider::new(&provider_config(&server.uri())).unwrap());
    let dispatcher = create_dispatcher(
        create_knowledge_facade(),
        Some(provider),
        Arc::new(ResultCache::new(true, 0)),
        Arc::new(AppMetrics::default()),
    );

    let first = dispatcher
        .design("转录与翻译", ResolutionMode::ForceGenerative)
        .await
        .unwrap();
    let second = dispatcher
        .design("转录与翻译", ResolutionMode::ForceGenerative)
        .await
        .unwrap();

    assert_eq!(first.source, BundleSource::Generated);
    assert_eq!(first, second);
    // knowledge_graph 类型附带由前置树生成的图数据
    let graph = first.graph.as_ref().unwrap();
    assert!(graph.nodes.iter().any(|n| n.id == "转录与翻译"));
    assert!(graph.nodes.iter().any(|n| n.is_foundation));
}

#[tokio::test]
async fn test_dispatcher_failure_then_success_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_body(&generative_payload("染色体变异图谱"))),
        )
        .mount(&server)
        .await;

    let provider = Arc::new(HttpGenerativeProvider::new(&provider_config(&server.uri())).unwrap());
    let dispatcher = create_dispatcher(
        create_knowledge_facade(),
        Some(provider),
        Arc::new(ResultCache::new(true, 0)),
        Arc::new(AppMetrics::default()),
    );

    // 首次失败，错误向上传播且不入缓存
    let err = dispatcher
        .design("染色体变异", ResolutionMode::ForceGenerative)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Provider(_)));

    // 调用方重试触发全新计算并成功
    let bundle = dispatcher
        .design("染色体变异", ResolutionMode::ForceGenerative)
        .await
        .unwrap();
    assert_eq!(bundle.source, BundleSource::Generated);
}

#[rstest]
#[case("DNA")]
#[case("dna")]
#[case("Dna")]
fn test_search_case_insensitive(#[case] query: &str) {
    let facade = create_knowledge_facade();
    let hits = facade.registry().search(query);
    assert!(hits.iter().any(|r| r.concept == "DNA"));
}

#[rstest]
#[case("孟德尔第一定律")]
#[case("DNA")]
#[case("伴性遗传")]
#[case("中心法则")]
#[tokio::test]
async fn test_curated_concepts_never_touch_provider(#[case] concept: &str) {
    // provider 为 None：任何触达生成式路径的请求都会报错
    let dispatcher = create_dispatcher(
        create_knowledge_facade(),
        None,
        Arc::new(ResultCache::new(true, 0)),
        Arc::new(AppMetrics::default()),
    );

    let bundle = dispatcher
        .design(concept, ResolutionMode::PreferHardcoded)
        .await
        .unwrap();
    assert_eq!(bundle.source, BundleSource::Hardcoded);
    assert!(bundle.spec.validate().is_ok());
    assert!(!bundle.insights.is_empty());
}

#[tokio::test]
async fn test_metrics_track_dispatch_flow() {
    let metrics = Arc::new(AppMetrics::default());
    let dispatcher = create_dispatcher(
        create_knowledge_facade(),
        None,
        Arc::new(ResultCache::new(true, 0)),
        Arc::clone(&metrics),
    );

    dispatcher
        .design("DNA", ResolutionMode::PreferHardcoded)
        .await
        .unwrap();
    dispatcher
        .design("DNA", ResolutionMode::PreferHardcoded)
        .await
        .unwrap();

    let output = metrics.gather();
    assert!(output.contains("design_requests_total 2"));
    assert!(output.contains("cache_hits_total 1"));
    assert!(output.contains("cache_misses_total 1"));
    assert!(output.contains("hardcoded_served_total 1"));
}
