use genoviz::api::{self, app_state::AppState};
use genoviz::config::loader::ConfigLoader;
use genoviz::knowledge::create_knowledge_facade;
use genoviz::observability::{
    AppMetrics, ObservabilityState, create_observability_router, init_tracing,
};
use genoviz::provider::create_generative_provider;
use genoviz::services::{ResultCache, create_dispatcher};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;
    init_tracing(&config.logging);

    info!("Starting GenoViz...");
    info!("Configuration loaded successfully");

    let facade = create_knowledge_facade();
    info!(
        "Knowledge facade initialized: {} concepts loaded",
        facade.registry().len()
    );

    let provider = create_generative_provider(&config.provider)?;
    match &provider {
        Some(p) => info!(
            "Generative provider initialized: {} ({})",
            p.name(),
            config.provider.model_name
        ),
        None => info!("Generative provider disabled, curated templates only"),
    }

    let cache = Arc::new(ResultCache::new(
        config.cache.enabled,
        config.cache.max_entries,
    ));
    info!(
        "Result cache initialized (enabled: {}, max_entries: {})",
        config.cache.enabled, config.cache.max_entries
    );

    let metrics = Arc::new(AppMetrics::default());
    let provider_enabled = provider.is_some();
    let dispatcher = create_dispatcher(
        Arc::clone(&facade),
        provider,
        cache,
        Arc::clone(&metrics),
    );
    info!("Visualization dispatcher initialized");

    let app_state = AppState::new(dispatcher, Arc::clone(&facade), Arc::clone(&metrics));
    info!("Application state created");

    // 创建可观测性状态并集成路由
    let observability_state = Arc::new(ObservabilityState::new(
        Arc::clone(&metrics),
        env!("CARGO_PKG_VERSION").to_string(),
        facade.registry().len(),
        provider_enabled,
    ));
    let api_router = api::initialize_api(app_state).await?;
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
