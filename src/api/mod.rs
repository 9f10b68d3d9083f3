//! API 模块
//!
//! 提供 REST API 支持。

#[cfg(test)]
mod api_tests;
pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::error::AppError;
use axum::{Router, extract::State, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// 记录请求指标的中间件
async fn metrics_middleware(
    State(state): State<AppState>,
    req: axum::extract::Request,
    next: middleware::Next,
) -> axum::response::Response {
    let start = std::time::Instant::now();
    state.metrics.record_connection(1);

    let response = next.run(req).await;

    state
        .metrics
        .record_http_request(start.elapsed().as_millis() as u64);
    state.metrics.record_connection(-1);
    if response.status().is_server_error() {
        state.metrics.record_error();
    }

    response
}

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::visualization_routes::create_visualization_router())
        .merge(routes::concept_routes::create_concept_router());

    Router::new()
        .nest("/api/v1", api)
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            metrics_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn initialize_api(app_state: AppState) -> Result<Router, AppError> {
    tracing::info!("Initializing API router...");
    Ok(create_router(app_state))
}
