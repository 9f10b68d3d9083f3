use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::visualization_dto::*},
    error::AppError,
    models::ResolutionMode,
};

/// 为概念设计可视化方案
pub async fn design_visualization(
    State(state): State<AppState>,
    Json(request): Json<DesignRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mode = request.mode.unwrap_or(ResolutionMode::PreferHardcoded);
    debug!(
        "Designing visualization for concept: {}, mode: {}",
        request.concept,
        mode.as_str()
    );

    let start_time = std::time::Instant::now();
    let bundle = state.dispatcher.design(&request.concept, mode).await?;
    let took_ms = start_time.elapsed().as_millis() as u64;

    Ok(Json(DesignResponse::from_bundle(&bundle, took_ms)))
}
