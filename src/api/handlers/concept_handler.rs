use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::concept_dto::*},
    error::AppError,
};

/// 精选概念目录（带分析记录）
pub async fn list_hardcoded_concepts(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let concepts = state.dispatcher.hardcoded_catalog();
    let total = concepts.len();
    Ok(Json(ConceptListResponse { concepts, total }))
}

/// 搜索概念
pub async fn search_concepts(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.q.unwrap_or_default();
    debug!("Searching concepts, query: {}", query);

    if query.trim().is_empty() {
        return Err(AppError::Validation("q 不能为空".to_string()));
    }

    state.metrics.record_search();
    let concepts: Vec<_> = state
        .facade
        .registry()
        .search(&query)
        .into_iter()
        .cloned()
        .collect();
    let total = concepts.len();

    Ok(Json(ConceptListResponse { concepts, total }))
}

/// 概念详情（三路内容总是齐全）
pub async fn get_concept(
    State(state): State<AppState>,
    Path(concept): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let concept = concept.trim().to_string();
    if concept.is_empty() {
        return Err(AppError::Validation("concept 不能为空".to_string()));
    }
    debug!("Getting concept detail: {}", concept);

    let curated = state.facade.registry().has(&concept);
    let bundle = state.facade.bundle(&concept);

    Ok(Json(ConceptDetailResponse {
        concept,
        curated,
        analysis: bundle.analysis,
        prerequisites: bundle.prerequisites,
        enrichment: bundle.enrichment,
    }))
}

/// 概念的前置知识图数据
pub async fn get_concept_graph(
    State(state): State<AppState>,
    Path(concept): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting concept graph: {}", concept);
    let graph = state.dispatcher.concept_graph(&concept)?;

    Ok(Json(GraphResponse {
        concept: concept.trim().to_string(),
        graph,
    }))
}
