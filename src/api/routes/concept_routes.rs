//! Concept Routes
//!
//! 定义概念查询相关的 API 路由。

use crate::api::handlers::concept_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建概念路由器
pub fn create_concept_router() -> Router<AppState> {
    Router::new()
        .route("/concepts/hardcoded", get(list_hardcoded_concepts))
        .route("/concepts/search", get(search_concepts))
        .route("/concepts/:concept", get(get_concept))
        .route("/concepts/:concept/graph", get(get_concept_graph))
}
