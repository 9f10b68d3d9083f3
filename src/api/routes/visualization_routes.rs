//! Visualization Routes
//!
//! 定义可视化设计相关的 API 路由。

use crate::api::handlers::visualization_handler::*;
use axum::{Router, routing::post};

use crate::api::app_state::AppState;

/// 创建可视化路由器
pub fn create_visualization_router() -> Router<AppState> {
    Router::new().route("/visualizations/design", post(design_visualization))
}
