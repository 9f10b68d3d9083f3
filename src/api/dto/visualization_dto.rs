//! 可视化 DTO
//!
//! 定义可视化设计相关的请求和响应数据结构。

use serde::{Deserialize, Serialize};

use crate::models::{
    BundleSource, GraphData, Insight, ResolutionMode, VisualizationBundle, VisualizationSpec,
};

/// 可视化设计请求
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DesignRequest {
    /// 概念名称
    pub concept: String,
    /// 解析模式（缺省为优先硬编码）
    pub mode: Option<ResolutionMode>,
}

impl Default for DesignRequest {
    fn default() -> Self {
        Self {
            concept: String::new(),
            mode: None,
        }
    }
}

/// 可视化设计响应
#[derive(Debug, Serialize)]
pub struct DesignResponse {
    /// 概念名称
    pub concept: String,
    /// 实际使用的解析模式
    pub mode: ResolutionMode,
    /// 方案来源
    pub source: BundleSource,
    /// 可视化方案
    pub visualization: VisualizationSpec,
    /// 理解提示
    pub insights: Vec<Insight>,
    /// 知识图谱数据（仅图谱类方案携带）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphData>,
    /// 耗时（毫秒）
    pub took_ms: u64,
}

impl DesignResponse {
    pub fn from_bundle(bundle: &VisualizationBundle, took_ms: u64) -> Self {
        Self {
            concept: bundle.concept.clone(),
            mode: bundle.mode,
            source: bundle.source,
            visualization: bundle.spec.clone(),
            insights: bundle.insights.clone(),
            graph: bundle.graph.clone(),
            took_ms,
        }
    }
}
