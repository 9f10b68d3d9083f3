//! 概念 DTO
//!
//! 定义概念查询相关的请求和响应数据结构。

use serde::{Deserialize, Serialize};

use crate::models::{ConceptRecord, EnrichmentRecord, GraphData, PrerequisiteNode};

/// 概念搜索参数
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// 搜索查询
    pub q: Option<String>,
}

/// 概念列表响应
#[derive(Debug, Serialize)]
pub struct ConceptListResponse {
    /// 概念记录列表
    pub concepts: Vec<ConceptRecord>,
    /// 总数
    pub total: usize,
}

/// 概念详情响应（三路内容总是齐全）
#[derive(Debug, Serialize)]
pub struct ConceptDetailResponse {
    /// 概念名称
    pub concept: String,
    /// 是否收录在注册表中
    pub curated: bool,
    /// 概念分析
    pub analysis: ConceptRecord,
    /// 前置知识树
    pub prerequisites: PrerequisiteNode,
    /// 丰富内容
    pub enrichment: EnrichmentRecord,
}

/// 知识图谱响应
#[derive(Debug, Serialize)]
pub struct GraphResponse {
    /// 概念名称
    pub concept: String,
    /// 图数据
    pub graph: GraphData,
}
