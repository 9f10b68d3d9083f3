//! 可视化模型
//!
//! `VisualizationBundle` 是整个子系统对外返回并缓存的单元。
//! `VisualizationType` 是封闭的标签枚举：每个已知渲染器一个变体，
//! 未收录的类型落到 `Unknown(原始标签)`，由前端渲染注册表降级到
//! 通用渲染器而不是崩溃。

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 可视化类型标签
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VisualizationType {
    KnowledgeGraph,
    Animation,
    Chart,
    Diagram,
    PunnettSquare,
    InheritancePath,
    PedigreeChart,
    ProbabilityDistribution,
    /// 未知类型，保留原始标签以便前端降级渲染
    Unknown(String),
}

impl VisualizationType {
    /// 原始线上标签
    pub fn as_tag(&self) -> &str {
        match self {
            VisualizationType::KnowledgeGraph => "knowledge_graph",
            VisualizationType::Animation => "animation",
            VisualizationType::Chart => "chart",
            VisualizationType::Diagram => "diagram",
            VisualizationType::PunnettSquare => "punnett_square",
            VisualizationType::InheritancePath => "inheritance_path",
            VisualizationType::PedigreeChart => "pedigree_chart",
            VisualizationType::ProbabilityDistribution => "probability_distribution",
            VisualizationType::Unknown(raw) => raw,
        }
    }

    /// 从线上标签解析，未知标签保留原样
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "knowledge_graph" => VisualizationType::KnowledgeGraph,
            "animation" => VisualizationType::Animation,
            "chart" => VisualizationType::Chart,
            "diagram" => VisualizationType::Diagram,
            "punnett_square" => VisualizationType::PunnettSquare,
            "inheritance_path" => VisualizationType::InheritancePath,
            "pedigree_chart" => VisualizationType::PedigreeChart,
            "probability_distribution" => VisualizationType::ProbabilityDistribution,
            other => VisualizationType::Unknown(other.to_string()),
        }
    }

    /// 是否需要前置知识图数据（nodes/links）
    pub fn wants_graph_data(&self) -> bool {
        matches!(self, VisualizationType::KnowledgeGraph)
    }
}

impl Serialize for VisualizationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for VisualizationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(VisualizationType::from_tag(&tag))
    }
}

/// 布局方式（适用于知识图谱类可视化）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Force,
    Hierarchical,
    Circular,
    Grid,
}

/// 支持的交互方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interaction {
    Click,
    Hover,
    Zoom,
    Drag,
    Select,
}

/// 动画配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// 时长（毫秒）
    pub duration: u64,
    /// 缓动函数
    pub easing: String,
    /// 是否自动播放
    pub autoplay: bool,
}

/// 可视化方案
///
/// 渲染器专属的数据载荷（Punnett 方格、遗传路径等）保持无模式 JSON，
/// 由 `type` 对应的前端渲染器自行解释。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationSpec {
    /// 可视化类型
    #[serde(rename = "type")]
    pub viz_type: VisualizationType,
    /// 标题
    pub title: String,
    /// 这个可视化要说明什么问题
    pub description: String,
    /// 需要展示的元素
    pub elements: Vec<String>,
    /// 颜色方案（元素名 -> 颜色值）
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    /// 布局方式
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// 支持的交互
    #[serde(default)]
    pub interactions: Vec<Interaction>,
    /// 注释说明
    #[serde(default)]
    pub annotations: Vec<String>,
    /// 动画配置
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationConfig>,
    /// 渲染器专属数据
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl VisualizationSpec {
    /// 构建最小可用方案
    pub fn new(viz_type: VisualizationType, title: &str, description: &str) -> Self {
        Self {
            viz_type,
            title: title.to_string(),
            description: description.to_string(),
            elements: Vec::new(),
            colors: BTreeMap::new(),
            layout: None,
            interactions: Vec::new(),
            annotations: Vec::new(),
            animation: None,
            data: None,
        }
    }

    /// 校验必填字段是否齐全
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title 为空".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("description 为空".to_string());
        }
        Ok(())
    }
}

/// 理解提示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// 关键知识点
    pub key_point: String,
    /// 如何通过可视化理解这个点
    pub visual_connection: String,
    /// 学生常见的错误理解
    pub common_mistake: String,
    /// 帮助学生自检的问题
    pub check_question: String,
}

/// 知识图谱节点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub level: u32,
    pub is_foundation: bool,
}

/// 知识图谱边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

/// 知识图谱数据（nodes/links 布局输入）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// 解析模式（缓存键的一部分）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// 优先走硬编码路径，未收录再回退生成式
    PreferHardcoded,
    /// 强制走生成式路径
    ForceGenerative,
}

impl ResolutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMode::PreferHardcoded => "prefer_hardcoded",
            ResolutionMode::ForceGenerative => "force_generative",
        }
    }
}

/// 方案来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleSource {
    /// 硬编码快路径（精选内容，确定性）
    Hardcoded,
    /// 生成式慢路径（长尾覆盖）
    Generated,
}

/// 可视化结果包：缓存与返回给调用方的单元
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationBundle {
    /// 概念名称
    pub concept: String,
    /// 请求的解析模式
    pub mode: ResolutionMode,
    /// 方案来源
    pub source: BundleSource,
    /// 可视化方案
    pub spec: VisualizationSpec,
    /// 理解提示
    #[serde(default)]
    pub insights: Vec<Insight>,
    /// 知识图谱数据（仅 knowledge_graph 类方案携带）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphData>,
}

impl VisualizationBundle {
    /// 读取端校验：损坏的缓存条目应当快速失败，而不是流到渲染器
    pub fn validate(&self) -> Result<(), String> {
        if self.concept.trim().is_empty() {
            return Err("concept 为空".to_string());
        }
        self.spec.validate()
    }
}
