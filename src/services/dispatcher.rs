//! 可视化调度器
//!
//! 两级调度：精选概念直接走硬编码模板（快、确定、零外部调用），
//! 其余概念回退到生成式后端。完整结果包经由结果缓存返回，
//! 同一 (概念, 模式) 只计算一次。

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::knowledge::{data::hardcoded_viz, ConceptBundle, KnowledgeFacade};
use crate::models::{
    BundleSource, ConceptRecord, GraphData, GraphLink, GraphNode, Insight, PrerequisiteNode,
    ResolutionMode, VisualizationBundle,
};
use crate::observability::AppMetrics;
use crate::provider::GenerativeProvider;

use super::result_cache::{CacheKey, ResultCache};

pub struct VisualizationDispatcher {
    facade: Arc<KnowledgeFacade>,
    provider: Option<Arc<dyn GenerativeProvider>>,
    cache: Arc<ResultCache>,
    metrics: Arc<AppMetrics>,
}

impl VisualizationDispatcher {
    pub fn new(
        facade: Arc<KnowledgeFacade>,
        provider: Option<Arc<dyn GenerativeProvider>>,
        cache: Arc<ResultCache>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            facade,
            provider,
            cache,
            metrics,
        }
    }

    /// 为概念设计可视化方案
    ///
    /// 入口先做输入校验，再经缓存走两级调度。失败直接向上传播，
    /// 不做自动重试；调用方重试会触发一次全新的计算。
    pub async fn design(
        &self,
        concept: &str,
        mode: ResolutionMode,
    ) -> Result<Arc<VisualizationBundle>> {
        let concept = concept.trim();
        if concept.is_empty() {
            return Err(AppError::Validation("concept 不能为空".to_string()));
        }

        self.metrics.record_design_request();

        let key = CacheKey::new(concept, mode);
        let (bundle, hit) = self
            .cache
            .get_or_compute(key, || self.resolve(concept, mode))
            .await?;
        self.metrics.record_cache(hit);
        if !hit {
            self.metrics
                .record_source(bundle.source == BundleSource::Hardcoded);
        }

        info!(
            concept = concept,
            mode = mode.as_str(),
            cache_hit = hit,
            "可视化设计完成"
        );
        Ok(bundle)
    }

    async fn resolve(&self, concept: &str, mode: ResolutionMode) -> Result<VisualizationBundle> {
        match mode {
            ResolutionMode::PreferHardcoded => {
                if let Some(template) = hardcoded_viz::get(concept) {
                    return Ok(self.build_hardcoded(concept, mode, template.clone()));
                }
                self.build_generated(concept, mode).await
            }
            ResolutionMode::ForceGenerative => self.build_generated(concept, mode).await,
        }
    }

    fn build_hardcoded(
        &self,
        concept: &str,
        mode: ResolutionMode,
        spec: crate::models::VisualizationSpec,
    ) -> VisualizationBundle {
        let kb = self.facade.bundle(concept);
        let graph = spec
            .viz_type
            .wants_graph_data()
            .then(|| build_graph(concept, &kb.prerequisites));
        VisualizationBundle {
            concept: concept.to_string(),
            mode,
            source: BundleSource::Hardcoded,
            insights: derive_insights(&kb),
            spec,
            graph,
        }
    }

    async fn build_generated(
        &self,
        concept: &str,
        mode: ResolutionMode,
    ) -> Result<VisualizationBundle> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            AppError::Provider("生成式后端未启用，无法处理未收录概念".to_string())
        })?;

        let kb = self.facade.bundle(concept);
        self.metrics.record_provider_call();
        let output = match provider.generate(&kb).await {
            Ok(output) => output,
            Err(e) => {
                self.metrics.record_provider_failure();
                warn!(concept = concept, "生成式后端失败: {}", e);
                return Err(e);
            }
        };

        let insights = if output.insights.is_empty() {
            derive_insights(&kb)
        } else {
            output.insights
        };
        let graph = output
            .visualization
            .viz_type
            .wants_graph_data()
            .then(|| build_graph(concept, &kb.prerequisites));

        Ok(VisualizationBundle {
            concept: concept.to_string(),
            mode,
            source: BundleSource::Generated,
            spec: output.visualization,
            insights,
            graph,
        })
    }

    /// 精选概念目录（带分析记录）
    pub fn hardcoded_catalog(&self) -> Vec<ConceptRecord> {
        hardcoded_viz::hardcoded_concepts()
            .iter()
            .map(|concept| self.facade.bundle(concept).analysis)
            .collect()
    }

    /// 概念的前置知识图数据
    pub fn concept_graph(&self, concept: &str) -> Result<GraphData> {
        let concept = concept.trim();
        if concept.is_empty() {
            return Err(AppError::Validation("concept 不能为空".to_string()));
        }
        let kb = self.facade.bundle(concept);
        Ok(build_graph(concept, &kb.prerequisites))
    }

    pub fn facade(&self) -> &KnowledgeFacade {
        &self.facade
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.metrics
    }
}

/// 由前置知识树生成知识图谱数据
///
/// 请求的概念本身作为 0 层根节点，树中同名节点只出现一次。
pub fn build_graph(concept: &str, tree: &PrerequisiteNode) -> GraphData {
    let mut data = GraphData::default();
    let mut seen = HashSet::new();

    data.nodes.push(GraphNode {
        id: concept.to_string(),
        label: concept.to_string(),
        level: 0,
        is_foundation: false,
    });
    seen.insert(concept.to_string());

    push_tree(tree, concept, &mut data, &mut seen);
    data
}

fn push_tree(
    node: &PrerequisiteNode,
    parent_id: &str,
    data: &mut GraphData,
    seen: &mut HashSet<String>,
) {
    if seen.insert(node.concept.clone()) {
        data.nodes.push(GraphNode {
            id: node.concept.clone(),
            label: node.concept.clone(),
            level: node.level,
            is_foundation: node.is_foundation,
        });
    }
    data.links.push(GraphLink {
        source: parent_id.to_string(),
        target: node.concept.clone(),
    });
    for child in &node.prerequisites {
        push_tree(child, &node.concept, data, seen);
    }
}

/// 从知识包推导理解提示
///
/// 原理与误区一一对应生成；概念完全未收录时退化为单条通用提示。
fn derive_insights(kb: &ConceptBundle) -> Vec<Insight> {
    let enrichment = &kb.enrichment;
    if enrichment.principles.is_empty() {
        return vec![Insight {
            key_point: format!("{}是{}领域的概念", kb.analysis.concept, kb.analysis.domain),
            visual_connection: "从可视化的整体结构入手，先识别各元素的含义".to_string(),
            common_mistake: "只记结论而不理解概念之间的联系".to_string(),
            check_question: format!("你能说出{}与其前置概念的关系吗？", kb.analysis.concept),
        }];
    }

    enrichment
        .principles
        .iter()
        .enumerate()
        .map(|(i, principle)| Insight {
            key_point: principle.clone(),
            visual_connection: format!(
                "在「{}」中找到与这条原理对应的元素",
                enrichment.visualization.title
            ),
            common_mistake: enrichment
                .misconceptions
                .get(i)
                .cloned()
                .unwrap_or_else(|| "暂无已知误区".to_string()),
            check_question: "结合图示，你能用自己的话复述这条原理吗？".to_string(),
        })
        .collect()
}

/// 组装调度器
pub fn create_dispatcher(
    facade: Arc<KnowledgeFacade>,
    provider: Option<Arc<dyn GenerativeProvider>>,
    cache: Arc<ResultCache>,
    metrics: Arc<AppMetrics>,
) -> Arc<VisualizationDispatcher> {
    Arc::new(VisualizationDispatcher::new(
        facade, provider, cache, metrics,
    ))
}
