//! 知识门面
//!
//! 聚合概念分析、前置知识树和丰富内容三路查询，
//! 保证任意输入概念都能得到三路齐全的知识包。

use std::sync::Arc;

use tracing::debug;

use crate::models::{ConceptRecord, EnrichmentRecord, PrerequisiteNode};

use super::{ConceptRegistry, EnrichmentResolver, PrerequisiteResolver};

/// 三路齐全的概念知识包
#[derive(Debug, Clone)]
pub struct ConceptBundle {
    pub analysis: ConceptRecord,
    pub prerequisites: PrerequisiteNode,
    pub enrichment: EnrichmentRecord,
}

pub struct KnowledgeFacade {
    registry: Arc<ConceptRegistry>,
    prerequisites: Arc<PrerequisiteResolver>,
    enrichment: Arc<EnrichmentResolver>,
}

impl KnowledgeFacade {
    pub fn new(
        registry: Arc<ConceptRegistry>,
        prerequisites: Arc<PrerequisiteResolver>,
        enrichment: Arc<EnrichmentResolver>,
    ) -> Self {
        Self {
            registry,
            prerequisites,
            enrichment,
        }
    }

    /// 聚合查询：三路内容总是齐全
    ///
    /// 注册表未收录的概念以桩记录补齐分析路，其余两路各自回落默认值。
    pub fn bundle(&self, concept: &str) -> ConceptBundle {
        let analysis = match self.registry.get(concept) {
            Some(record) => record.clone(),
            None => {
                debug!("概念未收录，使用桩分析记录");
                ConceptRecord::stub(concept)
            }
        };
        ConceptBundle {
            analysis,
            prerequisites: self.prerequisites.resolve(concept),
            enrichment: self.enrichment.resolve(concept),
        }
    }

    pub fn registry(&self) -> &ConceptRegistry {
        &self.registry
    }
}

/// 用内置数据表组装知识门面
pub fn create_knowledge_facade() -> Arc<KnowledgeFacade> {
    Arc::new(KnowledgeFacade::new(
        Arc::new(ConceptRegistry::from_builtin_tables()),
        Arc::new(PrerequisiteResolver::from_builtin_table()),
        Arc::new(EnrichmentResolver::from_builtin_table()),
    ))
}
