//! 丰富内容解析器
//!
//! 为概念提供定义、原理、公式、例题与易错点；
//! 数据表未覆盖的概念回落到最小默认记录。

use std::collections::HashMap;

use tracing::debug;

use crate::models::EnrichmentRecord;

#[derive(Debug)]
pub struct EnrichmentResolver {
    records: HashMap<String, EnrichmentRecord>,
}

impl EnrichmentResolver {
    pub fn new(records: HashMap<String, EnrichmentRecord>) -> Self {
        Self { records }
    }

    /// 从内置数据表构建
    pub fn from_builtin_table() -> Self {
        Self::new(super::data::enrichment::table())
    }

    /// 解析概念的丰富内容（总是返回一条记录）
    pub fn resolve(&self, concept: &str) -> EnrichmentRecord {
        match self.records.get(concept) {
            Some(record) => record.clone(),
            None => {
                debug!("概念无丰富内容记录，使用默认记录");
                EnrichmentRecord::default_for(concept)
            }
        }
    }

    /// 概念是否有专门维护的丰富内容
    pub fn has_curated_record(&self, concept: &str) -> bool {
        self.records.contains_key(concept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_concept() {
        let resolver = EnrichmentResolver::from_builtin_table();
        let record = resolver.resolve("哈代-温伯格定律");
        assert!(!record.principles.is_empty());
        assert_eq!(record.formulas.len(), 2);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_default() {
        let resolver = EnrichmentResolver::from_builtin_table();
        let record = resolver.resolve("表观遗传钟");
        assert_eq!(record.concept, "表观遗传钟");
        assert!(record.definition.contains("表观遗传钟"));
        assert!(record.principles.is_empty());
        assert!(record.visualization.validate().is_ok());
    }
}
