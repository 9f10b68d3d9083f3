//! 概念注册表
//!
//! 注册表在进程启动时由多张领域数据表合并构建，构建完成后只读。
//! 合并顺序即覆盖顺序：后出现的表对同名概念具有更高优先级。

use std::collections::HashMap;

use tracing::{debug, info};

use crate::models::{Complexity, ConceptRecord};

/// 不可变概念注册表
#[derive(Debug)]
pub struct ConceptRegistry {
    records: HashMap<String, ConceptRecord>,
}

impl ConceptRegistry {
    /// 从数据表序列构建注册表（后表覆盖前表的同名概念）
    pub fn build(tables: Vec<Vec<ConceptRecord>>) -> Self {
        let mut records = HashMap::new();
        for table in tables {
            for record in table {
                if records.insert(record.concept.clone(), record).is_some() {
                    debug!("概念记录被后表覆盖");
                }
            }
        }
        info!("概念注册表构建完成，共 {} 条记录", records.len());
        Self { records }
    }

    /// 从内置领域数据表构建注册表
    pub fn from_builtin_tables() -> Self {
        Self::build(super::data::concept_tables())
    }

    /// 概念是否已收录
    pub fn has(&self, concept: &str) -> bool {
        self.records.contains_key(concept)
    }

    /// 精确查找概念记录
    pub fn get(&self, concept: &str) -> Option<&ConceptRecord> {
        self.records.get(concept)
    }

    /// 所有已收录概念名
    pub fn all_concepts(&self) -> Vec<String> {
        let mut concepts: Vec<String> = self.records.keys().cloned().collect();
        concepts.sort();
        concepts
    }

    /// 按领域筛选
    pub fn by_domain(&self, domain: &str) -> Vec<&ConceptRecord> {
        let mut hits: Vec<&ConceptRecord> = self
            .records
            .values()
            .filter(|r| r.domain == domain)
            .collect();
        hits.sort_by(|a, b| a.concept.cmp(&b.concept));
        hits
    }

    /// 按复杂度筛选
    pub fn by_complexity(&self, complexity: Complexity) -> Vec<&ConceptRecord> {
        let mut hits: Vec<&ConceptRecord> = self
            .records
            .values()
            .filter(|r| r.complexity == complexity)
            .collect();
        hits.sort_by(|a, b| a.concept.cmp(&b.concept));
        hits
    }

    /// 关键词搜索
    ///
    /// 对概念名、领域与关键术语做大小写不敏感的子串匹配；
    /// 空白查询返回空结果而不是全量。
    pub fn search(&self, query: &str) -> Vec<&ConceptRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<&ConceptRecord> = self
            .records
            .values()
            .filter(|r| {
                r.concept.to_lowercase().contains(&needle)
                    || r.domain.to_lowercase().contains(&needle)
                    || r.key_terms.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect();
        hits.sort_by(|a, b| a.concept.cmp(&b.concept));
        hits
    }

    /// 收录的概念数量
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(concept: &str, domain: &str, potential: f32) -> ConceptRecord {
        ConceptRecord::new(concept, domain, Complexity::Basic, potential, &[], &["测试"])
    }

    #[test]
    fn test_later_table_wins_on_conflict() {
        let registry = ConceptRegistry::build(vec![
            vec![record("DNA", "旧领域", 0.3)],
            vec![record("DNA", "分子遗传学", 0.9)],
        ]);
        assert_eq!(registry.len(), 1);
        let dna = registry.get("DNA").unwrap();
        assert_eq!(dna.domain, "分子遗传学");
        assert_eq!(dna.visualization_potential, 0.9);
    }

    #[test]
    fn test_builtin_tables_have_core_concepts() {
        let registry = ConceptRegistry::from_builtin_tables();
        for concept in ["DNA", "基因", "孟德尔第一定律", "减数分裂", "哈代-温伯格定律"] {
            assert!(registry.has(concept), "缺少概念: {}", concept);
        }
    }

    #[test]
    fn test_all_concepts_consistent_with_has() {
        let registry = ConceptRegistry::from_builtin_tables();
        for concept in registry.all_concepts() {
            assert!(registry.has(&concept));
            assert!(registry.get(&concept).is_some());
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let registry = ConceptRegistry::from_builtin_tables();
        let upper = registry.search("DNA");
        let lower = registry.search("dna");
        assert!(!upper.is_empty());
        assert_eq!(upper.len(), lower.len());
    }

    #[test]
    fn test_search_blank_query_returns_empty() {
        let registry = ConceptRegistry::from_builtin_tables();
        assert!(registry.search("   ").is_empty());
        assert!(registry.search("").is_empty());
    }

    #[test]
    fn test_filter_by_domain_and_complexity() {
        let registry = ConceptRegistry::from_builtin_tables();

        let molecular = registry.by_domain("分子遗传学");
        assert!(molecular.iter().any(|r| r.concept == "DNA"));
        assert!(molecular.iter().all(|r| r.domain == "分子遗传学"));

        let advanced = registry.by_complexity(Complexity::Advanced);
        assert!(advanced.iter().any(|r| r.concept == "哈代-温伯格定律"));
        assert!(advanced.iter().all(|r| r.complexity == Complexity::Advanced));
    }

    #[test]
    fn test_search_matches_key_terms() {
        let registry = ConceptRegistry::from_builtin_tables();
        let hits = registry.search("配子");
        assert!(hits.iter().any(|r| r.concept == "减数分裂"));
    }
}
