//! 前置知识树模型

use serde::{Deserialize, Serialize};

/// 前置知识节点（递归树）
///
/// 不变式：`is_foundation == true` 的节点 `prerequisites` 必为空。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrerequisiteNode {
    /// 概念名称
    pub concept: String,
    /// 是否为基础概念（叶节点）
    pub is_foundation: bool,
    /// 距根节点的层级（≥1）
    pub level: u32,
    /// 前置概念列表
    pub prerequisites: Vec<PrerequisiteNode>,
}

impl PrerequisiteNode {
    /// 构建中间节点
    pub fn new(concept: &str, level: u32, prerequisites: Vec<PrerequisiteNode>) -> Self {
        Self {
            concept: concept.to_string(),
            is_foundation: false,
            level: level.max(1),
            prerequisites,
        }
    }

    /// 构建基础（叶）节点
    pub fn foundation(concept: &str, level: u32) -> Self {
        Self {
            concept: concept.to_string(),
            is_foundation: true,
            level: level.max(1),
            prerequisites: Vec::new(),
        }
    }

    /// 未知概念的默认前置树：单个基础节点 "基础遗传学"
    pub fn foundation_default() -> Self {
        Self::foundation("基础遗传学", 1)
    }

    /// 树中节点总数（含自身）
    pub fn node_count(&self) -> usize {
        1 + self
            .prerequisites
            .iter()
            .map(PrerequisiteNode::node_count)
            .sum::<usize>()
    }

    /// 校验基础节点不变式
    pub fn is_well_formed(&self) -> bool {
        if self.is_foundation && !self.prerequisites.is_empty() {
            return false;
        }
        if self.level < 1 {
            return false;
        }
        self.prerequisites.iter().all(PrerequisiteNode::is_well_formed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foundation_default() {
        let node = PrerequisiteNode::foundation_default();
        assert_eq!(node.concept, "基础遗传学");
        assert!(node.is_foundation);
        assert_eq!(node.level, 1);
        assert!(node.prerequisites.is_empty());
    }

    #[test]
    fn test_node_count() {
        let tree = PrerequisiteNode::new(
            "基因",
            1,
            vec![
                PrerequisiteNode::foundation("DNA", 2),
                PrerequisiteNode::foundation("染色体", 2),
            ],
        );
        assert_eq!(tree.node_count(), 3);
        assert!(tree.is_well_formed());
    }

    #[test]
    fn test_level_floor_is_one() {
        let node = PrerequisiteNode::foundation("DNA", 0);
        assert_eq!(node.level, 1);
    }
}
