//! 前置知识解析器
//!
//! 查找概念的前置知识树；数据表中没有的概念回落到默认树，
//! 调用方因此永远拿到一棵非空的树。

use std::collections::HashMap;

use tracing::debug;

use crate::models::PrerequisiteNode;

#[derive(Debug)]
pub struct PrerequisiteResolver {
    trees: HashMap<String, PrerequisiteNode>,
}

impl PrerequisiteResolver {
    pub fn new(trees: HashMap<String, PrerequisiteNode>) -> Self {
        Self { trees }
    }

    /// 从内置数据表构建
    pub fn from_builtin_table() -> Self {
        Self::new(super::data::prerequisites::table())
    }

    /// 解析概念的前置知识树（总是返回一棵树）
    pub fn resolve(&self, concept: &str) -> PrerequisiteNode {
        match self.trees.get(concept) {
            Some(tree) => tree.clone(),
            None => {
                debug!("概念无前置树记录，使用默认树");
                PrerequisiteNode::foundation_default()
            }
        }
    }

    /// 概念是否有专门维护的前置树
    pub fn has_curated_tree(&self, concept: &str) -> bool {
        self.trees.contains_key(concept)
    }
}
