//! GenoViz - 遗传学教学可视化调度服务
//!
//! 为遗传学教育平台提供概念知识解析与可视化方案调度能力：
//! 精选概念走硬编码模板快路径，长尾概念回退到生成式后端，
//! 完整结果经单飞缓存返回。

pub mod api;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod models;
pub mod observability;
pub mod provider;
pub mod services;
