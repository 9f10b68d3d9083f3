//! 处理器模块

pub mod concept_handler;
pub mod visualization_handler;
