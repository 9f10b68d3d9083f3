//! 路由模块

pub mod concept_routes;
pub mod visualization_routes;
