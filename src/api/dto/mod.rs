//! DTO 模块

pub mod concept_dto;
pub mod visualization_dto;
