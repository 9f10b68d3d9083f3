//! 生成式可视化后端
//!
//! 硬编码模板未覆盖的概念走这条慢路径：把知识包交给大模型，
//! 换回一份结构化的可视化方案。模型输出是不可信输入，解析失败
//! 按后端失败处理，绝不把半成品交给渲染器。

pub mod http;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::{AppError, Result};
use crate::knowledge::ConceptBundle;
use crate::models::{Insight, VisualizationSpec};

pub use http::HttpGenerativeProvider;

/// 生成式路径的结构化产出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerativeOutput {
    pub visualization: VisualizationSpec,
    #[serde(default)]
    pub insights: Vec<Insight>,
}

/// 生成式可视化后端
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// 基于知识包生成可视化方案
    async fn generate(&self, bundle: &ConceptBundle) -> Result<GenerativeOutput>;

    /// 后端名称（日志与指标用）
    fn name(&self) -> &str;
}

static FENCED_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)```").expect("内置正则应当合法"));

/// 从模型回复中提取结构化产出
///
/// 模型可能把 JSON 包在 Markdown 代码块里，也可能直接输出裸 JSON；
/// 两种形式都接受，其余一律视为后端输出不合法。
pub fn parse_generative_output(content: &str) -> Result<GenerativeOutput> {
    let candidate = match FENCED_JSON.captures(content) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(content),
        None => content,
    };

    let output: GenerativeOutput = serde_json::from_str(candidate.trim()).map_err(|e| {
        AppError::ProviderOutput(format!("模型输出不是合法的可视化方案 JSON: {}", e))
    })?;

    output
        .visualization
        .validate()
        .map_err(AppError::ProviderOutput)?;

    Ok(output)
}

/// 按配置组装生成式后端
///
/// `backend = "disabled"` 返回 `None`，此时生成式路径不可用，
/// 调度器会对需要它的请求返回后端错误。
pub fn create_generative_provider(
    config: &ProviderConfig,
) -> Result<Option<std::sync::Arc<dyn GenerativeProvider>>> {
    match config.backend.as_str() {
        "http" => {
            let provider = HttpGenerativeProvider::new(config)?;
            Ok(Some(std::sync::Arc::new(provider)))
        }
        "disabled" => Ok(None),
        other => Err(AppError::Config(format!(
            "未知的生成式后端类型: {}",
            other
        ))),
    }
}
