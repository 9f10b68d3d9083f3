//! OpenAI 兼容接口的生成式后端实现

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::{AppError, Result};
use crate::knowledge::ConceptBundle;

use super::{parse_generative_output, GenerativeOutput, GenerativeProvider};

/// 通过 HTTP 调用 OpenAI 兼容 chat 接口的后端
pub struct HttpGenerativeProvider {
    client: reqwest::Client,
    base_url: String,
    model_name: String,
    api_key: String,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl HttpGenerativeProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model_name: config.model_name.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
        })
    }

    /// 把知识包拼装成提示词
    ///
    /// 三路内容全部进入上下文，模型只负责在已有知识的基础上
    /// 设计可视化，而不是重新发明知识。
    fn build_prompt(bundle: &ConceptBundle) -> String {
        let analysis = &bundle.analysis;
        let mut prompt = format!(
            "你是遗传学教学可视化设计师。请为概念「{}」设计一个教学可视化方案。\n\n\
             ## 概念分析\n\
             - 领域：{}\n\
             - 复杂度：{}\n\
             - 建议的可视化方式：{}\n\
             - 关键术语：{}\n",
            analysis.concept,
            analysis.domain,
            analysis.complexity.as_str(),
            analysis.suggested_visualizations.join("、"),
            analysis.key_terms.join("、"),
        );

        prompt.push_str(&format!(
            "\n## 知识背景\n定义：{}\n",
            bundle.enrichment.definition
        ));
        for principle in &bundle.enrichment.principles {
            prompt.push_str(&format!("- {}\n", principle));
        }
        if !bundle.enrichment.misconceptions.is_empty() {
            prompt.push_str("\n学生常见误区：\n");
            for misconception in &bundle.enrichment.misconceptions {
                prompt.push_str(&format!("- {}\n", misconception));
            }
        }

        prompt.push_str(&format!(
            "\n前置概念：{}\n",
            collect_prerequisite_names(&bundle.prerequisites).join("、")
        ));

        prompt.push_str(
            "\n## 输出要求\n\
             只输出一个 JSON 对象，不要输出其他解释文字，结构如下：\n\
             {\n\
               \"visualization\": {\n\
                 \"type\": \"knowledge_graph | animation | chart | diagram | punnett_square | inheritance_path | pedigree_chart | probability_distribution\",\n\
                 \"title\": \"标题\",\n\
                 \"description\": \"这个可视化要说明什么问题\",\n\
                 \"elements\": [\"需要展示的元素\"],\n\
                 \"colors\": {\"元素名\": \"#RRGGBB\"},\n\
                 \"annotations\": [\"注释说明\"]\n\
               },\n\
               \"insights\": [{\n\
                 \"key_point\": \"关键知识点\",\n\
                 \"visual_connection\": \"如何通过可视化理解这个点\",\n\
                 \"common_mistake\": \"学生常见的错误理解\",\n\
                 \"check_question\": \"帮助学生自检的问题\"\n\
               }]\n\
             }\n",
        );

        prompt
    }
}

fn collect_prerequisite_names(node: &crate::models::PrerequisiteNode) -> Vec<String> {
    let mut names = vec![node.concept.clone()];
    for child in &node.prerequisites {
        names.extend(collect_prerequisite_names(child));
    }
    names
}

#[async_trait]
impl GenerativeProvider for HttpGenerativeProvider {
    async fn generate(&self, bundle: &ConceptBundle) -> Result<GenerativeOutput> {
        let prompt = Self::build_prompt(bundle);
        debug!("生成式后端请求，提示词长度 {}", prompt.len());

        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&serde_json::json!({
                "model": self.model_name,
                "messages": [
                    { "role": "user", "content": prompt }
                ],
                "temperature": self.temperature
            }));
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Provider(format!(
                "生成式后端返回 {}: {}",
                status, error_text
            )));
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| AppError::ProviderOutput("回复中没有 choices".to_string()))?;

        parse_generative_output(content)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::create_knowledge_facade;

    #[test]
    fn test_prompt_carries_bundle_content() {
        let facade = create_knowledge_facade();
        let bundle = facade.bundle("哈代-温伯格定律");
        let prompt = HttpGenerativeProvider::build_prompt(&bundle);
        assert!(prompt.contains("哈代-温伯格定律"));
        assert!(prompt.contains("群体遗传学"));
        assert!(prompt.contains("基因频率"));
        assert!(prompt.contains("\"visualization\""));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ProviderConfig {
            backend: "http".to_string(),
            base_url: "http://localhost:11434/v1/".to_string(),
            ..ProviderConfig::default()
        };
        let provider = HttpGenerativeProvider::new(&config).unwrap();
        assert_eq!(provider.base_url, "http://localhost:11434/v1");
    }
}
