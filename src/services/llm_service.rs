//! LLM 摘要服务 - 业务能力层
//!
//! 只负责"调用大模型生成摘要"能力，失败时回退到规则摘要
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 兼容 OpenAI API 的服务（默认为本地 Ollama 的 `/v1` 端点）
//! - 单次请求，带超时，不重试

use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use backoff::ExponentialBackoffBuilder;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LlmError;
use crate::models::{Category, Summary, SummaryMethod};
use crate::services::summarizer::{
    take_chars, HeuristicSummarizer, MAX_KEYWORDS, SUMMARY_MAX_CHARS, TITLE_MAX_CHARS,
};

const SYSTEM_MESSAGE: &str = "你是一名央视新闻联播的资深编辑，只输出合法 JSON。";

/// 大模型返回的摘要结构
#[derive(Debug, Deserialize)]
struct RemoteSummary {
    title: String,
    summary: String,
    keywords: Vec<String>,
    category: String,
}

/// LLM 摘要器
///
/// 职责：
/// - 用固定提示词请求与规则摘要相同结构的 JSON
/// - 连接失败、超时、非 JSON 响应一律回退到规则摘要
/// - 调用方只能通过 `SummaryMethod` 看出走了哪条路径
pub struct LlmSummarizer {
    client: Client<OpenAIConfig>,
    model_name: String,
    api_base_url: String,
    api_key: String,
    timeout: Duration,
    probe_timeout: Duration,
    max_input_chars: usize,
    fallback: HeuristicSummarizer,
}

impl LlmSummarizer {
    /// 创建新的 LLM 摘要器
    pub fn new(config: &Config, fallback: HeuristicSummarizer) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        // 客户端默认对 5xx 和 429 指数退避重试，这里只允许一次请求
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Self {
            client: Client::with_config(openai_config).with_backoff(no_retry),
            model_name: config.llm_model_name.clone(),
            api_base_url: config.llm_api_base_url.clone(),
            api_key: config.llm_api_key.clone(),
            timeout: Duration::from_secs(config.llm_timeout_secs),
            probe_timeout: Duration::from_secs(config.llm_probe_timeout_secs),
            max_input_chars: config.llm_max_input_chars,
            fallback,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// 可用性探测：请求一次 `{base}/models`
    pub async fn probe(&self) -> Result<(), LlmError> {
        let endpoint = format!("{}/models", self.api_base_url.trim_end_matches('/'));
        let unavailable = |reason: String| LlmError::Unavailable {
            endpoint: endpoint.clone(),
            reason,
        };

        let client = reqwest::Client::builder()
            .timeout(self.probe_timeout)
            .build()
            .map_err(|e| unavailable(e.to_string()))?;

        let response = client
            .get(&endpoint)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        if response.status().is_success() {
            debug!("LLM 探测成功: {}", endpoint);
            Ok(())
        } else {
            Err(unavailable(format!("HTTP {}", response.status())))
        }
    }

    /// 生成摘要，失败时静默回退
    pub async fn summarize(&self, text: &str) -> (Summary, SummaryMethod) {
        match self.summarize_remote(text).await {
            Ok(summary) => (summary, SummaryMethod::Llm),
            Err(e) => {
                warn!("LLM 摘要失败，回退到简化版摘要: {}", e);
                (self.fallback.summarize(text), SummaryMethod::Heuristic)
            }
        }
    }

    /// 单次远程调用，带超时
    pub async fn summarize_remote(&self, text: &str) -> Result<Summary, LlmError> {
        let input = take_chars(text, self.max_input_chars);
        let prompt = build_prompt(&input);

        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("提示词长度: {} 字符", prompt.chars().count());

        let build_failed = |source| LlmError::RequestBuildFailed {
            model: self.model_name.clone(),
            source,
        };

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(SYSTEM_MESSAGE)
            .build()
            .map_err(build_failed)?;
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(build_failed)?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_msg),
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .temperature(0.1)
            .max_tokens(200u32)
            .build()
            .map_err(build_failed)?;

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| LlmError::Timeout {
                model: self.model_name.clone(),
                timeout_secs: self.timeout.as_secs(),
            })?
            .map_err(|e| LlmError::ApiCallFailed {
                model: self.model_name.clone(),
                source: e,
            })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| LlmError::EmptyContent {
                model: self.model_name.clone(),
            })?;

        debug!("LLM API 调用成功");

        parse_summary_response(&content)
    }
}

/// 固定提示词模板
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"你是一名央视新闻联播的资深编辑，任务是对下面这段新闻进行「分类 + 摘要 + 关键词」抽取。
输出必须是一段 **合法 JSON**，格式如下（不要添加任何代码块标记）：
{{
  "title": "10字以内",
  "summary": "50字以内",
  "keywords": ["kw1","kw2","kw3"],
  "category": "domestic" 或 "international"
}}
新闻原文：
{}
"#,
        text
    )
}

/// 解析大模型响应
///
/// 去掉代码块标记后必须是符合摘要结构的 JSON 对象；超长字段按摘要上限截断。
pub fn parse_summary_response(content: &str) -> Result<Summary, LlmError> {
    let cleaned = content.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let remote: RemoteSummary =
        serde_json::from_str(cleaned).map_err(|e| LlmError::InvalidJson {
            response: cleaned.to_string(),
            source: e,
        })?;

    let category = Category::from_label(&remote.category).ok_or_else(|| LlmError::SchemaMismatch {
        reason: format!("未知类别 '{}'", remote.category),
    })?;

    let title = take_chars(remote.title.trim(), TITLE_MAX_CHARS);
    if title.is_empty() {
        return Err(LlmError::SchemaMismatch {
            reason: "标题为空".to_string(),
        });
    }

    Ok(Summary {
        title,
        summary: take_chars(remote.summary.trim(), SUMMARY_MAX_CHARS),
        keywords: remote
            .keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .take(MAX_KEYWORDS)
            .collect(),
        category,
    })
}
