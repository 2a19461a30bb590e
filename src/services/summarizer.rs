//! 新闻摘要 - 处理阶段 5
//!
//! 两种可互换的策略共享同一契约 `text -> Summary`：
//! - `HeuristicSummarizer`：确定性的规则摘要，始终可用
//! - `LlmSummarizer`：调用大模型，任何失败都静默回退到规则摘要
//!
//! 策略在每次运行开始时根据可用性探测选定一次，而不是逐条选择。

use tracing::{info, warn};

use crate::config::Config;
use crate::models::{Category, Summary, SummaryMethod, Vocabulary};
use crate::services::llm_service::LlmSummarizer;

/// 标题最大字符数
pub const TITLE_MAX_CHARS: usize = 20;
/// 摘要最大字符数
pub const SUMMARY_MAX_CHARS: usize = 120;
/// 关键词最多个数
pub const MAX_KEYWORDS: usize = 3;
/// 摘要取前几句
const SUMMARY_SENTENCES: usize = 2;

const SENTENCE_ENDINGS: &[char] = &['。', '！', '？', '；'];

/// 规则摘要器
#[derive(Debug, Clone)]
pub struct HeuristicSummarizer {
    keywords: Vec<String>,
    international_keywords: Vec<String>,
}

impl HeuristicSummarizer {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            keywords: vocabulary.summary_keywords.clone(),
            international_keywords: vocabulary.summary_international_keywords.clone(),
        }
    }

    pub fn summarize(&self, text: &str) -> Summary {
        let normalized = normalize_whitespace(text);

        let lead: String = normalized
            .split(SENTENCE_ENDINGS)
            .take(SUMMARY_SENTENCES)
            .collect();
        let summary = take_chars(&lead, SUMMARY_MAX_CHARS);

        let title = take_chars(&normalized, TITLE_MAX_CHARS).trim().to_string();

        let keywords: Vec<String> = self
            .keywords
            .iter()
            .filter(|keyword| !keyword.is_empty() && text.contains(keyword.as_str()))
            .take(MAX_KEYWORDS)
            .cloned()
            .collect();

        let category = if self
            .international_keywords
            .iter()
            .any(|keyword| !keyword.is_empty() && text.contains(keyword.as_str()))
        {
            Category::International
        } else {
            Category::Domestic
        };

        Summary {
            title,
            summary,
            keywords,
            category,
        }
    }
}

/// 摘要策略
///
/// 只有两种实现，运行开始时选定一次
pub enum SummaryStrategy {
    Heuristic(HeuristicSummarizer),
    Llm(LlmSummarizer),
}

impl SummaryStrategy {
    /// 根据配置和可用性探测选定策略
    pub async fn select(config: &Config, vocabulary: &Vocabulary) -> Self {
        let heuristic = HeuristicSummarizer::new(vocabulary);

        if !config.llm_enabled {
            info!("LLM 已禁用，将使用简化版摘要功能");
            return SummaryStrategy::Heuristic(heuristic);
        }

        let llm = LlmSummarizer::new(config, heuristic.clone());
        match llm.probe().await {
            Ok(()) => {
                info!("🤖 LLM 服务可用，将使用大模型进行摘要 (模型: {})", llm.model_name());
                SummaryStrategy::Llm(llm)
            }
            Err(e) => {
                warn!("⚠️ {}，将使用简化版摘要功能", e);
                SummaryStrategy::Heuristic(heuristic)
            }
        }
    }

    /// 生成摘要，并返回实际使用的方式
    pub async fn summarize(&self, text: &str) -> (Summary, SummaryMethod) {
        match self {
            SummaryStrategy::Heuristic(heuristic) => {
                (heuristic.summarize(text), SummaryMethod::Heuristic)
            }
            SummaryStrategy::Llm(llm) => llm.summarize(text).await,
        }
    }

    /// 本次运行选定的方式
    pub fn method(&self) -> SummaryMethod {
        match self {
            SummaryStrategy::Heuristic(_) => SummaryMethod::Heuristic,
            SummaryStrategy::Llm(_) => SummaryMethod::Llm,
        }
    }
}

/// 去掉首尾空白，把连续空白折叠成一个空格
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 按字符截取前 `max` 个字符
pub(crate) fn take_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristic() -> HeuristicSummarizer {
        HeuristicSummarizer::new(&Vocabulary::default())
    }

    #[test]
    fn test_domestic_example() {
        let summary = heuristic().summarize("国务院总理访问上海。经济发展稳中向好。");
        assert_eq!(summary.category, Category::Domestic);
        assert_eq!(summary.title, "国务院总理访问上海。经济发展稳中向好。");
        assert_eq!(summary.summary, "国务院总理访问上海经济发展稳中向好");
        assert_eq!(summary.keywords, vec!["经济", "发展"]);
    }

    #[test]
    fn test_international_category() {
        let summary = heuristic().summarize("中俄两国外交部长举行会谈。双方就合作交换意见。");
        assert_eq!(summary.category, Category::International);
        assert_eq!(summary.keywords, vec!["合作"]);
    }

    #[test]
    fn test_only_first_two_sentences() {
        let summary = heuristic().summarize("第一句！第二句？第三句；第四句。");
        assert_eq!(summary.summary, "第一句第二句");
    }

    #[test]
    fn test_limits() {
        let long = "经济政治国际国内发展建设".repeat(20);
        let summary = heuristic().summarize(&long);
        assert_eq!(summary.title.chars().count(), TITLE_MAX_CHARS);
        assert_eq!(summary.summary.chars().count(), SUMMARY_MAX_CHARS);
        assert_eq!(summary.keywords, vec!["经济", "政治", "国际"]);
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let summary = heuristic().summarize("  北京\n举行   会议。  ");
        assert_eq!(summary.title, "北京 举行 会议。");
    }

    #[test]
    fn test_empty_text() {
        let summary = heuristic().summarize("");
        assert!(summary.title.is_empty());
        assert!(summary.summary.is_empty());
        assert!(summary.keywords.is_empty());
        assert_eq!(summary.category, Category::Domestic);
    }

    #[tokio::test]
    async fn test_disabled_llm_selects_heuristic() {
        let config = Config {
            llm_enabled: false,
            ..Config::default()
        };
        let strategy = SummaryStrategy::select(&config, &Vocabulary::default()).await;
        assert_eq!(strategy.method(), SummaryMethod::Heuristic);

        let (summary, method) = strategy.summarize("北京举行会议。").await;
        assert_eq!(method, SummaryMethod::Heuristic);
        assert_eq!(summary.keywords, vec!["会议"]);
    }

    #[tokio::test]
    async fn test_unreachable_llm_selects_heuristic() {
        let config = Config {
            llm_api_base_url: "http://127.0.0.1:9/v1".to_string(),
            llm_probe_timeout_secs: 2,
            ..Config::default()
        };
        let strategy = SummaryStrategy::select(&config, &Vocabulary::default()).await;
        assert_eq!(strategy.method(), SummaryMethod::Heuristic);
    }
}
