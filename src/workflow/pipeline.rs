//! 批处理流水线 - 流程层
//!
//! 把各处理阶段串成一条单向流水线：
//!
//! ```text
//! 原始行 → Cleaner → Segmenter(一次分割 → 数字标识拆分) → Classifier
//!        → (逐条) EntityExtractor + Summarizer → DailyDigest
//! ```
//!
//! 前三个阶段是纯函数，由 `run_stages` 单独暴露便于测试；
//! 逐条处理按输入顺序串行进行。

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::models::{Category, DailyDigest, NewsItem, Vocabulary};
use crate::services::{Classified, Classifier, Cleaner, EntityExtractor, Segmenter, SummaryStrategy};
use crate::workflow::news_ctx::NewsCtx;
use crate::workflow::news_flow::NewsFlow;

/// 单日新闻处理流水线
pub struct Pipeline {
    cleaner: Cleaner,
    segmenter: Segmenter,
    classifier: Classifier,
    flow: NewsFlow,
}

impl Pipeline {
    /// 按词表构建所有阶段，词表非法时在这里一次性报错
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, ConfigError> {
        Self::with_verbose(vocabulary, false)
    }

    pub fn with_verbose(vocabulary: &Vocabulary, verbose_logging: bool) -> Result<Self, ConfigError> {
        vocabulary.validate()?;

        Ok(Self {
            cleaner: Cleaner::new(vocabulary)?,
            segmenter: Segmenter::new(vocabulary)?,
            classifier: Classifier::new(vocabulary)?,
            flow: NewsFlow::new(EntityExtractor::new(vocabulary), verbose_logging),
        })
    }

    /// 纯文本阶段：清洗 → 分割 → 分类
    pub fn run_stages<S: AsRef<str>>(&self, raw_lines: &[S]) -> Classified {
        let expanded = Cleaner::expand_raw_lines(raw_lines);
        let cleaned = self.cleaner.clean(&expanded);
        debug!("清洗: {} 行 -> {} 行", expanded.len(), cleaned.len());

        let segments = self.segmenter.segment(&cleaned);
        let classified = self.classifier.classify(&segments);
        debug!(
            "分类: 国内 {} 条 / 国际 {} 条",
            classified.domestic.len(),
            classified.international.len()
        );

        classified
    }

    /// 处理一整天的原始文稿
    ///
    /// # 参数
    /// - `date`: 日期（YYYYMMDD）
    /// - `raw_lines`: 当天原始文稿行
    /// - `strategy`: 本次运行选定的摘要策略
    ///
    /// # 返回
    /// 输入为空或没有切出任何新闻时返回空结果
    pub async fn process_batch<S: AsRef<str>>(
        &self,
        date: &str,
        raw_lines: &[S],
        strategy: &SummaryStrategy,
    ) -> DailyDigest {
        let classified = self.run_stages(raw_lines);
        if classified.is_empty() {
            info!("⚠️ {} 没有可处理的新闻", date);
            return DailyDigest::empty(date);
        }

        info!(
            "📋 {} 共 {} 条新闻 (国内 {} / 国际 {})",
            date,
            classified.len(),
            classified.domestic.len(),
            classified.international.len()
        );

        let domestic = self
            .process_group(date, Category::Domestic, &classified.domestic, strategy)
            .await;
        let international = self
            .process_group(date, Category::International, &classified.international, strategy)
            .await;

        DailyDigest {
            date: date.to_string(),
            domestic,
            international,
        }
    }

    async fn process_group(
        &self,
        date: &str,
        category: Category,
        segments: &[String],
        strategy: &SummaryStrategy,
    ) -> Vec<NewsItem> {
        let mut items = Vec::with_capacity(segments.len());
        for (i, segment) in segments.iter().enumerate() {
            let ctx = NewsCtx::new(date, category, i + 1, segments.len());
            items.push(self.flow.run(segment, strategy, &ctx).await);
        }
        items
    }
}
