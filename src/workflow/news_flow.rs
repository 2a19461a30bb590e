//! 单条新闻处理流程 - 流程层
//!
//! 核心职责：定义"一条新闻"的完整处理流程
//!
//! 流程顺序：
//! 1. 实体抽取（纯函数，不会失败）
//! 2. 摘要生成（大模型失败时已在策略内部回退）

use tracing::{debug, info};

use crate::models::NewsItem;
use crate::services::{EntityExtractor, SummaryStrategy};
use crate::utils::logging::truncate_text;
use crate::workflow::news_ctx::NewsCtx;

/// 单条新闻处理流程
///
/// - 不持有摘要策略，由调用方在整批开始前选定后传入
/// - 只依赖业务能力（services）
pub struct NewsFlow {
    extractor: EntityExtractor,
    verbose_logging: bool,
}

impl NewsFlow {
    pub fn new(extractor: EntityExtractor, verbose_logging: bool) -> Self {
        Self {
            extractor,
            verbose_logging,
        }
    }

    /// 处理一条新闻
    ///
    /// # 参数
    /// - `text`: 分割后的新闻段落
    /// - `strategy`: 本次运行选定的摘要策略
    /// - `ctx`: 日志上下文
    ///
    /// # 返回
    /// 返回带实体和摘要的 `NewsItem`
    pub async fn run(&self, text: &str, strategy: &SummaryStrategy, ctx: &NewsCtx) -> NewsItem {
        if self.verbose_logging {
            info!("{} 📰 {}", ctx, truncate_text(text, 50));
        }

        let entities = self.extractor.extract(text);
        debug!(
            "{} 实体: 地点 {} / 人物 {} / 组织 {}",
            ctx,
            entities.locations.len(),
            entities.persons.len(),
            entities.organizations.len()
        );

        let (summary, summary_method) = strategy.summarize(text).await;
        debug!("{} ✓ 摘要完成 ({:?}): {}", ctx, summary_method, summary.title);

        NewsItem {
            text: text.to_string(),
            entities,
            summary,
            summary_method,
        }
    }
}
