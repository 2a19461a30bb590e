//! 单日批处理器 - 编排层
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：加载词表、构建流水线、探测 LLM 并选定摘要策略
//! 2. **加载输入**：读取当天文稿，缺失时回退到前一天
//! 3. **运行流水线**：整批串行处理
//! 4. **保存结果**：写入每个输出目录的 `full_result_{date}.json`
//! 5. **统计输出**：摘要方式统计和最终统计
//!
//! 词表或日期非法在初始化阶段直接报错；单条新闻的 LLM 失败不会传到这里。

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::FileError;
use crate::models::{load_raw_lines, load_vocabulary, DailyDigest};
use crate::services::SummaryStrategy;
use crate::utils::logging::{log_digest_stats, log_startup, print_final_stats};
use crate::workflow::Pipeline;

/// 应用主结构
pub struct App {
    config: Config,
    pipeline: Pipeline,
    strategy: SummaryStrategy,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let vocabulary = load_vocabulary(config.vocabulary_file.as_deref())
            .await
            .context("加载词表失败")?;

        let pipeline = Pipeline::with_verbose(&vocabulary, config.verbose_logging)
            .context("构建处理流水线失败")?;

        let strategy = SummaryStrategy::select(&config, &vocabulary).await;

        Ok(Self {
            config,
            pipeline,
            strategy,
        })
    }

    /// 运行应用主逻辑，返回当天的处理结果
    pub async fn run(&self) -> Result<DailyDigest> {
        let date = self.config.resolve_date().context("处理日期无效")?;

        info!("\n📁 正在加载 {} 的新闻文稿...", date);
        let input = load_raw_lines(&self.config.input_dir, &date).await?;

        if input.lines.is_empty() {
            warn!("⚠️ {} 的文稿为空", input.date);
        } else {
            info!("✓ 读取到 {} 行原始文稿 (日期: {})", input.lines.len(), input.date);
        }

        let digest = self
            .pipeline
            .process_batch(&input.date, &input.lines, &self.strategy)
            .await;

        log_digest_stats(&digest);

        let mut saved_paths = Vec::with_capacity(self.config.output_dirs.len());
        for dir in &self.config.output_dirs {
            saved_paths.push(save_digest(&digest, dir).await?);
        }

        print_final_stats(&digest, &saved_paths);

        Ok(digest)
    }
}

/// 把处理结果写入 `{dir}/full_result_{date}.json`
///
/// # 参数
/// - `digest`: 单日处理结果
/// - `dir`: 输出目录，不存在时自动创建
///
/// # 返回
/// 返回写入的文件路径
pub async fn save_digest(digest: &DailyDigest, dir: &str) -> Result<String> {
    let path = Path::new(dir).join(format!("full_result_{}.json", digest.date));
    let path_str = path.display().to_string();

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| FileError::write_failed(dir, e))?;

    let json = serde_json::to_string_pretty(digest).context("序列化处理结果失败")?;

    tokio::fs::write(&path, json)
        .await
        .map_err(|e| FileError::write_failed(&path_str, e))?;

    info!("💾 已保存: {}", path_str);
    Ok(path_str)
}
