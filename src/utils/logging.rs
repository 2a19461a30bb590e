//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::DailyDigest;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`；未设置时默认 `info`，详细模式为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 程序配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 新闻联播每日摘要");
    info!("📁 输入目录: {}", config.input_dir);
    info!("📁 输出目录: {}", config.output_dirs.join(", "));
    if config.llm_enabled {
        info!("🤖 LLM: {} @ {}", config.llm_model_name, config.llm_api_base_url);
    } else {
        info!("🤖 LLM: 已禁用");
    }
    info!("{}", "=".repeat(60));
}

/// 记录摘要方式统计
///
/// # 参数
/// - `digest`: 单日处理结果
pub fn log_digest_stats(digest: &DailyDigest) {
    let (llm, heuristic) = digest.method_counts();
    info!(
        "📊 摘要方式统计 - 大模型: {} 条, 简化版: {} 条",
        llm, heuristic
    );
}

/// 打印最终统计信息
///
/// # 参数
/// - `digest`: 单日处理结果
/// - `saved_paths`: 已写入的结果文件
pub fn print_final_stats(digest: &DailyDigest, saved_paths: &[String]) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📅 日期: {}", digest.date);
    info!("🏠 国内新闻: {} 条", digest.domestic.len());
    info!("🌍 国际新闻: {} 条", digest.international.len());
    info!("✅ 合计: {} 条", digest.total());
    info!("{}", "=".repeat(60));
    for path in saved_paths {
        info!("结果已保存至: {}", path);
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("国务院召开常务会议", 3), "国务院...");
        assert_eq!(truncate_text("北京", 5), "北京");
    }
}
