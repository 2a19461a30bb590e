use crate::error::{AppResult, ConfigError, FileError};
use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

/// 单日原始文稿
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    /// 实际使用的日期（可能回退到前一天）
    pub date: String,
    pub lines: Vec<String>,
}

/// JSON 输入中的单条记录
///
/// 支持纯字符串数组，也支持带 `content` 字段的对象数组
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Record { content: String },
}

impl RawEntry {
    fn into_content(self) -> String {
        match self {
            RawEntry::Text(text) => text,
            RawEntry::Record { content } => content,
        }
    }
}

/// 解析原始文稿内容
///
/// # 参数
/// - `content`: 文件内容
/// - `is_json`: 是否为 JSON 数组格式，否则按行读取
pub fn parse_raw_content(content: &str, is_json: bool) -> Result<Vec<String>, serde_json::Error> {
    if is_json {
        let entries: Vec<RawEntry> = serde_json::from_str(content)?;
        Ok(entries.into_iter().map(RawEntry::into_content).collect())
    } else {
        Ok(content.lines().map(str::to_string).collect())
    }
}

/// 加载指定日期的原始文稿
///
/// 依次查找 `{input_dir}/{date}.json` 和 `{input_dir}/{date}.txt`。
/// 当天没有文件或内容为空时回退到前一天（只回退一次）。
pub async fn load_raw_lines(input_dir: &str, date: &str) -> AppResult<RawInput> {
    let requested = load_for_date(input_dir, date).await?;
    let requested_found = requested.is_some();

    if let Some(lines) = requested {
        if !lines.is_empty() {
            return Ok(RawInput {
                date: date.to_string(),
                lines,
            });
        }
        warn!("⚠️ {} 没有可用的新闻数据", date);
    } else {
        warn!("⚠️ 未找到 {} 的输入文件", date);
    }

    let prev_date = previous_date(date)?;
    info!("尝试获取前一天 {} 的数据...", prev_date);

    match load_for_date(input_dir, &prev_date).await? {
        Some(lines) if !lines.is_empty() => {
            info!("使用 {} 的数据，共 {} 行", prev_date, lines.len());
            Ok(RawInput {
                date: prev_date,
                lines,
            })
        }
        found if found.is_some() || requested_found => {
            warn!("⚠️ {} 也没有可用的新闻数据", prev_date);
            Ok(RawInput {
                date: date.to_string(),
                lines: Vec::new(),
            })
        }
        _ => Err(FileError::InputNotFound {
            date: date.to_string(),
            dir: input_dir.to_string(),
        }
        .into()),
    }
}

async fn load_for_date(input_dir: &str, date: &str) -> AppResult<Option<Vec<String>>> {
    for (extension, is_json) in [("json", true), ("txt", false)] {
        let path = PathBuf::from(input_dir).join(format!("{}.{}", date, extension));
        if !path.exists() {
            continue;
        }
        info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );
        return read_lines(&path, is_json).await.map(Some);
    }
    Ok(None)
}

async fn read_lines(path: &Path, is_json: bool) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| FileError::read_failed(path.display().to_string(), e))?;

    let lines = parse_raw_content(&content, is_json).map_err(|e| FileError::JsonParseFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(lines)
}

fn previous_date(date: &str) -> Result<String, ConfigError> {
    let parsed =
        NaiveDate::parse_from_str(date, "%Y%m%d").map_err(|_| ConfigError::InvalidDate {
            value: date.to_string(),
        })?;
    Ok((parsed - Duration::days(1)).format("%Y%m%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "news_digest_input_{}_{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_json_strings_and_records() {
        let lines = parse_raw_content(r#"["第一行", {"content": "第二行"}]"#, true).unwrap();
        assert_eq!(lines, vec!["第一行", "第二行"]);
    }

    #[test]
    fn test_parse_plain_text() {
        let lines = parse_raw_content("第一行\n第二行\n", false).unwrap();
        assert_eq!(lines, vec!["第一行", "第二行"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_raw_content("{not json", true).is_err());
    }

    #[test]
    fn test_previous_date_crosses_month() {
        assert_eq!(previous_date("20251101").unwrap(), "20251031");
        assert!(previous_date("2025-11-01").is_err());
    }

    #[tokio::test]
    async fn test_load_raw_lines_prefers_requested_date() {
        let dir = temp_dir("requested");
        std::fs::write(dir.join("20251023.txt"), "国务院召开常务会议\n").unwrap();

        let input = load_raw_lines(dir.to_str().unwrap(), "20251023").await.unwrap();
        assert_eq!(input.date, "20251023");
        assert_eq!(input.lines, vec!["国务院召开常务会议"]);
    }

    #[tokio::test]
    async fn test_load_raw_lines_falls_back_to_previous_day() {
        let dir = temp_dir("fallback");
        std::fs::write(dir.join("20251024.json"), "[]").unwrap();
        std::fs::write(dir.join("20251023.json"), r#"["北京举行会议"]"#).unwrap();

        let input = load_raw_lines(dir.to_str().unwrap(), "20251024").await.unwrap();
        assert_eq!(input.date, "20251023");
        assert_eq!(input.lines, vec!["北京举行会议"]);
    }

    #[tokio::test]
    async fn test_load_raw_lines_invalid_json_is_file_error() {
        let dir = temp_dir("invalid_json");
        std::fs::write(dir.join("20251023.json"), "{not json").unwrap();

        let result = load_raw_lines(dir.to_str().unwrap(), "20251023").await;
        assert!(matches!(
            result,
            Err(AppError::File(FileError::JsonParseFailed { .. }))
        ));
    }

    #[tokio::test]
    async fn test_load_raw_lines_missing_everywhere() {
        let dir = temp_dir("missing");
        let result = load_raw_lines(dir.to_str().unwrap(), "19990101").await;
        assert!(matches!(
            result,
            Err(AppError::File(FileError::InputNotFound { .. }))
        ));
    }
}
