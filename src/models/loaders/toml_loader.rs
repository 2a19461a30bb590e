use crate::error::{AppResult, FileError};
use crate::models::vocabulary::Vocabulary;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// 从 TOML 文件加载词表覆盖
///
/// 未提供路径时返回默认词表；文件中缺省的字段沿用默认值。
/// 加载后立即校验，空词表视为配置错误。
pub async fn load_vocabulary(path: Option<&str>) -> AppResult<Vocabulary> {
    let vocabulary = match path {
        Some(path) => {
            let content = fs::read_to_string(Path::new(path))
                .await
                .map_err(|e| FileError::read_failed(path, e))?;

            let vocabulary = parse_vocabulary(&content).map_err(|e| FileError::TomlParseFailed {
                path: path.to_string(),
                source: e,
            })?;

            info!("✓ 已加载词表覆盖文件: {}", path);
            vocabulary
        }
        None => Vocabulary::default(),
    };

    vocabulary.validate()?;
    Ok(vocabulary)
}

/// 解析词表 TOML 文本
pub fn parse_vocabulary(content: &str) -> Result<Vocabulary, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ConfigError};

    #[test]
    fn test_partial_override_keeps_defaults() {
        let vocabulary = parse_vocabulary(
            r#"
locations = ["北京", "巴黎"]
person_titles = ["主席"]
"#,
        )
        .unwrap();

        assert_eq!(vocabulary.locations, vec!["北京", "巴黎"]);
        assert_eq!(vocabulary.person_titles, vec!["主席"]);
        assert_eq!(
            vocabulary.boilerplate_patterns,
            Vocabulary::default().boilerplate_patterns
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(parse_vocabulary("locations = 3").is_err());
    }

    #[tokio::test]
    async fn test_load_default_without_path() {
        let vocabulary = load_vocabulary(None).await.unwrap();
        assert_eq!(vocabulary, Vocabulary::default());
    }

    #[tokio::test]
    async fn test_load_rejects_empty_table() {
        let path = std::env::temp_dir().join(format!("news_digest_vocab_{}.toml", std::process::id()));
        std::fs::write(&path, "summary_keywords = []\n").unwrap();

        let result = load_vocabulary(path.to_str()).await;
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::EmptyTable { .. }))
        ));
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_file_error() {
        let result = load_vocabulary(Some("/nonexistent/news_digest_vocab.toml")).await;
        assert!(matches!(
            result,
            Err(AppError::File(FileError::ReadFailed { .. }))
        ));
    }
}
