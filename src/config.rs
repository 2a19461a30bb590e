use crate::error::ConfigError;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 处理日期（YYYYMMDD），为空时取当天
    pub date: Option<String>,
    /// 原始文稿存放目录
    pub input_dir: String,
    /// 结果输出目录（每个目录写一份）
    pub output_dirs: Vec<String>,
    /// 词表覆盖文件（TOML）
    pub vocabulary_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_enabled: bool,
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 单次摘要请求超时（秒）
    pub llm_timeout_secs: u64,
    /// 启动探测超时（秒）
    pub llm_probe_timeout_secs: u64,
    /// 送入 LLM 的最大字符数
    pub llm_max_input_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date: None,
            input_dir: "raw".to_string(),
            output_dirs: vec!["datas".to_string(), "xinwen".to_string()],
            vocabulary_file: None,
            verbose_logging: false,
            llm_enabled: true,
            llm_api_key: "ollama".to_string(),
            llm_api_base_url: "http://localhost:11434/v1".to_string(),
            llm_model_name: "qwen2:7b".to_string(),
            llm_timeout_secs: 120,
            llm_probe_timeout_secs: 5,
            llm_max_input_chars: 600,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            date: std::env::var("NEWS_DATE").ok().filter(|v| !v.trim().is_empty()),
            input_dir: std::env::var("INPUT_DIR").unwrap_or(default.input_dir),
            output_dirs: std::env::var("OUTPUT_DIRS")
                .ok()
                .map(|v| split_list(&v))
                .filter(|dirs| !dirs.is_empty())
                .unwrap_or(default.output_dirs),
            vocabulary_file: std::env::var("VOCABULARY_FILE").ok().or(default.vocabulary_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_enabled: std::env::var("LLM_ENABLED").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_enabled),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_timeout_secs),
            llm_probe_timeout_secs: std::env::var("LLM_PROBE_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_probe_timeout_secs),
            llm_max_input_chars: std::env::var("LLM_MAX_INPUT_CHARS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.llm_max_input_chars),
        }
    }

    /// 解析处理日期，未配置时使用当天
    pub fn resolve_date(&self) -> Result<String, ConfigError> {
        match &self.date {
            Some(date) => validate_date(date),
            None => Ok(chrono::Local::now().format("%Y%m%d").to_string()),
        }
    }
}

/// 校验 YYYYMMDD 日期字符串
pub fn validate_date(value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.len() != 8 || chrono::NaiveDate::parse_from_str(value, "%Y%m%d").is_err() {
        return Err(ConfigError::InvalidDate {
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date("20251023").unwrap(), "20251023");
        assert_eq!(validate_date(" 20240229 ").unwrap(), "20240229");
        assert!(validate_date("2025-10-23").is_err());
        assert!(validate_date("20251332").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("datas, xinwen,,"), vec!["datas", "xinwen"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_resolve_date_defaults_to_today() {
        let config = Config::default();
        let date = config.resolve_date().unwrap();
        assert_eq!(date.len(), 8);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
    }
}
