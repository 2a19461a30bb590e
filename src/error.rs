use thiserror::Error;

/// 应用程序错误类型
///
/// 加载器返回的统一错误。`LlmError` 只在摘要器内部流转，不会出现在这里。
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误（启动即失败）
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
}

/// 配置错误
///
/// 词表、正则或日期不合法时在启动阶段返回，不会在逐行处理时出现
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 正则表达式无法编译
    #[error("词表 {table} 中的正则 '{pattern}' 无法编译: {source}")]
    InvalidPattern {
        table: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// 必需的关键词表为空
    #[error("词表 {table} 不能为空")]
    EmptyTable { table: String },
    /// 日期格式不是 YYYYMMDD
    #[error("日期 '{value}' 不是合法的 YYYYMMDD 格式")]
    InvalidDate { value: String },
}

/// LLM 服务错误
///
/// 只在摘要器内部流转，调用方只会看到回退后的启发式结果
#[derive(Debug, Error)]
pub enum LlmError {
    /// 请求构建失败
    #[error("LLM 请求构建失败 (模型: {model}): {source}")]
    RequestBuildFailed {
        model: String,
        #[source]
        source: async_openai::error::OpenAIError,
    },
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: async_openai::error::OpenAIError,
    },
    /// 调用超时
    #[error("LLM 调用超时 (模型: {model}, {timeout_secs}秒)")]
    Timeout { model: String, timeout_secs: u64 },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
    /// 返回内容不是合法 JSON
    #[error("LLM返回内容不是合法JSON: {source}")]
    InvalidJson {
        response: String,
        #[source]
        source: serde_json::Error,
    },
    /// JSON 字段不符合摘要结构
    #[error("LLM返回的JSON不符合摘要结构: {reason}")]
    SchemaMismatch { reason: String },
    /// 服务探测失败
    #[error("LLM 服务不可用 ({endpoint}): {reason}")]
    Unavailable { endpoint: String, reason: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 输入文件不存在
    #[error("找不到日期 {date} 的输入文件 (目录: {dir})")]
    InputNotFound { date: String, dir: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl ConfigError {
    /// 创建正则编译错误
    pub fn invalid_pattern(
        table: impl Into<String>,
        pattern: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        ConfigError::InvalidPattern {
            table: table.into(),
            pattern: pattern.into(),
            source,
        }
    }

    /// 创建空词表错误
    pub fn empty_table(table: impl Into<String>) -> Self {
        ConfigError::EmptyTable {
            table: table.into(),
        }
    }
}

impl FileError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        FileError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        FileError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
