//! 串词清洗 - 处理阶段 1
//!
//! 只负责"去掉固定串词"，不关心分割和分类

use regex::RegexSet;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::Vocabulary;

/// 串词清洗器
///
/// 任意一条模式在行首命中即丢弃该行，模式顺序不影响结果。
/// 所有模式编译时都锚定到行首。
#[derive(Debug, Clone)]
pub struct Cleaner {
    patterns: RegexSet,
}

impl Cleaner {
    /// 编译串词模式，非法正则在此处报错
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, ConfigError> {
        if vocabulary.boilerplate_patterns.is_empty() {
            return Err(ConfigError::empty_table("boilerplate_patterns"));
        }

        for pattern in &vocabulary.boilerplate_patterns {
            regex::Regex::new(pattern)
                .map_err(|e| ConfigError::invalid_pattern("boilerplate_patterns", pattern, e))?;
        }

        // 串词只在行首匹配，覆盖文件里没写 `^` 的模式也一样
        let anchored: Vec<String> = vocabulary
            .boilerplate_patterns
            .iter()
            .map(|pattern| format!("^(?:{})", pattern))
            .collect();

        let patterns = RegexSet::new(&anchored).map_err(|e| {
            ConfigError::invalid_pattern(
                "boilerplate_patterns",
                vocabulary.boilerplate_patterns.join(" | "),
                e,
            )
        })?;

        Ok(Self { patterns })
    }

    /// 判断一行是否为串词
    pub fn is_boilerplate(&self, line: &str) -> bool {
        self.patterns.is_match(line)
    }

    /// 过滤串词，保留其余行的原始顺序
    pub fn clean<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let cleaned: Vec<String> = lines
            .iter()
            .map(AsRef::as_ref)
            .filter(|line| !self.is_boilerplate(line))
            .map(str::to_string)
            .collect();

        debug!(
            "串词清洗: {} 行 -> {} 行",
            lines.len(),
            cleaned.len()
        );

        cleaned
    }

    /// 把内嵌换行的原始条目展开成单独的行
    pub fn expand_raw_lines<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
        raw.iter()
            .flat_map(|entry| entry.as_ref().lines())
            .map(str::to_string)
            .collect()
    }
}
