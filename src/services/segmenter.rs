//! 新闻分割 - 处理阶段 2
//!
//! 两趟独立的纯变换：
//! 1. `split_primary` 按分割点把清洗后的行累积成段
//! 2. `split_numeric_markers` 把段内 "1:"、"二：" 这类数字标识再拆开
//!
//! 播报中常在一个导语下用行内数字标识串起多条新闻，第一趟分割看不到这些标识。

use regex::{Regex, RegexSet};
use tracing::debug;

use crate::error::ConfigError;
use crate::models::Vocabulary;

/// 新闻分割器
#[derive(Debug, Clone)]
pub struct Segmenter {
    boundaries: RegexSet,
    numeric_marker: Regex,
}

impl Segmenter {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, ConfigError> {
        if vocabulary.boundary_patterns.is_empty() {
            return Err(ConfigError::empty_table("boundary_patterns"));
        }

        for pattern in &vocabulary.boundary_patterns {
            Regex::new(pattern)
                .map_err(|e| ConfigError::invalid_pattern("boundary_patterns", pattern, e))?;
        }

        let boundaries = RegexSet::new(&vocabulary.boundary_patterns).map_err(|e| {
            ConfigError::invalid_pattern(
                "boundary_patterns",
                vocabulary.boundary_patterns.join(" | "),
                e,
            )
        })?;

        let numeric_marker = Regex::new(&vocabulary.numeric_marker_pattern).map_err(|e| {
            ConfigError::invalid_pattern(
                "numeric_marker_pattern",
                &vocabulary.numeric_marker_pattern,
                e,
            )
        })?;

        Ok(Self {
            boundaries,
            numeric_marker,
        })
    }

    /// 完整分割：第一趟分割后逐段做数字标识拆分
    pub fn segment<S: AsRef<str>>(&self, cleaned_lines: &[S]) -> Vec<String> {
        let primary = self.split_primary(cleaned_lines);
        let primary_count = primary.len();

        let refined: Vec<String> = primary
            .iter()
            .flat_map(|segment| self.split_numeric_markers(segment))
            .collect();

        debug!(
            "新闻分割: {} 行 -> {} 段 -> {} 段(数字标识拆分后)",
            cleaned_lines.len(),
            primary_count,
            refined.len()
        );

        refined
    }

    /// 行内任意位置命中分割点
    pub fn is_boundary(&self, line: &str) -> bool {
        self.boundaries.is_match(line)
    }

    /// 第一趟：按分割点累积
    ///
    /// 某行命中分割点且缓冲区非空时，先把缓冲区作为一段输出，再把该行放入新缓冲区。
    /// 空白行不进入缓冲区，保证每段去掉首尾空白后非空。
    pub fn split_primary<S: AsRef<str>>(&self, cleaned_lines: &[S]) -> Vec<String> {
        let mut segments = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();

        for line in cleaned_lines.iter().map(AsRef::as_ref) {
            if line.trim().is_empty() {
                continue;
            }

            if self.is_boundary(line) && !buffer.is_empty() {
                segments.push(buffer.join(" "));
                buffer.clear();
            }

            buffer.push(line);
        }

        if !buffer.is_empty() {
            segments.push(buffer.join(" "));
        }

        segments
    }

    /// 第二趟：按数字标识拆分单个段
    ///
    /// - 没有标识时原样返回
    /// - 第一个标识之前的文字（非空时）单独成段
    /// - 每个标识连同其后到下一个标识之前的文字成段
    /// - 最后一个标识之后的文字并入最后一段
    ///
    /// 拆出的子段去掉首尾空白，空段丢弃。
    pub fn split_numeric_markers(&self, segment: &str) -> Vec<String> {
        let starts: Vec<usize> = self
            .numeric_marker
            .find_iter(segment)
            .map(|m| m.start())
            .collect();

        if starts.is_empty() {
            return vec![segment.to_string()];
        }

        let mut pieces = Vec::with_capacity(starts.len() + 1);

        let lead = segment[..starts[0]].trim();
        if !lead.is_empty() {
            pieces.push(lead.to_string());
        }

        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(segment.len());
            let piece = segment[start..end].trim();
            if !piece.is_empty() {
                pieces.push(piece.to_string());
            }
        }

        if pieces.is_empty() {
            vec![segment.to_string()]
        } else {
            pieces
        }
    }
}
