//! 新闻处理上下文
//!
//! 封装"我正在处理哪天哪个版块的第几条"这一信息，仅用于日志

use std::fmt::Display;

use crate::models::Category;

/// 单条新闻的处理上下文
#[derive(Debug, Clone)]
pub struct NewsCtx {
    /// 日期（YYYYMMDD）
    pub date: String,

    /// 所属版块
    pub category: Category,

    /// 版块内序号（从1开始）
    pub index: usize,

    /// 版块内总条数
    pub total: usize,
}

impl NewsCtx {
    pub fn new(date: impl Into<String>, category: Category, index: usize, total: usize) -> Self {
        Self {
            date: date.into(),
            category,
            index,
            total,
        }
    }
}

impl Display for NewsCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} {} {}/{}]",
            self.date, self.category, self.index, self.total
        )
    }
}
