//! # News Digest
//!
//! 把一天的新闻联播文稿整理成结构化摘要的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 数据模型、词表配置、输入和词表加载
//! - `Vocabulary` - 所有正则和关键词表，构造时传入各阶段
//! - `DailyDigest` - 单日处理结果
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 每个模块对应一个处理阶段
//! - `Cleaner` - 去掉固定串词
//! - `Segmenter` - 分割新闻（一次分割 + 数字标识拆分）
//! - `Classifier` - 国内/国际分类
//! - `EntityExtractor` - 地点/人物/组织抽取
//! - `SummaryStrategy` - 规则摘要或大模型摘要
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一批文稿"和"一条新闻"的处理流程
//! - `Pipeline` - 清洗 → 分割 → 分类 → 逐条处理
//! - `NewsFlow` - 实体抽取 + 摘要
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 初始化、加载输入、运行、保存结果
//!
//! ## 模块结构

pub mod config;
pub mod error;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Category, DailyDigest, NewsItem, SummaryMethod, Vocabulary};
pub use orchestrator::App;
pub use services::SummaryStrategy;
pub use workflow::Pipeline;
