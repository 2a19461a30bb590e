//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次运行的生命周期，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (一天的文稿)
//!     ↓
//! workflow::Pipeline (清洗 → 分割 → 分类)
//!     ↓
//! workflow::NewsFlow (处理单条新闻)
//!     ↓
//! services (能力层：实体 / 摘要 / LLM)
//! ```
//!
//! 只做调度、读写文件和统计，不做具体的文本判断。

pub mod batch_processor;

pub use batch_processor::{save_digest, App};
