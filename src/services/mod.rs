//! 业务能力层（Services）
//!
//! 每个模块对应流水线中的一个处理阶段，只依赖 `models`，互不依赖（摘要策略除外）。

pub mod classifier;
pub mod cleaner;
pub mod entity_extractor;
pub mod llm_service;
pub mod segmenter;
pub mod summarizer;

pub use classifier::{Classified, Classifier};
pub use cleaner::Cleaner;
pub use entity_extractor::EntityExtractor;
pub use llm_service::LlmSummarizer;
pub use segmenter::Segmenter;
pub use summarizer::{HeuristicSummarizer, SummaryStrategy};
