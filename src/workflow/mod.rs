pub mod news_ctx;
pub mod news_flow;
pub mod pipeline;

pub use news_ctx::NewsCtx;
pub use news_flow::NewsFlow;
pub use pipeline::Pipeline;
