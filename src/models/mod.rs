pub mod loaders;
pub mod news;
pub mod vocabulary;

pub use loaders::{load_raw_lines, load_vocabulary, parse_raw_content, RawInput};
pub use news::{Category, DailyDigest, EntitySet, NewsItem, Summary, SummaryMethod};
pub use vocabulary::Vocabulary;
