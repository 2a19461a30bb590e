pub mod input_loader;
pub mod toml_loader;

pub use input_loader::{load_raw_lines, parse_raw_content, RawInput};
pub use toml_loader::load_vocabulary;
