pub mod analyzer;
pub mod segmenter;

pub use analyzer::{analyze, resolve_text};
pub use segmenter::{JiebaSegmenter, Segmenter};
