pub mod analyze;
pub mod ingest;
pub mod pinyin;
pub mod search;
