pub mod analyze_models;
pub mod dictionary_models;
pub mod error_models;
pub mod search_models;

pub use analyze_models::{AnalyzeParams, AnalyzedSegment};
pub use dictionary_models::{
    DictionaryEntry, NewDictionaryEntry, NewSentence, RankedEntry, SentenceExample,
    join_definitions, split_definitions,
};
pub use error_models::{DictionaryError, IngestError};
pub use search_models::{
    CharacterBreakdown, EnrichedResult, Hit, MatchType, MergedResult, PinyinColumn,
    SearchPage, SearchParams, NOT_AVAILABLE,
};
