use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct AnalyzeParams {
    #[validate(length(max = 500, message = "Text must be at most 500 characters"))]
    pub text: Option<String>,
}

/// One token of an analyzed sentence with its dictionary lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedSegment {
    pub word: String,
    pub pos: String,
    pub pinyin: String,
    pub definitions: String,
    pub hsk_level: i32,
}
