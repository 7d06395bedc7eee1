use diesel::prelude::*;

use crate::data::models::AnalyzedSegment;
use crate::data::repositories::DictionaryRepository;
use crate::features::analyze::segmenter::{SPACE_TAG, Segmenter};

/// Sentence analyzed when the form is submitted empty.
pub const DEFAULT_TEXT: &str = "我喜欢可爱的猫";

/// Text to analyze for a `text` query parameter: nothing when the parameter
/// is absent, the default sentence when it was submitted blank.
pub fn resolve_text(param: Option<&str>) -> Option<String> {
    let text = param?.trim();
    if text.is_empty() {
        Some(DEFAULT_TEXT.to_string())
    } else {
        Some(text.to_string())
    }
}

/// Segments `text` and looks every token up in the dictionary.
pub fn analyze<S: Segmenter>(
    conn: &mut SqliteConnection,
    segmenter: &S,
    text: &str,
) -> QueryResult<Vec<AnalyzedSegment>> {
    let mut analyzed = Vec::new();

    for (word, pos) in segmenter.segments(text) {
        if word.trim().is_empty() {
            analyzed.push(AnalyzedSegment {
                word: word.to_string(),
                pos: SPACE_TAG.to_string(),
                pinyin: String::new(),
                definitions: String::new(),
                hsk_level: 0,
            });
            continue;
        }

        let segment = match DictionaryRepository::find_by_word(conn, word)? {
            Some(entry) => AnalyzedSegment {
                word: word.to_string(),
                pos: pos.to_string(),
                pinyin: entry.pinyin_marks,
                definitions: entry.definitions,
                hsk_level: entry.hsk_level,
            },
            // punctuation, names and other words missing from the dictionary
            None => AnalyzedSegment {
                word: word.to_string(),
                pos: pos.to_string(),
                pinyin: String::new(),
                definitions: String::new(),
                hsk_level: 0,
            },
        };
        analyzed.push(segment);
    }

    Ok(analyzed)
}
