use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::data::models::{DictionaryEntry, SentenceExample};

/// Placeholder used when a character has no single-character entry.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchParams {
    #[serde(default)]
    #[validate(length(max = 100, message = "Query must be at most 100 characters"))]
    pub q: String,
    // Kept as text so a blank or malformed page falls back to the first one
    pub page: Option<String>,
}

impl SearchParams {
    /// Requested page, never below 1; anything unparseable reads as 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1)
    }
}

/// Retrieval strategy a hit was discovered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    StartsWith,
    Fts,
    Other,
}

/// Stored pinyin column compared against the normalized query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinyinColumn {
    /// `pinyin_numbered`, used when the query carries tone digits.
    Numbered,
    /// `pinyin_clean`
    Clean,
}

/// One row returned by a retrieval strategy.
#[derive(Debug, Clone)]
pub struct Hit {
    pub entry: DictionaryEntry,
    pub match_type: MatchType,
    pub fts_rank: Option<f64>,
}

/// One logical search result built from every hit sharing the same
/// `(simplified, pinyin_marks)` key.
///
/// `entry` holds the stored fields of the first hit; its merged flags,
/// `traditional` and `definitions` are rewritten when the merge finishes.
#[derive(Debug, Clone, Serialize)]
pub struct MergedResult {
    #[serde(flatten)]
    pub entry: DictionaryEntry,
    #[serde(skip)]
    pub traditional_variants: BTreeSet<String>,
    pub definition_list: Vec<String>,
    #[serde(skip)]
    pub match_type: MatchType,
    #[serde(skip)]
    pub fts_rank: Option<f64>,
}

impl MergedResult {
    /// Sorted, deduplicated traditional forms joined for display.
    pub fn traditional_display(&self) -> String {
        self.traditional_variants
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterBreakdown {
    pub simplified: String,
    pub traditional: String,
    pub pinyin_marks: String,
    pub definitions: String,
    pub short_definitions: String,
}

impl CharacterBreakdown {
    pub fn from_entry(entry: &DictionaryEntry, max_definitions: usize) -> Self {
        let short: Vec<String> = entry
            .definitions
            .split('/')
            .take(max_definitions)
            .map(str::to_string)
            .collect();

        CharacterBreakdown {
            simplified: entry.simplified.clone(),
            traditional: entry.traditional.clone(),
            pinyin_marks: entry.pinyin_marks.clone(),
            definitions: entry.definitions.clone(),
            short_definitions: short.join("/"),
        }
    }

    pub fn unavailable(character: char) -> Self {
        CharacterBreakdown {
            simplified: character.to_string(),
            traditional: character.to_string(),
            pinyin_marks: String::new(),
            definitions: NOT_AVAILABLE.to_string(),
            short_definitions: NOT_AVAILABLE.to_string(),
        }
    }

    #[cfg(test)]
    pub fn is_available(&self) -> bool {
        self.definitions != NOT_AVAILABLE
    }
}

/// A merged result with its page-level enrichment attached.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedResult {
    #[serde(flatten)]
    pub result: MergedResult,
    pub examples: Vec<SentenceExample>,
    pub character_breakdown: Vec<CharacterBreakdown>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub query: String,
    pub results: Vec<EnrichedResult>,
    pub page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub page_size: usize,
}

impl SearchPage {
    pub fn empty(query: &str, page_size: usize) -> Self {
        SearchPage {
            query: query.to_string(),
            results: Vec::new(),
            page: 1,
            total_pages: 0,
            total_results: 0,
            page_size,
        }
    }
}
