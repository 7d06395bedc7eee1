use crate::data::models::PinyinColumn;

/// Lookup keys derived from the raw query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Trimmed query as typed; compared against script columns and FTS.
    pub raw: String,
    pub has_tone_digits: bool,
    /// Lowercase, spaces removed: `"Ni3 hao3"` -> `"ni3hao3"`.
    pub clean_query: String,
    /// `clean_query` without digits: `"nihao"`.
    pub pinyin_no_tones: String,
}

impl NormalizedQuery {
    pub fn new(query: &str) -> Self {
        let raw = query.trim().to_string();
        let has_tone_digits = raw.chars().any(|c| c.is_ascii_digit());
        let clean_query = raw.to_lowercase().replace(' ', "");
        let pinyin_no_tones = clean_query.chars().filter(|c| !c.is_ascii_digit()).collect();

        NormalizedQuery {
            raw,
            has_tone_digits,
            clean_query,
            pinyin_no_tones,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Which pinyin column to compare, and the key to compare it with.
    pub fn pinyin_lookup(&self) -> (PinyinColumn, &str) {
        if self.has_tone_digits {
            (PinyinColumn::Numbered, &self.clean_query)
        } else {
            (PinyinColumn::Clean, &self.pinyin_no_tones)
        }
    }
}
