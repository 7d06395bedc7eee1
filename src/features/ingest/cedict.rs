use lazy_static::lazy_static;
use regex::Regex;

use crate::data::models::NewDictionaryEntry;
use crate::features::pinyin;

lazy_static! {
    // TRAD SIMP [pin1 yin1] /gloss 1/gloss 2/
    static ref CEDICT_LINE_RE: Regex =
        Regex::new(r"^(\S+)\s+(\S+)\s+\[(.*?)\]\s+/(.*)/").unwrap();
}

/// CJK Unified Ideographs block, the characters stroke data exists for.
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

pub fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with('%')
}

/// Parses one CC-CEDICT line into an entry with derived pinyin keys.
///
/// `has_examples` and `hsk_level` are left unset; they depend on the other
/// corpora and are filled in by the loader.
pub fn parse_line(line: &str) -> Option<NewDictionaryEntry> {
    let caps = CEDICT_LINE_RE.captures(line.trim())?;
    let traditional = caps[1].to_string();
    let simplified = caps[2].to_string();
    let pinyin_source = caps[3].to_string();
    let definitions = caps[4].to_string();

    let has_stroke = simplified.chars().any(is_cjk_ideograph);

    Some(NewDictionaryEntry {
        pinyin_clean: pinyin::strip_tones(&pinyin_source),
        pinyin_numbered: pinyin::compact_numbered(&pinyin_source),
        pinyin_marks: pinyin::decode(&pinyin_source),
        pinyin: pinyin_source,
        traditional,
        simplified,
        definitions,
        has_examples: false,
        has_stroke,
        hsk_level: 0,
    })
}

pub fn parse_cedict(content: &str) -> Vec<NewDictionaryEntry> {
    content
        .lines()
        .filter(|line| !is_comment(line))
        .filter_map(parse_line)
        .collect()
}
