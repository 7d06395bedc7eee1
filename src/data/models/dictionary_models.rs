use diesel::prelude::*;
use diesel::sql_types::Double;
use serde::Serialize;

use crate::schema::{dictionary, sentences};

/// Separator between glosses in the stored `definitions` column.
pub const DEFINITION_SEPARATOR: char = '/';

/// A dictionary row as stored by the ingestion pass.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, QueryableByName, Serialize)]
#[diesel(table_name = dictionary)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DictionaryEntry {
    pub id: i32,
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,          // Source romanization, e.g. "ni3 hao3"
    pub pinyin_clean: String,    // "nihao"
    pub pinyin_numbered: String, // "ni3hao3"
    pub pinyin_marks: String,    // "nǐ hǎo"
    pub definitions: String,     // "/"-joined glosses
    pub has_examples: bool,
    pub has_stroke: bool,
    pub hsk_level: i32, // 0 = unranked
}

/// Entry row produced by ingestion, before the database assigns an id.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = dictionary)]
pub struct NewDictionaryEntry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    pub pinyin_clean: String,
    pub pinyin_numbered: String,
    pub pinyin_marks: String,
    pub definitions: String,
    pub has_examples: bool,
    pub has_stroke: bool,
    pub hsk_level: i32,
}

/// Full-text hit together with the FTS5 rank (ascending is better).
#[derive(Debug, QueryableByName)]
pub struct RankedEntry {
    #[diesel(embed)]
    pub entry: DictionaryEntry,
    #[diesel(sql_type = Double)]
    pub fts_rank: f64,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = sentences)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SentenceExample {
    pub chinese: String,
    pub english: String,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = sentences)]
pub struct NewSentence {
    pub chinese: String,
    pub english: String,
}

/// Splits a stored definitions string into its glosses, dropping empty
/// segments and repeated glosses while keeping first-appearance order.
pub fn split_definitions(raw: &str) -> Vec<String> {
    let mut glosses: Vec<String> = Vec::new();
    for gloss in raw.split(DEFINITION_SEPARATOR) {
        if !gloss.is_empty() && !glosses.iter().any(|g| g == gloss) {
            glosses.push(gloss.to_string());
        }
    }
    glosses
}

pub fn join_definitions(glosses: &[String]) -> String {
    glosses.join(&DEFINITION_SEPARATOR.to_string())
}
