use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::data::models::{DictionaryEntry, PinyinColumn, RankedEntry};
use crate::schema::dictionary;

const FULL_TEXT_SQL: &str = "\
    SELECT d.*, f.rank AS fts_rank \
    FROM dictionary d \
    JOIN dictionary_fts f ON d.id = f.rowid \
    WHERE dictionary_fts MATCH ? \
    ORDER BY f.rank";

pub struct DictionaryRepository;

impl DictionaryRepository {
    /// Rows whose script form equals `script` or whose pinyin column equals `pinyin_key`.
    pub fn find_exact(
        conn: &mut SqliteConnection,
        script: &str,
        column: PinyinColumn,
        pinyin_key: &str,
    ) -> QueryResult<Vec<DictionaryEntry>> {
        let by_script = dictionary::traditional
            .eq(script)
            .or(dictionary::simplified.eq(script));

        match column {
            PinyinColumn::Numbered => dictionary::table
                .filter(by_script.or(dictionary::pinyin_numbered.eq(pinyin_key)))
                .order(dictionary::id)
                .select(DictionaryEntry::as_select())
                .load(conn),
            PinyinColumn::Clean => dictionary::table
                .filter(by_script.or(dictionary::pinyin_clean.eq(pinyin_key)))
                .order(dictionary::id)
                .select(DictionaryEntry::as_select())
                .load(conn),
        }
    }

    /// Left-anchored `LIKE` over the same columns as [`find_exact`](Self::find_exact).
    pub fn find_prefix(
        conn: &mut SqliteConnection,
        script: &str,
        column: PinyinColumn,
        pinyin_key: &str,
    ) -> QueryResult<Vec<DictionaryEntry>> {
        let script_pattern = format!("{}%", script);
        let pinyin_pattern = format!("{}%", pinyin_key);
        let by_script = dictionary::traditional
            .like(script_pattern.as_str())
            .or(dictionary::simplified.like(script_pattern.as_str()));

        match column {
            PinyinColumn::Numbered => dictionary::table
                .filter(by_script.or(dictionary::pinyin_numbered.like(pinyin_pattern.as_str())))
                .order(dictionary::id)
                .select(DictionaryEntry::as_select())
                .load(conn),
            PinyinColumn::Clean => dictionary::table
                .filter(by_script.or(dictionary::pinyin_clean.like(pinyin_pattern.as_str())))
                .order(dictionary::id)
                .select(DictionaryEntry::as_select())
                .load(conn),
        }
    }

    /// Phrase query against the FTS5 index. Errors on malformed MATCH syntax.
    pub fn search_full_text(
        conn: &mut SqliteConnection,
        query: &str,
    ) -> QueryResult<Vec<RankedEntry>> {
        diesel::sql_query(FULL_TEXT_SQL)
            .bind::<Text, _>(phrase_query(query))
            .load::<RankedEntry>(conn)
    }

    pub fn find_single_character(
        conn: &mut SqliteConnection,
        character: char,
    ) -> QueryResult<Option<DictionaryEntry>> {
        let character = character.to_string();
        dictionary::table
            .filter(dictionary::simplified.eq(character.as_str()))
            .order(dictionary::id)
            .select(DictionaryEntry::as_select())
            .first(conn)
            .optional()
    }

    /// First entry written as `word` in either script.
    pub fn find_by_word(
        conn: &mut SqliteConnection,
        word: &str,
    ) -> QueryResult<Option<DictionaryEntry>> {
        dictionary::table
            .filter(dictionary::simplified.eq(word).or(dictionary::traditional.eq(word)))
            .order(dictionary::id)
            .select(DictionaryEntry::as_select())
            .first(conn)
            .optional()
    }
}

/// Wraps the query in double quotes so FTS5 treats it as a single phrase.
pub fn phrase_query(query: &str) -> String {
    format!("\"{}\"", query.replace('"', "\"\""))
}
