use std::collections::HashMap;

use diesel::prelude::*;

use crate::data::models::{CharacterBreakdown, EnrichedResult, MergedResult};
use crate::data::repositories::{DictionaryRepository, SentenceRepository};

/// Attaches example sentences and per-character breakdowns to the results
/// of one page. Character lookups are cached for the lifetime of the value,
/// which is a single request.
pub struct EnrichmentService<'c> {
    conn: &'c mut SqliteConnection,
    example_limit: i64,
    breakdown_definitions: usize,
    characters: HashMap<char, CharacterBreakdown>,
}

impl<'c> EnrichmentService<'c> {
    pub fn new(conn: &'c mut SqliteConnection, example_limit: i64, breakdown_definitions: usize) -> Self {
        EnrichmentService {
            conn,
            example_limit,
            breakdown_definitions,
            characters: HashMap::new(),
        }
    }

    pub fn enrich(&mut self, result: MergedResult) -> QueryResult<EnrichedResult> {
        let examples = SentenceRepository::sample_containing(
            self.conn,
            &result.entry.simplified,
            self.example_limit,
        )?;
        let character_breakdown = self.breakdown(&result.entry.simplified)?;

        Ok(EnrichedResult {
            result,
            examples,
            character_breakdown,
        })
    }

    /// One record per character of a multi-character word; empty for single characters.
    pub fn breakdown(&mut self, word: &str) -> QueryResult<Vec<CharacterBreakdown>> {
        if word.chars().count() < 2 {
            return Ok(Vec::new());
        }
        word.chars().map(|c| self.character(c)).collect()
    }

    fn character(&mut self, character: char) -> QueryResult<CharacterBreakdown> {
        if let Some(cached) = self.characters.get(&character) {
            return Ok(cached.clone());
        }

        let breakdown = match DictionaryRepository::find_single_character(self.conn, character)? {
            Some(entry) => CharacterBreakdown::from_entry(&entry, self.breakdown_definitions),
            None => CharacterBreakdown::unavailable(character),
        };
        self.characters.insert(character, breakdown.clone());
        Ok(breakdown)
    }

    #[cfg(test)]
    pub fn cached_characters(&self) -> usize {
        self.characters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::{MatchType, NOT_AVAILABLE};
    use crate::data::test_support::{sample_entry, sample_result, seeded_connection};

    #[test]
    fn single_characters_have_no_breakdown() {
        let mut conn = seeded_connection();
        let mut service = EnrichmentService::new(&mut conn, 3, 3);
        assert!(service.breakdown("好").unwrap().is_empty());
        assert_eq!(service.cached_characters(), 0);
    }

    #[test]
    fn multi_character_words_are_split() {
        let mut conn = seeded_connection();
        let mut service = EnrichmentService::new(&mut conn, 3, 3);
        let parts = service.breakdown("中国").unwrap();

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].simplified, "中");
        assert_eq!(parts[0].short_definitions, "China/Chinese/surname Zhong");
        assert_eq!(parts[0].definitions, "China/Chinese/surname Zhong/middle");
        assert_eq!(parts[1].traditional, "國");
        assert_eq!(parts[1].pinyin_marks, "guó");
    }

    #[test]
    fn unknown_characters_get_placeholders() {
        let mut conn = seeded_connection();
        let mut service = EnrichmentService::new(&mut conn, 3, 3);
        let parts = service.breakdown("电脑").unwrap();

        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| p.definitions == NOT_AVAILABLE));
        assert!(parts.iter().all(|p| !p.is_available()));
        assert_eq!(parts[1].simplified, "脑");
        assert_eq!(parts[1].pinyin_marks, "");
    }

    #[test]
    fn repeated_characters_are_looked_up_once() {
        let mut conn = seeded_connection();
        let mut service = EnrichmentService::new(&mut conn, 3, 3);
        service.breakdown("你好").unwrap();
        service.breakdown("好好").unwrap();
        assert_eq!(service.cached_characters(), 2);
    }

    #[test]
    fn enrich_attaches_examples() {
        let mut conn = seeded_connection();
        let mut service = EnrichmentService::new(&mut conn, 3, 3);
        let result = sample_result(
            sample_entry(1, "中国", "中國", "Zhōng guó", "China"),
            MatchType::Exact,
            None,
        );

        let enriched = service.enrich(result).unwrap();
        assert_eq!(enriched.examples.len(), 1);
        assert_eq!(enriched.examples[0].english, "China is big.");
        assert_eq!(enriched.character_breakdown.len(), 2);
    }
}
