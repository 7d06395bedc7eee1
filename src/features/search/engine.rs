use diesel::prelude::*;

use crate::config::SearchConfig;
use crate::data::models::{DictionaryError, SearchPage};
use crate::features::search::{
    EnrichmentService, NormalizedQuery, collect_hits, merge_hits, paginate,
};

pub struct SearchEngine;

impl SearchEngine {
    /// Runs the whole lookup pipeline for one query and returns one page.
    ///
    /// A blank query gives an empty page. Only store failures are returned as
    /// errors; a failing full-text query or an unknown character is absorbed.
    pub fn search(
        conn: &mut SqliteConnection,
        query: &str,
        page: usize,
        config: &SearchConfig,
    ) -> Result<SearchPage, DictionaryError> {
        let normalized = NormalizedQuery::new(query);
        if normalized.is_empty() {
            return Ok(SearchPage::empty(query, config.page_size));
        }

        let hits = collect_hits(conn, &normalized)?;
        let mut merged = merge_hits(hits, &config.weights.match_priority);
        config.weights.rank(&mut merged, &normalized.raw);

        let total_results = merged.len();
        let (current, total_pages) = paginate(&merged, page, config.page_size);

        let mut enrichment =
            EnrichmentService::new(conn, config.example_limit, config.breakdown_definitions);
        let results = current
            .iter()
            .cloned()
            .map(|result| enrichment.enrich(result))
            .collect::<QueryResult<Vec<_>>>()?;

        Ok(SearchPage {
            query: normalized.raw,
            results,
            page,
            total_pages,
            total_results,
            page_size: config.page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::seeded_connection;

    fn words(page: &SearchPage) -> Vec<&str> {
        page.results
            .iter()
            .map(|r| r.result.entry.simplified.as_str())
            .collect()
    }

    #[test]
    fn blank_query_gives_an_empty_page() {
        let mut conn = seeded_connection();
        let page = SearchEngine::search(&mut conn, "   ", 1, &SearchConfig::default()).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.total_results, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn numbered_pinyin_finds_the_word() {
        let mut conn = seeded_connection();
        let page = SearchEngine::search(&mut conn, "ni3 hao3", 1, &SearchConfig::default()).unwrap();
        assert_eq!(words(&page), vec!["你好"]);

        let nihao = &page.results[0];
        assert_eq!(nihao.result.entry.pinyin_marks, "nǐ hǎo");
        assert_eq!(nihao.result.entry.hsk_level, 1);
        assert_eq!(nihao.examples.len(), 1);
        assert_eq!(nihao.character_breakdown.len(), 2);
        assert_eq!(nihao.character_breakdown[1].short_definitions, "good/well");
    }

    #[test]
    fn readings_with_different_tones_stay_separate() {
        let mut conn = seeded_connection();
        let page = SearchEngine::search(&mut conn, "hao", 1, &SearchConfig::default()).unwrap();
        let marks: Vec<&str> = page
            .results
            .iter()
            .map(|r| r.result.entry.pinyin_marks.as_str())
            .collect();
        assert_eq!(marks, vec!["hǎo", "hào"]);
    }

    #[test]
    fn traditional_variants_merge_into_one_result() {
        let mut conn = seeded_connection();
        let page = SearchEngine::search(&mut conn, "gan1jing4", 1, &SearchConfig::default()).unwrap();
        assert_eq!(page.total_results, 1);

        let entry = &page.results[0].result.entry;
        assert_eq!(entry.traditional, "乾淨 / 幹淨");
        assert_eq!(
            page.results[0].result.definition_list,
            vec!["clean", "neat", "variant of 乾淨|干净[gan1 jing4]"]
        );
        assert_eq!(entry.hsk_level, 2);
    }

    #[test]
    fn exact_gloss_outranks_other_english_hits() {
        let mut conn = seeded_connection();
        let page = SearchEngine::search(&mut conn, "hello", 1, &SearchConfig::default()).unwrap();
        assert_eq!(words(&page), vec!["你好", "喂"]);
    }

    #[test]
    fn exact_matches_rank_ahead_of_prefix_matches() {
        let mut conn = seeded_connection();
        let page = SearchEngine::search(&mut conn, "ni", 1, &SearchConfig::default()).unwrap();
        assert_eq!(words(&page), vec!["你", "你好"]);
    }

    #[test]
    fn pages_are_sliced_after_ranking() {
        let mut conn = seeded_connection();
        let config = SearchConfig {
            page_size: 1,
            ..SearchConfig::default()
        };

        let first = SearchEngine::search(&mut conn, "ni", 1, &config).unwrap();
        assert_eq!(first.total_results, 2);
        assert_eq!(first.total_pages, 2);
        assert_eq!(words(&first), vec!["你"]);

        let second = SearchEngine::search(&mut conn, "ni", 2, &config).unwrap();
        assert_eq!(words(&second), vec!["你好"]);

        let beyond = SearchEngine::search(&mut conn, "ni", 7, &config).unwrap();
        assert!(beyond.results.is_empty());
        assert_eq!(beyond.page, 7);
        assert_eq!(beyond.total_pages, 2);
    }

    #[test]
    fn unknown_query_returns_nothing() {
        let mut conn = seeded_connection();
        let page = SearchEngine::search(&mut conn, "zzzz", 1, &SearchConfig::default()).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
