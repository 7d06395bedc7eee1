use std::collections::HashSet;

use diesel::prelude::*;

use crate::data::models::{DictionaryEntry, Hit, MatchType};
use crate::data::repositories::DictionaryRepository;
use crate::features::search::NormalizedQuery;

/// Union of hits in discovery order, deduplicated by entry id.
#[derive(Debug, Default)]
struct HitCollector {
    seen: HashSet<i32>,
    hits: Vec<Hit>,
}

impl HitCollector {
    fn add(&mut self, entry: DictionaryEntry, match_type: MatchType, fts_rank: Option<f64>) {
        if self.seen.insert(entry.id) {
            self.hits.push(Hit {
                entry,
                match_type,
                fts_rank,
            });
        }
    }

    fn add_all(&mut self, rows: Vec<DictionaryEntry>, match_type: MatchType) {
        for row in rows {
            self.add(row, match_type, None);
        }
    }
}

/// Runs the exact, prefix and full-text strategies and unions their hits.
///
/// Store failures in the exact and prefix strategies are returned. The
/// full-text strategy fails soft: any error there is logged and adds no hits.
pub fn collect_hits(
    conn: &mut SqliteConnection,
    query: &NormalizedQuery,
) -> QueryResult<Vec<Hit>> {
    let (column, pinyin_key) = query.pinyin_lookup();
    let mut collector = HitCollector::default();

    let exact = DictionaryRepository::find_exact(conn, &query.raw, column, pinyin_key)?;
    collector.add_all(exact, MatchType::Exact);

    let prefix = DictionaryRepository::find_prefix(conn, &query.raw, column, pinyin_key)?;
    collector.add_all(prefix, MatchType::StartsWith);

    match DictionaryRepository::search_full_text(conn, &query.raw) {
        Ok(rows) => {
            for row in rows {
                collector.add(row.entry, MatchType::Fts, Some(row.fts_rank));
            }
        }
        Err(e) => log::warn!("Full-text query {:?} failed: {}", query.raw, e),
    }

    Ok(collector.hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::seeded_connection;
    use diesel::connection::SimpleConnection;

    fn hits_for(conn: &mut SqliteConnection, query: &str) -> Vec<Hit> {
        collect_hits(conn, &NormalizedQuery::new(query)).unwrap()
    }

    #[test]
    fn exact_hits_come_before_prefix_hits() {
        let mut conn = seeded_connection();
        let hits = hits_for(&mut conn, "ni");
        assert_eq!(hits[0].entry.simplified, "你");
        assert_eq!(hits[0].match_type, MatchType::Exact);
        let nihao = hits.iter().find(|h| h.entry.simplified == "你好").unwrap();
        assert_eq!(nihao.match_type, MatchType::StartsWith);
    }

    #[test]
    fn an_entry_is_reported_once_under_its_first_strategy() {
        let mut conn = seeded_connection();
        let hits = hits_for(&mut conn, "ni3hao3");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].match_type, MatchType::Exact);
        assert_eq!(hits[0].fts_rank, None);
    }

    #[test]
    fn full_text_hits_carry_rank() {
        let mut conn = seeded_connection();
        let hits = hits_for(&mut conn, "hello");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|h| h.match_type == MatchType::Fts));
        assert!(hits.iter().all(|h| h.fts_rank.is_some()));
    }

    #[test]
    fn broken_full_text_index_contributes_nothing() {
        let mut conn = seeded_connection();
        conn.batch_execute("DROP TABLE dictionary_fts").unwrap();

        let hits = hits_for(&mut conn, "hao");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.match_type == MatchType::Exact));
        assert!(hits_for(&mut conn, "hello").is_empty());
    }
}
