use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::data::models::{MatchType, MergedResult};

/// Sort priority per match type; lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPriority {
    pub exact: i32,
    pub starts_with: i32,
    pub fts: i32,
    pub other: i32,
}

impl Default for MatchPriority {
    fn default() -> Self {
        MatchPriority {
            exact: 0,
            starts_with: 1,
            fts: 2,
            other: 3,
        }
    }
}

impl MatchPriority {
    pub fn of(&self, match_type: MatchType) -> i32 {
        match match_type {
            MatchType::Exact => self.exact,
            MatchType::StartsWith => self.starts_with,
            MatchType::Fts => self.fts,
            MatchType::Other => self.other,
        }
    }
}

/// Every constant the ranking uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub match_priority: MatchPriority,
    /// Applied to full-text hits with a gloss equal to the query.
    pub exact_definition_bonus: i32,
    pub missing_examples_penalty: i32,
    pub missing_stroke_penalty: i32,
    /// HSK score for words outside the HSK lists.
    pub unranked_hsk_score: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            match_priority: MatchPriority::default(),
            exact_definition_bonus: -10,
            missing_examples_penalty: 2,
            missing_stroke_penalty: 5,
            unranked_hsk_score: 10,
        }
    }
}

/// Composite sort key, compared field by field; lower is better.
#[derive(Debug, Clone, Copy)]
pub struct ScoreKey {
    pub priority: i32,
    pub definition_bonus: i32,
    pub hsk_score: i32,
    pub data_penalty: i32,
    pub fts_rank: f64,
    pub length: usize,
}

impl Ord for ScoreKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.definition_bonus.cmp(&other.definition_bonus))
            .then(self.hsk_score.cmp(&other.hsk_score))
            .then(self.data_penalty.cmp(&other.data_penalty))
            .then(self.fts_rank.total_cmp(&other.fts_rank))
            .then(self.length.cmp(&other.length))
    }
}

impl PartialOrd for ScoreKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScoreKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoreKey {}

impl ScoringWeights {
    pub fn score(&self, result: &MergedResult, query: &str) -> ScoreKey {
        let entry = &result.entry;

        let definition_bonus = if result.match_type == MatchType::Fts
            && has_exact_gloss(&result.definition_list, query)
        {
            self.exact_definition_bonus
        } else {
            0
        };

        let hsk_score = if entry.hsk_level > 0 {
            entry.hsk_level
        } else {
            self.unranked_hsk_score
        };

        let mut data_penalty = 0;
        if !entry.has_examples {
            data_penalty += self.missing_examples_penalty;
        }
        if !entry.has_stroke {
            data_penalty += self.missing_stroke_penalty;
        }

        ScoreKey {
            priority: self.match_priority.of(result.match_type),
            definition_bonus,
            hsk_score,
            data_penalty,
            fts_rank: result.fts_rank.unwrap_or(0.0),
            length: entry.simplified.chars().count(),
        }
    }

    /// Stable sort by [`ScoreKey`]; equal keys keep discovery order.
    pub fn rank(&self, results: &mut [MergedResult], query: &str) {
        results.sort_by_cached_key(|result| self.score(result, query));
    }
}

fn has_exact_gloss(glosses: &[String], query: &str) -> bool {
    let query = query.to_lowercase();
    glosses.iter().any(|gloss| gloss.to_lowercase().trim() == query)
}
