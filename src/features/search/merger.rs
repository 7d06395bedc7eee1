use std::collections::{BTreeSet, HashMap};

use crate::data::models::{Hit, MergedResult, join_definitions, split_definitions};
use crate::features::search::scoring::MatchPriority;

/// Grouping key: the simplified form and the lowercased marked pinyin.
/// Traditional forms are not part of the key, so script variants collapse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeKey {
    simplified: String,
    pinyin: String,
}

impl MergeKey {
    pub fn of(hit: &Hit) -> Self {
        MergeKey {
            simplified: hit.entry.simplified.clone(),
            pinyin: hit.entry.pinyin_marks.to_lowercase(),
        }
    }
}

impl MergedResult {
    fn seed(hit: Hit) -> Self {
        MergedResult {
            traditional_variants: BTreeSet::from([hit.entry.traditional.clone()]),
            definition_list: split_definitions(&hit.entry.definitions),
            entry: hit.entry,
            match_type: hit.match_type,
            fts_rank: hit.fts_rank,
        }
    }

    fn absorb(&mut self, hit: Hit, priority: &MatchPriority) {
        self.traditional_variants.insert(hit.entry.traditional.clone());

        for gloss in split_definitions(&hit.entry.definitions) {
            if !self.definition_list.contains(&gloss) {
                self.definition_list.push(gloss);
            }
        }

        self.entry.has_examples |= hit.entry.has_examples;
        self.entry.has_stroke |= hit.entry.has_stroke;
        self.entry.hsk_level = merge_hsk_level(self.entry.hsk_level, hit.entry.hsk_level);

        if priority.of(hit.match_type) < priority.of(self.match_type) {
            self.match_type = hit.match_type;
            if hit.fts_rank.is_some() {
                self.fts_rank = hit.fts_rank;
            }
        }
    }

    /// Writes the merged variants and glosses back into the display fields.
    fn finish(mut self) -> Self {
        self.entry.traditional = self.traditional_display();
        self.entry.definitions = join_definitions(&self.definition_list);
        self
    }
}

/// Lower (easier) of two HSK levels, where 0 means unranked.
fn merge_hsk_level(current: i32, other: i32) -> i32 {
    match (current, other) {
        (0, level) | (level, 0) => level,
        (a, b) => a.min(b),
    }
}

/// Folds hits sharing a [`MergeKey`] into one result each, in first-seen order.
pub fn merge_hits(hits: Vec<Hit>, priority: &MatchPriority) -> Vec<MergedResult> {
    let mut index: HashMap<MergeKey, usize> = HashMap::new();
    let mut merged: Vec<MergedResult> = Vec::new();

    for hit in hits {
        let key = MergeKey::of(&hit);
        match index.get(&key) {
            Some(&slot) => merged[slot].absorb(hit, priority),
            None => {
                index.insert(key, merged.len());
                merged.push(MergedResult::seed(hit));
            }
        }
    }

    merged.into_iter().map(MergedResult::finish).collect()
}
