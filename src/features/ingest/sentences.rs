use std::collections::HashMap;

use crate::data::models::{NewDictionaryEntry, NewSentence};

/// Longest word, in characters, looked for inside sentences.
const MAX_WORD_CHARS: usize = 4;

/// Parses `cn_id<TAB>chinese<TAB>en_id<TAB>english` lines; short lines are skipped.
pub fn parse_sentence_pairs(content: &str) -> Vec<NewSentence> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 4 {
                return None;
            }
            Some(NewSentence {
                chinese: parts[1].to_string(),
                english: parts[3].trim_end_matches(['\r', '\n']).to_string(),
            })
        })
        .collect()
}

/// Sets `has_examples` on every entry whose simplified form occurs in a
/// sentence. Only words of up to four characters are considered.
pub fn mark_examples(entries: &mut [NewDictionaryEntry], sentences: &[NewSentence]) -> usize {
    let mut by_word: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, entry) in entries.iter().enumerate() {
        by_word.entry(entry.simplified.clone()).or_default().push(i);
    }

    let mut marked = 0;
    for sentence in sentences {
        let chars: Vec<char> = sentence.chinese.chars().collect();
        for start in 0..chars.len() {
            for len in 1..=MAX_WORD_CHARS {
                if start + len > chars.len() {
                    break;
                }
                let word: String = chars[start..start + len].iter().collect();
                let Some(indices) = by_word.get(&word) else {
                    continue;
                };
                for &i in indices {
                    if !entries[i].has_examples {
                        entries[i].has_examples = true;
                        marked += 1;
                    }
                }
            }
        }
    }
    marked
}
