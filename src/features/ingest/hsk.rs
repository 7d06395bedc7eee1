use std::collections::HashMap;

use csv::ReaderBuilder;

/// HSK level per simplified word; the lowest level wins for repeated words.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HskTable {
    levels: HashMap<String, i32>,
}

impl HskTable {
    pub fn level(&self, simplified: &str) -> i32 {
        self.levels.get(simplified).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    fn record(&mut self, word: &str, level: i32) {
        self.levels
            .entry(word.to_string())
            .and_modify(|current| *current = (*current).min(level))
            .or_insert(level);
    }
}

/// `"3"` -> 3, `"7-9"` -> 7.
fn parse_level(raw: &str) -> Option<i32> {
    raw.split('-').next()?.trim().parse().ok()
}

/// Parses the HSK word list. Needs `Level` and `Simplified` header columns;
/// the simplified column may list `|`-separated variants.
pub fn parse_hsk_csv(content: &str) -> HskTable {
    let mut table = HskTable::default();
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.trim_start_matches('\u{feff}').as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            log::warn!("Failed to read HSK headers: {}", e);
            return table;
        }
    };
    let column = |name: &str| headers.iter().position(|h| h == name);
    let (Some(level_col), Some(word_col)) = (column("Level"), column("Simplified")) else {
        log::warn!("HSK list is missing the Level or Simplified column");
        return table;
    };

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Skipping malformed HSK row: {}", e);
                continue;
            }
        };
        let (Some(level), Some(words)) = (record.get(level_col), record.get(word_col)) else {
            continue;
        };
        let Some(level) = parse_level(level) else {
            log::warn!("Skipping HSK row with level {:?}", level);
            continue;
        };
        for word in words.split('|').map(str::trim).filter(|w| !w.is_empty()) {
            table.record(word, level);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::HSK_FIXTURE;

    #[test]
    fn test_parse_levels_and_variants() {
        let table = parse_hsk_csv(HSK_FIXTURE);
        assert_eq!(table.level("你好"), 1);
        assert_eq!(table.level("爸"), 1);
        assert_eq!(table.level("爸爸"), 1);
        assert_eq!(table.level("电脑"), 7);
        assert_eq!(table.level("绿"), 3);
        assert_eq!(table.level("不在"), 0);
    }

    #[test]
    fn test_lowest_level_wins() {
        let table = parse_hsk_csv("Simplified,Level\n好,3\n好,1\n好,2\n");
        assert_eq!(table.level("好"), 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_columns_give_empty_table() {
        assert!(parse_hsk_csv("Word,Band\n好,1\n").is_empty());
        assert!(parse_hsk_csv("").is_empty());
    }

    #[test]
    fn test_quoted_fields_may_span_lines() {
        let table = parse_hsk_csv("ID,Simplified,Pinyin,Level\n1,\"猫\",\"māo\nmao1\",2\n2,狗,gǒu,3\n");
        assert_eq!(table.level("猫"), 2);
        assert_eq!(table.level("狗"), 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let table = parse_hsk_csv("\u{feff}Simplified,Level\n好,1\n");
        assert_eq!(table.level("好"), 1);
    }
}
