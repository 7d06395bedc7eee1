use std::collections::BTreeSet;

use diesel::prelude::*;

use crate::data::models::{DictionaryEntry, Hit, MatchType, MergedResult, split_definitions};
use crate::features::ingest::{self, hsk};

pub const CEDICT_FIXTURE: &str = "\
# CC-CEDICT fixture
% comment line
你好 你好 [ni3 hao3] /hello/hi/
你 你 [ni3] /you (informal)/
好 好 [hao3] /good/well/
好 好 [hao4] /to be fond of/
中國 中国 [Zhong1 guo2] /China/
中 中 [zhong1] /China/Chinese/surname Zhong/middle/
國 国 [guo2] /country/nation/state/
綠 绿 [lu:4] /green/
乾淨 干净 [gan1 jing4] /clean/neat/
幹淨 干净 [gan1 jing4] /variant of 乾淨|干净[gan1 jing4]/clean/
喂 喂 [wei4] /hello (when answering the phone)/
電腦 电脑 [dian4 nao3] /computer/
３Ｃ 3C [san1 C] /computers, communications, and consumer electronics/
";

pub const SENTENCES_FIXTURE: &str = "\
1\t你好，很高兴认识你。\t2\tHello, nice to meet you.\r
3\t中国很大。\t4\tChina is big.
5\t我的电脑坏了。\t6\tMy computer is broken.
broken line without tabs
";

pub const HSK_FIXTURE: &str = "\
ID,Simplified,Pinyin,Level
1,你好,nǐhǎo,1
2,好,hǎo,1
3,中国,zhōngguó,1
4,绿,lǜ,3
5,干净,gānjìng,2
6,爸爸|爸,\"bàba, bà\",1
7,电脑,diànnǎo,7-9
";

/// In-memory database loaded with the fixtures through the ingestion path.
pub fn seeded_connection() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:").expect("in-memory sqlite");
    let hsk = hsk::parse_hsk_csv(HSK_FIXTURE);
    ingest::load_into(&mut conn, CEDICT_FIXTURE, SENTENCES_FIXTURE, &hsk)
        .expect("fixture ingestion");
    conn
}

pub fn sample_entry(id: i32, simplified: &str, traditional: &str, marks: &str, definitions: &str) -> DictionaryEntry {
    DictionaryEntry {
        id,
        traditional: traditional.to_string(),
        simplified: simplified.to_string(),
        pinyin: String::new(),
        pinyin_clean: String::new(),
        pinyin_numbered: String::new(),
        pinyin_marks: marks.to_string(),
        definitions: definitions.to_string(),
        has_examples: true,
        has_stroke: true,
        hsk_level: 0,
    }
}

pub fn sample_hit(entry: DictionaryEntry, match_type: MatchType, fts_rank: Option<f64>) -> Hit {
    Hit { entry, match_type, fts_rank }
}

pub fn sample_result(entry: DictionaryEntry, match_type: MatchType, fts_rank: Option<f64>) -> MergedResult {
    MergedResult {
        traditional_variants: BTreeSet::from([entry.traditional.clone()]),
        definition_list: split_definitions(&entry.definitions),
        entry,
        match_type,
        fts_rank,
    }
}
