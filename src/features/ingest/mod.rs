//! One-shot build of the dictionary database from CC-CEDICT, a
//! Chinese/English sentence corpus and the HSK word list.

pub mod cedict;
pub mod hsk;
pub mod sentences;

use std::fs;

use diesel::prelude::*;

use crate::config::IngestArgs;
use crate::data::models::{IngestError, NewDictionaryEntry};
use crate::data::store;
use crate::schema::{dictionary, sentences as sentences_table};

pub use hsk::HskTable;

/// Rows per INSERT statement, below SQLite's bound-parameter limit.
const INSERT_CHUNK: usize = 500;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub entries: usize,
    pub sentences: usize,
    pub with_examples: usize,
    pub hsk_words: usize,
}

/// Reads the source files and rebuilds the database at `database_url`.
pub fn run(database_url: &str, args: &IngestArgs) -> Result<IngestSummary, IngestError> {
    log::info!("Reading HSK word list from {}", args.hsk.display());
    let hsk = match fs::read_to_string(&args.hsk) {
        Ok(content) => hsk::parse_hsk_csv(&content),
        Err(e) => {
            log::warn!("Could not read HSK file {}: {}", args.hsk.display(), e);
            HskTable::default()
        }
    };

    log::info!("Reading dictionary file {}", args.cedict.display());
    let cedict = fs::read_to_string(&args.cedict)?;

    log::info!("Reading sentence pairs from {}", args.sentences.display());
    let sentence_pairs = fs::read_to_string(&args.sentences)?;

    let mut conn = SqliteConnection::establish(database_url)?;
    load_into(&mut conn, &cedict, &sentence_pairs, &hsk)
}

/// Recreates the schema on `conn` and loads already-read source texts into it.
pub fn load_into(
    conn: &mut SqliteConnection,
    cedict_content: &str,
    sentence_content: &str,
    hsk: &HskTable,
) -> Result<IngestSummary, IngestError> {
    let mut entries = cedict::parse_cedict(cedict_content);
    if entries.is_empty() {
        return Err(IngestError::Format("no dictionary entries found".into()));
    }
    for entry in entries.iter_mut() {
        entry.hsk_level = hsk.level(&entry.simplified);
    }
    log::info!("Loaded {} dictionary entries", entries.len());

    let sentence_rows = sentences::parse_sentence_pairs(sentence_content);
    let with_examples = sentences::mark_examples(&mut entries, &sentence_rows);
    log::info!(
        "{} of {} entries have example sentences",
        with_examples,
        entries.len()
    );

    conn.transaction::<_, IngestError, _>(|conn| {
        store::create_schema(conn)?;
        insert_entries(conn, &entries)?;
        for chunk in sentence_rows.chunks(INSERT_CHUNK) {
            diesel::insert_into(sentences_table::table)
                .values(chunk)
                .execute(conn)?;
        }
        log::info!("Populating full-text index");
        store::populate_full_text_index(conn)?;
        Ok(())
    })?;

    Ok(IngestSummary {
        entries: entries.len(),
        sentences: sentence_rows.len(),
        with_examples,
        hsk_words: hsk.len(),
    })
}

fn insert_entries(conn: &mut SqliteConnection, entries: &[NewDictionaryEntry]) -> QueryResult<()> {
    for chunk in entries.chunks(INSERT_CHUNK) {
        diesel::insert_into(dictionary::table)
            .values(chunk)
            .execute(conn)?;
    }
    Ok(())
}
