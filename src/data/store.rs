use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel::prelude::*;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Tables, indices and the external-content FTS5 index over `dictionary`.
pub const SCHEMA_SQL: &str = r#"
DROP TABLE IF EXISTS dictionary_fts;
DROP TABLE IF EXISTS dictionary;
DROP TABLE IF EXISTS sentences;

CREATE TABLE dictionary (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    traditional TEXT NOT NULL,
    simplified TEXT NOT NULL,
    pinyin TEXT NOT NULL,
    pinyin_clean TEXT NOT NULL,
    pinyin_numbered TEXT NOT NULL,
    pinyin_marks TEXT NOT NULL,
    definitions TEXT NOT NULL,
    has_examples BOOLEAN NOT NULL DEFAULT 0,
    has_stroke BOOLEAN NOT NULL DEFAULT 0,
    hsk_level INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_traditional ON dictionary(traditional);
CREATE INDEX idx_simplified ON dictionary(simplified);
CREATE INDEX idx_pinyin_clean ON dictionary(pinyin_clean);
CREATE INDEX idx_pinyin_numbered ON dictionary(pinyin_numbered);
CREATE INDEX idx_has_examples ON dictionary(has_examples);
CREATE INDEX idx_hsk_level ON dictionary(hsk_level);

CREATE TABLE sentences (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    chinese TEXT NOT NULL,
    english TEXT NOT NULL
);

CREATE INDEX idx_sentences_chinese ON sentences(chinese);

CREATE VIRTUAL TABLE dictionary_fts USING fts5(
    traditional, simplified, pinyin, definitions,
    content='dictionary',
    content_rowid='id'
);
"#;

pub const FTS_POPULATE_SQL: &str = r#"
INSERT INTO dictionary_fts(rowid, traditional, simplified, pinyin, definitions)
SELECT id, traditional, simplified, pinyin, definitions FROM dictionary;
"#;

pub fn build_pool(database_url: &str, max_size: u32) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().max_size(max_size).build(manager)
}

/// Drops and recreates every table the search service reads.
pub fn create_schema(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute(SCHEMA_SQL)
}

pub fn populate_full_text_index(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute(FTS_POPULATE_SQL)
}
