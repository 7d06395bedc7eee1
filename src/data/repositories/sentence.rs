use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::data::models::SentenceExample;
use crate::schema::sentences;

pub struct SentenceRepository;

impl SentenceRepository {
    /// Random sample of sentences whose Chinese text contains `text`.
    pub fn sample_containing(
        conn: &mut SqliteConnection,
        text: &str,
        limit: i64,
    ) -> QueryResult<Vec<SentenceExample>> {
        let pattern = format!("%{}%", text);
        sentences::table
            .filter(sentences::chinese.like(pattern))
            .order(sql::<Integer>("RANDOM()"))
            .limit(limit)
            .select(SentenceExample::as_select())
            .load(conn)
    }
}
