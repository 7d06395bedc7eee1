use axum::{
    extract::{Query, State},
    response::Html,
    Extension, Json,
};
use std::sync::Arc;
use tera::{Context, Tera};
use validator::Validate;

use crate::{
    data::models::{AnalyzeParams, AnalyzedSegment, DictionaryError},
    data::store::DbPool,
    features::analyze::{analyze, resolve_text, JiebaSegmenter},
    utils::render_template,
};

pub type AnalyzeState = (DbPool, Arc<JiebaSegmenter>);

async fn run_analysis(
    pool: DbPool,
    segmenter: Arc<JiebaSegmenter>,
    text: String,
) -> Result<Vec<AnalyzedSegment>, DictionaryError> {
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        let segments = analyze(&mut conn, segmenter.as_ref(), &text)?;
        Ok::<_, DictionaryError>(segments)
    })
    .await?
}

pub async fn analyze_page(
    Extension(templates): Extension<Arc<Tera>>,
    State((pool, segmenter)): State<AnalyzeState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Html<String>, DictionaryError> {
    params.validate()?;

    let mut context = Context::new();
    match resolve_text(params.text.as_deref()) {
        Some(text) => {
            let segments = run_analysis(pool, segmenter, text.clone()).await?;
            context.insert("text", &text);
            context.insert("analyzed_segments", &segments);
        }
        None => {
            context.insert("text", "");
            context.insert("analyzed_segments", &Vec::<AnalyzedSegment>::new());
        }
    }
    Ok(render_template(&templates, "analyze.html", context))
}

pub async fn analyze_api(
    State((pool, segmenter)): State<AnalyzeState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Json<Vec<AnalyzedSegment>>, DictionaryError> {
    params.validate()?;
    let segments = match resolve_text(params.text.as_deref()) {
        Some(text) => run_analysis(pool, segmenter, text).await?,
        None => Vec::new(),
    };
    Ok(Json(segments))
}
