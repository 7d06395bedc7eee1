use axum::{
    extract::{Query, State},
    response::Html,
    Extension, Json,
};
use std::sync::Arc;
use tera::{Context, Tera};
use validator::Validate;

use crate::{
    config::SearchConfig,
    data::models::{DictionaryError, SearchPage, SearchParams},
    data::store::DbPool,
    features::search::SearchEngine,
    utils::render_template,
};

pub type SearchState = (DbPool, Arc<SearchConfig>);

/// Runs the blocking search on a pooled connection that lives only as long
/// as the task.
async fn run_search(
    pool: DbPool,
    config: Arc<SearchConfig>,
    params: SearchParams,
) -> Result<SearchPage, DictionaryError> {
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        SearchEngine::search(&mut conn, &params.q, params.page(), &config)
    })
    .await?
}

// Handler for HTML page
pub async fn search_page(
    Extension(templates): Extension<Arc<Tera>>,
    State((pool, config)): State<SearchState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, DictionaryError> {
    params.validate()?;
    if params.q.trim().is_empty() {
        return Ok(render_template(&templates, "index.html", Context::new()));
    }

    let page = run_search(pool, config, params).await?;

    let mut context = Context::new();
    context.insert("query", &page.query);
    context.insert("results", &page.results);
    context.insert("page", &page.page);
    context.insert("total_pages", &page.total_pages);
    context.insert("total_results", &page.total_results);
    context.insert("results_per_page", &page.page_size);
    Ok(render_template(&templates, "results.html", context))
}

pub async fn search_api(
    State((pool, config)): State<SearchState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>, DictionaryError> {
    params.validate()?;
    let page = run_search(pool, config, params).await?;
    Ok(Json(page))
}
