pub mod analyze;
pub mod pages;
pub mod search;

use axum::{
    extract::Extension,
    routing::{get, get_service},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tera::Tera;
use tower_http::services::ServeDir;

use crate::config::SearchConfig;
use crate::data::store::DbPool;
use crate::features::analyze::JiebaSegmenter;

pub fn app_router(
    pool: DbPool,
    templates: Arc<Tera>,
    config: Arc<SearchConfig>,
    segmenter: Arc<JiebaSegmenter>,
    static_dir: &Path,
) -> Router {
    // Search routes need the pool and the search configuration
    let search_router = Router::new()
        .route("/search", get(search::search_page))
        .with_state((pool.clone(), config.clone()));

    // Analyzer routes need the pool and the segmenter
    let analyze_router = Router::new()
        .route("/analyze", get(analyze::analyze_page))
        .with_state((pool.clone(), segmenter.clone()));

    let api_router = Router::new()
        .merge(
            Router::new()
                .route("/search", get(search::search_api))
                .with_state((pool.clone(), config)),
        )
        .merge(
            Router::new()
                .route("/analyze", get(analyze::analyze_api))
                .with_state((pool, segmenter)),
        );

    Router::new()
        // Static pages
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .merge(search_router)
        .merge(analyze_router)
        .nest("/api", api_router)
        .nest_service("/static", get_service(ServeDir::new(static_dir)))
        .layer(Extension(templates))
}
