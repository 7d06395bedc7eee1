use axum::{extract::Extension, response::IntoResponse};
use std::sync::Arc;
use tera::{Context, Tera};

use crate::utils::render_template;

// Handlers for static pages
pub async fn home(Extension(templates): Extension<Arc<Tera>>) -> impl IntoResponse {
    render_template(&templates, "index.html", Context::new())
}

pub async fn about(Extension(templates): Extension<Arc<Tera>>) -> impl IntoResponse {
    render_template(&templates, "about.html", Context::new())
}
