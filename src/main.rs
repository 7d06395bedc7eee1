use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use env_logger::Env;
use tera::Tera;
use tokio::net::TcpListener;

mod config;
mod data;
mod features;
mod handlers;
mod schema;
mod utils;

use config::{Cli, Command, SearchConfig, ServeArgs};
use data::store;
use features::analyze::JiebaSegmenter;
use features::ingest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Ingest(args)) => {
            let database_url = cli.database_url.clone();
            let summary =
                tokio::task::spawn_blocking(move || ingest::run(&database_url, &args)).await??;
            log::info!(
                "Ingested {} entries ({} with examples), {} sentences, {} HSK words into {}",
                summary.entries,
                summary.with_examples,
                summary.sentences,
                summary.hsk_words,
                cli.database_url
            );
            Ok(())
        }
        None => serve(&cli.database_url, &cli.serve).await,
    }
}

async fn serve(database_url: &str, args: &ServeArgs) -> anyhow::Result<()> {
    // Database configuration
    let pool = store::build_pool(database_url, args.pool_size)
        .with_context(|| format!("failed to open database {}", database_url))?;

    // Templates configuration
    let templates = Tera::new(&args.templates).context("template parsing error")?;
    let templates = Arc::new(templates);

    let segmenter = Arc::new(JiebaSegmenter::new());
    let config = Arc::new(SearchConfig::from_args(args));

    let app = handlers::app_router(pool, templates, config, segmenter, &args.static_dir);

    // Start server
    let listener = TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("failed to bind to address {}", args.bind))?;

    log::info!("Server running on http://{}", args.bind);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
