use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::features::search::ScoringWeights;

#[derive(Debug, Parser)]
#[command(name = "zwcd", version, about = "Chinese dictionary lookup service")]
pub struct Cli {
    /// SQLite database produced by `ingest`
    #[arg(long, env = "DATABASE_URL", default_value = "resources/dictionary.db", global = true)]
    pub database_url: String,

    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rebuild the dictionary database from the source files
    Ingest(IngestArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
    pub bind: String,

    #[arg(long, env = "TEMPLATES_GLOB", default_value = "templates/**/*.html")]
    pub templates: String,

    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    #[arg(long, env = "RESULTS_PER_PAGE", default_value_t = 20)]
    pub page_size: usize,

    #[arg(long, env = "DB_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,
}

#[derive(Debug, Clone, Args)]
pub struct IngestArgs {
    /// CC-CEDICT dictionary file
    #[arg(long, default_value = "resources/cedict_ts.u8")]
    pub cedict: PathBuf,

    /// Tab-separated Chinese/English sentence pairs
    #[arg(long, default_value = "resources/en_cn_sentence_pairs.tsv")]
    pub sentences: PathBuf,

    /// HSK 3.0 word list (CSV)
    #[arg(long, default_value = "resources/hsk30.csv")]
    pub hsk: PathBuf,
}

/// Tunables of the search pipeline, shared by every request.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub page_size: usize,
    /// Example sentences per result
    pub example_limit: i64,
    /// Glosses kept per character in a breakdown
    pub breakdown_definitions: usize,
    pub weights: ScoringWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            page_size: 20,
            example_limit: 3,
            breakdown_definitions: 3,
            weights: ScoringWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn from_args(args: &ServeArgs) -> Self {
        SearchConfig {
            page_size: args.page_size.max(1),
            ..SearchConfig::default()
        }
    }
}
