pub mod engine;
pub mod enrich;
pub mod error_responses;
pub mod matcher;
pub mod merger;
pub mod normalizer;
pub mod paginate;
pub mod scoring;

pub use engine::SearchEngine;
pub use enrich::EnrichmentService;
pub use matcher::collect_hits;
pub use merger::merge_hits;
pub use normalizer::NormalizedQuery;
pub use paginate::paginate;
pub use scoring::{MatchPriority, ScoringWeights};
