use diesel::ConnectionError;
use diesel::r2d2::PoolError;
use diesel::result::Error as DieselError;
use thiserror::Error;
use tokio::task::JoinError;

// Errors surfaced by the lookup endpoints (search and analyze)
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Database unavailable")]
    PoolError(#[from] PoolError),
    #[error("Database error")]
    DatabaseError(#[from] DieselError),
    #[error("Background task failed")]
    TaskError(#[from] JoinError),
    #[error("Invalid input: {0}")]
    ValidationError(String),
}

// Errors raised while building the dictionary database
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),
    #[error("Database error: {0}")]
    Database(#[from] DieselError),
    #[error("Malformed input: {0}")]
    Format(String),
}
