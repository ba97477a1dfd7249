//! The static question catalog: record types and the startup loader.

pub(crate) mod loader;
pub(crate) mod models;
pub(crate) mod types;

use std::path::PathBuf;

use thiserror::Error;

/// Every variant is fatal: the service refuses to start on a partial catalog.
#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("failed to read question catalog {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("question catalog has invalid format")]
    Parse(#[from] serde_json::Error),
    #[error("question catalog is empty")]
    Empty,
    #[error("duplicate question id {0}")]
    DuplicateId(i64),
    #[error("question {id}: {field} must not be blank")]
    BlankField { id: i64, field: &'static str },
    #[error("question {0} has no choices")]
    NoChoices(i64),
    #[error("question {id}: answer index {index} is outside {choices} choices")]
    AnswerOutOfRange { id: i64, index: usize, choices: usize },
    #[error("question {0}: time limit must be positive")]
    ZeroTimeLimit(i64),
}
