//! Error types shared across the crate

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by document I/O, configuration and parsing
///
/// Shortfalls during augmentation are not errors; they are reported through
/// [`crate::augment::AugmentOutcome`].
#[derive(Debug, Error)]
pub enum CorpGraphError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown sector: {0}")]
    UnknownSector(String),

    #[error("Unknown relationship type: {0}")]
    UnknownRelationKind(String),

    #[error("Relationship type {0} has no description templates")]
    NotAugmentable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CorpGraphError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CorpGraphError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type CorpGraphResult<T> = Result<T, CorpGraphError>;
