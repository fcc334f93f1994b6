//! Error types for the classifier and its corpus sources.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading a corpus, training, or evaluating.
#[derive(Debug, Error)]
pub enum BayesError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("feed error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),

    /// Documents and labels were not paired one to one.
    #[error("{documents} documents but {labels} labels")]
    LabelCountMismatch { documents: usize, labels: usize },

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("vocabulary is empty")]
    EmptyVocabulary,

    /// A document vector does not match the vocabulary it should have been built from.
    #[error("vector length {found} does not match vocabulary length {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("invalid label {0:?}, expected 0 or 1")]
    InvalidLabel(String),

    #[error("cannot hold out {test_size} of {total} documents")]
    InvalidSplit { test_size: usize, total: usize },

    #[error("corpus error: {0}")]
    Corpus(String),
}

impl BayesError {
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        BayesError::Corpus(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, BayesError>;
