//! Settings for a hold-out evaluation run.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{error::Result, freq::DEFAULT_TOP_K, vectorize::VectorMode};

/// Log-probability a word must exceed to show up in a top-words report.
pub const DEFAULT_WORD_THRESHOLD: f64 = -6.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Documents held out for testing.
    pub test_size: usize,
    /// Most frequent tokens removed from the vocabulary; 0 keeps everything.
    pub top_k: usize,
    pub mode: VectorMode,
    /// Seed for the split; `None` draws from the OS.
    pub seed: Option<u64>,
    pub word_threshold: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::spam()
    }
}

impl EvalConfig {
    /// Set-of-words run over the spam/ham directories.
    pub fn spam() -> Self {
        Self {
            test_size: 10,
            top_k: 0,
            mode: VectorMode::Presence,
            seed: None,
            word_threshold: DEFAULT_WORD_THRESHOLD,
        }
    }

    /// Bag-of-words run over two feeds with stop words stripped.
    pub fn feeds() -> Self {
        Self {
            test_size: 20,
            top_k: DEFAULT_TOP_K,
            mode: VectorMode::Count,
            ..Self::spam()
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
