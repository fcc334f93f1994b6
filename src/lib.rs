//! Two-class naive Bayes text classification.
//!
//! Documents are token sequences. A [`Vocabulary`] fixes an index for every
//! token, documents become [`DocVector`]s against it, and
//! [`NaiveBayesClassifier`] learns smoothed log word probabilities per class
//! and classifies by comparing log posteriors.

pub mod bayes;
pub mod config;
pub mod corpus;
pub mod decode;
pub mod error;
pub mod eval;
pub mod feed;
pub mod freq;
pub mod label;
pub mod split;
pub mod tokenize;
pub mod vector;
pub mod vectorize;
pub mod vocab;

pub use bayes::{NaiveBayesClassifier, TopWords};
pub use config::EvalConfig;
pub use corpus::Corpus;
pub use error::{BayesError, Result};
pub use eval::{evaluate, evaluate_seeded, Evaluation};
pub use label::Label;
pub use vector::DocVector;
pub use vectorize::{count_vector, presence_vector, VectorMode};
pub use vocab::Vocabulary;
