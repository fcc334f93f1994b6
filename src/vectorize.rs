use serde::{Deserialize, Serialize};

use crate::{vector::DocVector, vocab::Vocabulary};

/// How repeated tokens are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorMode {
    /// Set-of-words: 1 if the token occurs at all.
    #[default]
    Presence,
    /// Bag-of-words: number of occurrences.
    Count,
}

impl VectorMode {
    pub fn vectorize<T: AsRef<str>>(self, vocab: &Vocabulary, document: &[T]) -> DocVector {
        match self {
            VectorMode::Presence => presence_vector(vocab, document),
            VectorMode::Count => count_vector(vocab, document),
        }
    }
}

/// Marks each vocabulary token present in the document.
pub fn presence_vector<T: AsRef<str>>(vocab: &Vocabulary, document: &[T]) -> DocVector {
    let mut vector = DocVector::zeros(vocab.len());
    for token in document {
        let token = token.as_ref();
        match vocab.index_of(token) {
            Some(i) => vector.set(i),
            None => log::warn!("the word: {} is not in the vocabulary", token),
        }
    }
    vector
}

/// Counts each occurrence of a vocabulary token in the document.
pub fn count_vector<T: AsRef<str>>(vocab: &Vocabulary, document: &[T]) -> DocVector {
    let mut vector = DocVector::zeros(vocab.len());
    for token in document {
        let token = token.as_ref();
        match vocab.index_of(token) {
            Some(i) => vector.increment(i),
            None => log::debug!("skipping out-of-vocabulary word: {}", token),
        }
    }
    vector
}
