use crate::error::{BayesError, Result};

/// A document encoded against a vocabulary: element `i` counts token `i`.
///
/// Presence vectors hold only 0 and 1; count vectors hold term frequencies.
/// The length is fixed at construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocVector {
    counts: Vec<u32>,
}

impl DocVector {
    pub fn zeros(len: usize) -> Self {
        DocVector {
            counts: vec![0; len],
        }
    }

    /// Wraps raw counts, checking they line up with a vocabulary of `expected` tokens.
    pub fn from_counts(expected: usize, counts: Vec<u32>) -> Result<Self> {
        if counts.len() != expected {
            return Err(BayesError::LengthMismatch {
                expected,
                found: counts.len(),
            });
        }
        Ok(DocVector { counts })
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    pub(crate) fn set(&mut self, index: usize) {
        self.counts[index] = 1;
    }

    pub(crate) fn increment(&mut self, index: usize) {
        self.counts[index] += 1;
    }

    /// Total number of hits in the document.
    pub fn sum(&self) -> f64 {
        self.counts.iter().map(|&c| c as f64).sum()
    }

    /// Element-wise `acc += self`.
    pub fn add_into(&self, acc: &mut [f64]) -> Result<()> {
        if acc.len() != self.counts.len() {
            return Err(BayesError::LengthMismatch {
                expected: acc.len(),
                found: self.counts.len(),
            });
        }
        for (a, &c) in acc.iter_mut().zip(&self.counts) {
            *a += c as f64;
        }
        Ok(())
    }

    /// Dot product against a weight vector of the same length.
    pub fn dot(&self, weights: &[f64]) -> f64 {
        debug_assert_eq!(weights.len(), self.counts.len());
        self.counts
            .iter()
            .zip(weights)
            .filter(|(&c, _)| c != 0)
            .map(|(&c, w)| c as f64 * w)
            .sum()
    }
}
