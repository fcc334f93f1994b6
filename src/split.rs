use rand::{seq::index, Rng};

use crate::error::{BayesError, Result};

/// Disjoint train/test document indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Holds out `test_size` of the indices `0..total` in a single draw from `rng`.
///
/// Both halves come back sorted. At least one document must remain on each side.
pub fn split_indices<R: Rng + ?Sized>(total: usize, test_size: usize, rng: &mut R) -> Result<Split> {
    if test_size == 0 || test_size >= total {
        return Err(BayesError::InvalidSplit { test_size, total });
    }

    let mut held_out = vec![false; total];
    for i in index::sample(rng, total, test_size) {
        held_out[i] = true;
    }

    let (test, train): (Vec<usize>, Vec<usize>) = (0..total).partition(|&i| held_out[i]);
    Ok(Split { train, test })
}
