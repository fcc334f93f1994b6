use std::collections::HashMap;

use crate::vocab::Vocabulary;

/// How many of the most frequent tokens the region-bias run drops.
pub const DEFAULT_TOP_K: usize = 30;

/// The `k` vocabulary tokens occurring most often in `full_text`, with their counts.
///
/// Sorted by count descending; equal counts keep vocabulary order.
pub fn most_frequent<T: AsRef<str>>(
    vocab: &Vocabulary,
    full_text: &[T],
    k: usize,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in full_text {
        if let Some(count) = counts.get_mut(token.as_ref()) {
            *count += 1;
        } else if vocab.contains(token.as_ref()) {
            counts.insert(token.as_ref(), 1);
        }
    }

    let mut freqs: Vec<(String, usize)> = vocab
        .tokens()
        .iter()
        .map(|t| (t.clone(), counts.get(t.as_str()).copied().unwrap_or(0)))
        .collect();
    // stable, so ties stay in vocabulary order
    freqs.sort_by(|a, b| b.1.cmp(&a.1));
    freqs.truncate(k);
    freqs
}
