use std::collections::{HashMap, HashSet};

/// Distinct tokens of a corpus in first-seen order.
///
/// Index `i` of every [`DocVector`](crate::DocVector) built against this
/// vocabulary refers to `tokens()[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Collects every distinct token across the documents.
    pub fn build<D, T>(documents: &[D]) -> Self
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut vocab = Vocabulary::default();
        for document in documents {
            for token in document.as_ref() {
                vocab.insert(token.as_ref());
            }
        }
        vocab
    }

    fn insert(&mut self, token: &str) {
        if !self.index.contains_key(token) {
            self.index.insert(token.to_string(), self.tokens.len());
            self.tokens.push(token.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// A new vocabulary with the given tokens removed, keeping the order of the rest.
    pub fn without<I, T>(&self, removed: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let removed: HashSet<String> = removed
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect();

        let mut vocab = Vocabulary::default();
        for token in self.tokens.iter().filter(|t| !removed.contains(*t)) {
            vocab.insert(token);
        }
        vocab
    }
}
