//! Labeled, tokenized document collections and the places they come from.

use std::{fs, path::Path};

use encoding_rs::{Encoding, GBK};

use crate::{
    decode::decode_ignoring_malformed,
    error::{BayesError, Result},
    feed::read_feed_summaries,
    label::Label,
    tokenize::text_parse,
};

/// Number of numbered files per class in the spam/ham layout.
pub const DEFAULT_FILES_PER_CLASS: usize = 25;

/// Tokenized documents paired positionally with their labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Vec<String>>,
    labels: Vec<Label>,
}

impl Corpus {
    pub fn new(documents: Vec<Vec<String>>, labels: Vec<Label>) -> Result<Self> {
        if documents.len() != labels.len() {
            return Err(BayesError::LabelCountMismatch {
                documents: documents.len(),
                labels: labels.len(),
            });
        }
        Ok(Corpus { documents, labels })
    }

    pub fn push(&mut self, document: Vec<String>, label: Label) {
        self.documents.push(document);
        self.labels.push(label);
    }

    /// The six-posting set of normal (0) and abusive (1) messages.
    pub fn toy() -> Self {
        let postings: [&[&str]; 6] = [
            &["my", "dog", "has", "flea", "problem", "help", "please"],
            &["maybe", "not", "take", "him", "to", "dog", "park", "stupid"],
            &["my", "dalmation", "is", "so", "cute", "I", "love", "him"],
            &["stop", "posting", "stupid", "worthless", "garbage"],
            &["mr", "licks", "ate", "my", "steak", "how", "to", "stop", "him"],
            &["quit", "buying", "worthless", "dog", "food", "stupid"],
        ];
        let mut corpus = Corpus::default();
        for (i, posting) in postings.iter().enumerate() {
            let document = posting.iter().map(|w| w.to_string()).collect();
            corpus.push(document, Label::from(i % 2 == 1));
        }
        corpus
    }

    /// Reads `1.txt..=count.txt` from both directories, alternating class 1 and class 0.
    ///
    /// Files are GBK; malformed byte sequences are dropped.
    pub fn from_labeled_dirs<P: AsRef<Path>, Q: AsRef<Path>>(
        class1_dir: P,
        class0_dir: Q,
        count: usize,
    ) -> Result<Self> {
        Self::from_labeled_dirs_with_encoding(class1_dir, class0_dir, count, GBK)
    }

    pub fn from_labeled_dirs_with_encoding<P: AsRef<Path>, Q: AsRef<Path>>(
        class1_dir: P,
        class0_dir: Q,
        count: usize,
        encoding: &'static Encoding,
    ) -> Result<Self> {
        let mut corpus = Corpus::default();
        for i in 1..=count {
            for (dir, label) in [
                (class1_dir.as_ref(), Label::One),
                (class0_dir.as_ref(), Label::Zero),
            ] {
                let path = dir.join(format!("{i}.txt"));
                let bytes = fs::read(&path).map_err(|source| BayesError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
                corpus.push(text_parse(&decode_ignoring_malformed(&bytes, encoding)), label);
            }
        }
        Ok(corpus)
    }

    /// Reads a headed CSV whose first column is the label and second the text.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;

        let mut corpus = Corpus::default();
        for record in reader.records() {
            let record = record?;
            let (label, text) = match (record.get(0), record.get(1)) {
                (Some(label), Some(text)) => (label, text),
                _ => {
                    return Err(BayesError::corpus(
                        "csv record missing label or text entry.",
                    ))
                }
            };
            corpus.push(text_parse(text), label.parse()?);
        }
        Ok(corpus)
    }

    /// Pairs up entries of two feeds, truncated to the shorter one, alternating class 1 and class 0.
    pub fn from_feeds<P: AsRef<Path>, Q: AsRef<Path>>(feed1: P, feed0: Q) -> Result<Self> {
        let summaries1 = read_feed_summaries(feed1)?;
        let summaries0 = read_feed_summaries(feed0)?;
        Ok(Self::from_summaries(&summaries1, &summaries0))
    }

    pub fn from_summaries<S: AsRef<str>>(summaries1: &[S], summaries0: &[S]) -> Self {
        let mut corpus = Corpus::default();
        for (s1, s0) in summaries1.iter().zip(summaries0) {
            corpus.push(text_parse(s1.as_ref()), Label::One);
            corpus.push(text_parse(s0.as_ref()), Label::Zero);
        }
        corpus
    }

    pub fn documents(&self) -> &[Vec<String>] {
        &self.documents
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Every token of every document, in order.
    pub fn full_text(&self) -> Vec<&str> {
        self.documents
            .iter()
            .flat_map(|doc| doc.iter().map(String::as_str))
            .collect()
    }
}
