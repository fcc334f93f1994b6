use std::cmp::Ordering;

use crate::{
    error::{BayesError, Result},
    label::Label,
    vector::DocVector,
    vectorize::VectorMode,
    vocab::Vocabulary,
};

/// Pseudo-count added to every word of a class.
const WORD_PSEUDO_COUNT: f64 = 1.0;
/// Pseudo-total added to every class denominator, independent of vocabulary size.
const CLASS_PSEUDO_TOTAL: f64 = 2.0;

/// Two-class naive Bayes model over document vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayesClassifier {
    log_prob0: Vec<f64>,
    log_prob1: Vec<f64>,
    prior_class1: f64,
}

/// Words whose class-conditional log-probability clears a threshold, per class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopWords {
    pub class0: Vec<(String, f64)>,
    pub class1: Vec<(String, f64)>,
}

impl NaiveBayesClassifier {
    /// Estimates smoothed log word probabilities for both classes and the class-1 prior.
    pub fn train(matrix: &[DocVector], labels: &[Label]) -> Result<Self> {
        if matrix.len() != labels.len() {
            return Err(BayesError::LabelCountMismatch {
                documents: matrix.len(),
                labels: labels.len(),
            });
        }
        let num_docs = matrix.len();
        let num_words = match matrix.first() {
            Some(first) => first.len(),
            None => return Err(BayesError::EmptyTrainingSet),
        };
        if num_words == 0 {
            return Err(BayesError::EmptyVocabulary);
        }

        let num_class1 = labels.iter().filter(|l| l.is_one()).count();
        let prior_class1 = num_class1 as f64 / num_docs as f64;

        // Word counts per class, starting from the smoothing floor:
        let mut num0 = vec![WORD_PSEUDO_COUNT; num_words];
        let mut num1 = vec![WORD_PSEUDO_COUNT; num_words];
        let mut denom0 = CLASS_PSEUDO_TOTAL;
        let mut denom1 = CLASS_PSEUDO_TOTAL;

        for (vector, label) in matrix.iter().zip(labels) {
            match label {
                Label::One => {
                    vector.add_into(&mut num1)?;
                    denom1 += vector.sum();
                }
                Label::Zero => {
                    vector.add_into(&mut num0)?;
                    denom0 += vector.sum();
                }
            }
        }

        log::debug!(
            "trained on {} documents ({} in class 1), {} words, denominators {} / {}",
            num_docs,
            num_class1,
            num_words,
            denom0,
            denom1
        );

        Ok(NaiveBayesClassifier {
            log_prob0: num0.iter().map(|n| (n / denom0).ln()).collect(),
            log_prob1: num1.iter().map(|n| (n / denom1).ln()).collect(),
            prior_class1,
        })
    }

    /// Vectorizes tokenized documents against `vocab` and trains on them.
    pub fn fit<D, T>(
        vocab: &Vocabulary,
        documents: &[D],
        labels: &[Label],
        mode: VectorMode,
    ) -> Result<Self>
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        let matrix: Vec<DocVector> = documents
            .iter()
            .map(|doc| mode.vectorize(vocab, doc.as_ref()))
            .collect();
        Self::train(&matrix, labels)
    }

    pub fn log_prob0(&self) -> &[f64] {
        &self.log_prob0
    }

    pub fn log_prob1(&self) -> &[f64] {
        &self.log_prob1
    }

    pub fn prior_class1(&self) -> f64 {
        self.prior_class1
    }

    /// Number of vocabulary entries the model was trained on.
    pub fn num_words(&self) -> usize {
        self.log_prob0.len()
    }

    /// Unnormalized log posteriors `(class 0, class 1)`.
    pub fn scores(&self, vector: &DocVector) -> (f64, f64) {
        let score1 = vector.dot(&self.log_prob1) + self.prior_class1.ln();
        let score0 = vector.dot(&self.log_prob0) + (1.0 - self.prior_class1).ln();
        (score0, score1)
    }

    /// Picks the class with the larger log posterior; ties go to class 0.
    ///
    /// The vector must come from the vocabulary the model was trained on.
    pub fn classify(&self, vector: &DocVector) -> Label {
        let (score0, score1) = self.scores(vector);
        Label::from(score1 > score0)
    }

    /// Like [`classify`](Self::classify), but rejects vectors of the wrong length.
    pub fn classify_checked(&self, vector: &DocVector) -> Result<Label> {
        if vector.len() != self.num_words() {
            return Err(BayesError::LengthMismatch {
                expected: self.num_words(),
                found: vector.len(),
            });
        }
        Ok(self.classify(vector))
    }

    /// Tokens with log-probability above `threshold` in each class, most probable first.
    pub fn top_words(&self, vocab: &Vocabulary, threshold: f64) -> TopWords {
        let pick = |log_probs: &[f64]| {
            let mut words: Vec<(String, f64)> = vocab
                .tokens()
                .iter()
                .zip(log_probs)
                .filter(|(_, &p)| p > threshold)
                .map(|(t, &p)| (t.clone(), p))
                .collect();
            words.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
            words
        };

        TopWords {
            class0: pick(&self.log_prob0),
            class1: pick(&self.log_prob1),
        }
    }
}
