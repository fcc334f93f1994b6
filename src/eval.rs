//! Hold-out evaluation: build a vocabulary, train on one part of a corpus, count
//! mistakes on the rest.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    bayes::NaiveBayesClassifier,
    config::EvalConfig,
    corpus::Corpus,
    error::{BayesError, Result},
    freq::most_frequent,
    split::split_indices,
    vocab::Vocabulary,
};

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub error_rate: f64,
    pub errors: usize,
    pub tested: usize,
    /// Corpus indices of the test documents that were classified wrongly.
    pub misclassified: Vec<usize>,
    /// Frequent tokens stripped before vectorizing, with their counts.
    pub removed: Vec<(String, usize)>,
    pub vocabulary: Vocabulary,
    pub model: NaiveBayesClassifier,
}

/// Runs one evaluation, seeding the split from `config.seed` or the OS.
pub fn evaluate_seeded(corpus: &Corpus, config: &EvalConfig) -> Result<Evaluation> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    evaluate(corpus, config, &mut rng)
}

pub fn evaluate<R: Rng + ?Sized>(
    corpus: &Corpus,
    config: &EvalConfig,
    rng: &mut R,
) -> Result<Evaluation> {
    if corpus.is_empty() {
        return Err(BayesError::EmptyTrainingSet);
    }

    let mut vocabulary = Vocabulary::build(corpus.documents());
    let mut removed = Vec::new();
    if config.top_k > 0 {
        removed = most_frequent(&vocabulary, &corpus.full_text(), config.top_k);
        vocabulary = vocabulary.without(removed.iter().map(|(token, _)| token));
    }
    if vocabulary.is_empty() {
        return Err(BayesError::EmptyVocabulary);
    }

    let split = split_indices(corpus.len(), config.test_size, rng)?;

    let documents = corpus.documents();
    let labels = corpus.labels();
    let train_docs: Vec<&[String]> = split.train.iter().map(|&i| documents[i].as_slice()).collect();
    let train_labels: Vec<_> = split.train.iter().map(|&i| labels[i]).collect();
    let model = NaiveBayesClassifier::fit(&vocabulary, &train_docs, &train_labels, config.mode)?;

    let mut misclassified = Vec::new();
    for &i in &split.test {
        let vector = config.mode.vectorize(&vocabulary, &documents[i]);
        if model.classify_checked(&vector)? != labels[i] {
            misclassified.push(i);
        }
    }

    let errors = misclassified.len();
    let tested = split.test.len();
    let error_rate = errors as f64 / tested as f64;
    log::info!(
        "the error rate is: {} ({} of {} test documents)",
        error_rate,
        errors,
        tested
    );

    Ok(Evaluation {
        error_rate,
        errors,
        tested,
        misclassified,
        removed,
        vocabulary,
        model,
    })
}
