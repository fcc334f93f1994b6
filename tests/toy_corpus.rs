use bayes_text::{
    count_vector, presence_vector, Corpus, Label, NaiveBayesClassifier, VectorMode, Vocabulary,
};

fn toy_model() -> (Vocabulary, NaiveBayesClassifier) {
    let corpus = Corpus::toy();
    let vocab = Vocabulary::build(corpus.documents());
    let model = NaiveBayesClassifier::fit(
        &vocab,
        corpus.documents(),
        corpus.labels(),
        VectorMode::Presence,
    )
    .unwrap();
    (vocab, model)
}

#[test]
fn classifies_reference_entries() {
    let (vocab, model) = toy_model();

    let normal = presence_vector(&vocab, &["love", "my", "dalmation"]);
    assert_eq!(model.classify(&normal), Label::Zero);

    let abusive = presence_vector(&vocab, &["stupid", "garbage"]);
    assert_eq!(model.classify(&abusive), Label::One);
}

#[test]
fn trained_parameters_are_well_formed() {
    let (vocab, model) = toy_model();
    assert_eq!(model.prior_class1(), 0.5);
    assert_eq!(model.log_prob0().len(), vocab.len());
    assert_eq!(model.log_prob1().len(), vocab.len());
    assert!(model
        .log_prob0()
        .iter()
        .chain(model.log_prob1())
        .all(|p| p.is_finite() && *p < 0.0));

    // "stupid" shows up in every abusive posting and no normal one
    let stupid = vocab.index_of("stupid").unwrap();
    assert!(model.log_prob1()[stupid] > model.log_prob0()[stupid]);
    // 24 class-0 words plus the pseudo-total of 2
    let dog = vocab.index_of("dog").unwrap();
    assert!((model.log_prob0()[dog] - (2.0f64 / 26.0).ln()).abs() < 1e-12);
}

#[test]
fn class_prototypes_classify_to_their_class() {
    let (vocab, model) = toy_model();
    let prototype1 = presence_vector(&vocab, &["stupid", "worthless", "garbage", "posting"]);
    assert_eq!(model.classify(&prototype1), Label::One);
    let prototype0 = presence_vector(&vocab, &["cute", "dalmation", "love", "please", "help"]);
    assert_eq!(model.classify(&prototype0), Label::Zero);
}

#[test]
fn empty_document_votes_by_prior() {
    let (vocab, model) = toy_model();
    let empty: [&str; 0] = [];
    let vector = presence_vector(&vocab, &empty);
    assert_eq!(vector.len(), vocab.len());
    assert!(vector.as_slice().iter().all(|&x| x == 0));
    // equal priors tie, and ties go to class 0
    assert_eq!(model.classify(&vector), Label::Zero);
}

#[test]
fn vectors_count_hits_at_vocabulary_index() {
    let corpus = Corpus::toy();
    let vocab = Vocabulary::build(corpus.documents());
    for document in corpus.documents() {
        let presence = presence_vector(&vocab, document);
        let counts = count_vector(&vocab, document);
        for token in document {
            let i = vocab.index_of(token).unwrap();
            let occurrences = document.iter().filter(|t| *t == token).count() as u32;
            assert_eq!(presence.as_slice()[i], 1);
            assert_eq!(counts.as_slice()[i], occurrences);
        }
        assert_eq!(counts.sum(), document.len() as f64);
    }
}
