use std::fs;

use rand::{rngs::StdRng, SeedableRng};

use bayes_text::{evaluate, freq::most_frequent, BayesError, Corpus, EvalConfig, Label, Vocabulary};

const SPAM: [&str; 3] = [
    "Buy cheap pills online now, limited offer!",
    "Cheap watches, cheap pills, order online today",
    "Limited offer: online pharmacy with cheap prices",
];
const HAM: [&str; 3] = [
    "Hi Peter, are we still meeting for lunch tomorrow?",
    "Attached are the notes from the project meeting",
    "Lunch tomorrow works, see you at the meeting after",
];

#[test]
fn reads_numbered_files_alternating_classes() {
    let dir = tempfile::tempdir().unwrap();
    let spam_dir = dir.path().join("spam");
    let ham_dir = dir.path().join("ham");
    fs::create_dir(&spam_dir).unwrap();
    fs::create_dir(&ham_dir).unwrap();
    for i in 0..3 {
        fs::write(spam_dir.join(format!("{}.txt", i + 1)), SPAM[i]).unwrap();
        fs::write(ham_dir.join(format!("{}.txt", i + 1)), HAM[i]).unwrap();
    }
    // malformed bytes must not abort loading
    fs::write(spam_dir.join("3.txt"), b"cheap \xff\xfe offer online").unwrap();

    let corpus = Corpus::from_labeled_dirs(&spam_dir, &ham_dir, 3).unwrap();
    assert_eq!(corpus.len(), 6);
    assert_eq!(corpus.labels()[0], Label::One);
    assert_eq!(corpus.labels()[1], Label::Zero);
    assert_eq!(corpus.documents()[0][0], "buy");
    assert!(corpus.documents()[4].contains(&"offer".to_string()));

    let err = Corpus::from_labeled_dirs(&spam_dir, &ham_dir, 4).unwrap_err();
    assert!(matches!(err, BayesError::ReadFile { .. }));
}

#[test]
fn numbered_files_decode_as_gbk() {
    let dir = tempfile::tempdir().unwrap();
    let spam_dir = dir.path().join("spam");
    let ham_dir = dir.path().join("ham");
    fs::create_dir(&spam_dir).unwrap();
    fs::create_dir(&ham_dir).unwrap();
    fs::write(spam_dir.join("1.txt"), b"caf\xb7\xa2 offer").unwrap();
    fs::write(ham_dir.join("1.txt"), b"meeting \xff notes").unwrap();

    let corpus = Corpus::from_labeled_dirs(&spam_dir, &ham_dir, 1).unwrap();
    assert_eq!(corpus.documents()[0], vec!["caf\u{53d1}", "offer"]);
    assert_eq!(corpus.documents()[1], vec!["meeting", "notes"]);

    let utf8 = encoding_rs::Encoding::for_label(b"utf-8").unwrap();
    fs::write(spam_dir.join("1.txt"), "caf\u{e9} offer").unwrap();
    let corpus = Corpus::from_labeled_dirs_with_encoding(&spam_dir, &ham_dir, 1, utf8).unwrap();
    assert_eq!(corpus.documents()[0], vec!["caf\u{e9}", "offer"]);
}

#[test]
fn reads_labeled_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("train.csv");
    fs::write(
        &path,
        "label,text\n1,\"Cheap pills, order now\"\n0,Meeting notes attached\n",
    )
    .unwrap();

    let corpus = Corpus::from_csv(&path).unwrap();
    assert_eq!(corpus.labels(), &[Label::One, Label::Zero]);
    assert_eq!(corpus.documents()[0], vec!["cheap", "pills", "order", "now"]);

    fs::write(&path, "label,text\nspam,Cheap pills\n").unwrap();
    assert!(matches!(
        Corpus::from_csv(&path),
        Err(BayesError::InvalidLabel(_))
    ));
}

#[test]
fn reads_two_feeds() {
    let dir = tempfile::tempdir().unwrap();
    let rss = |items: &[&str]| {
        let body: String = items
            .iter()
            .map(|d| format!("<item><title>t</title><description>{d}</description></item>"))
            .collect();
        format!("<?xml version=\"1.0\"?><rss><channel><title>c</title>{body}</channel></rss>")
    };
    let ny = dir.path().join("ny.rss");
    let sf = dir.path().join("sf.rss");
    fs::write(&ny, rss(&["Subway commute downtown", "Brooklyn loft", "Queens"])).unwrap();
    fs::write(&sf, rss(&["Bay bridge traffic", "Mission burrito"])).unwrap();

    let corpus = Corpus::from_feeds(&ny, &sf).unwrap();
    assert_eq!(corpus.len(), 4);
    assert_eq!(
        corpus.labels(),
        &[Label::One, Label::Zero, Label::One, Label::Zero]
    );
    assert_eq!(corpus.documents()[1], vec!["bay", "bridge", "traffic"]);
}

#[test]
fn most_frequent_word_survives_top_k() {
    let mut corpus = Corpus::default();
    for i in 0..40 {
        corpus.push(
            vec!["the".to_string(), format!("word{i}"), "the".to_string()],
            Label::from(i % 2 == 0),
        );
    }
    let vocab = Vocabulary::build(corpus.documents());
    assert!(vocab.len() > 30);
    let top = most_frequent(&vocab, &corpus.full_text(), 30);
    assert!(top.iter().any(|(token, count)| token == "the" && *count == 80));
}

#[test]
fn seeded_evaluation_is_reproducible() {
    let mut corpus = Corpus::default();
    for round in 0..5 {
        for (i, (spam, ham)) in SPAM.iter().zip(HAM).enumerate() {
            let salt = format!(" token{round}x{i}");
            corpus.push(bayes_text::tokenize::text_parse(&(spam.to_string() + &salt)), Label::One);
            corpus.push(bayes_text::tokenize::text_parse(&(ham.to_string() + &salt)), Label::Zero);
        }
    }
    let config = EvalConfig {
        test_size: 8,
        ..EvalConfig::spam()
    };

    let first = evaluate(&corpus, &config, &mut StdRng::seed_from_u64(9)).unwrap();
    let second = evaluate(&corpus, &config, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(first.misclassified, second.misclassified);
    assert_eq!(first.model, second.model);
    assert_eq!(first.tested, 8);
    assert!((0.0..=1.0).contains(&first.error_rate));
}
