use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use encoding_rs::Encoding;
use env_logger::Builder;
use log::LevelFilter;

use bayes_text::{
    corpus::DEFAULT_FILES_PER_CLASS, evaluate_seeded, tokenize::text_parse, Corpus, EvalConfig,
    Evaluation, NaiveBayesClassifier, VectorMode, Vocabulary,
};

#[derive(Parser, Debug)]
#[command(name = "bayes_text", about = "Two-class naive Bayes text classifier")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Train on the built-in abusive-posting set and classify a few words.
    Toy {
        /// Words to classify; defaults to the two reference entries.
        words: Vec<String>,
    },

    /// Hold-out evaluation over numbered spam and ham text files.
    Spam {
        /// Directory of class 1 files named 1.txt, 2.txt, ...
        #[arg(long)]
        spam_dir: PathBuf,
        /// Directory of class 0 files named 1.txt, 2.txt, ...
        #[arg(long)]
        ham_dir: PathBuf,
        /// Files to read from each directory
        #[arg(long, default_value_t = DEFAULT_FILES_PER_CLASS)]
        count: usize,
        /// Text encoding of the files
        #[arg(long, default_value = "gbk")]
        encoding: String,
        #[command(flatten)]
        eval: EvalArgs,
    },

    /// Hold-out evaluation over two RSS/Atom feeds, then report each side's top words.
    Feeds {
        /// Feed file for class 1
        #[arg(long)]
        feed1: PathBuf,
        /// Feed file for class 0
        #[arg(long)]
        feed0: PathBuf,
        /// Number of most frequent words to strip
        #[arg(long)]
        top_k: Option<usize>,
        /// Log-probability a word must exceed to be reported
        #[arg(long, allow_hyphen_values = true)]
        threshold: Option<f64>,
        #[command(flatten)]
        eval: EvalArgs,
    },

    /// Train on a labeled CSV (label,text) and classify an unlabeled one (ID,text).
    Predict {
        #[arg(long)]
        train: PathBuf,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = ModeArg::Presence)]
        mode: ModeArg,
    },
}

#[derive(Args, Debug)]
struct EvalArgs {
    /// JSON file with evaluation settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Documents held out for testing
    #[arg(long)]
    test_size: Option<usize>,
    /// Seed for the train/test split
    #[arg(long)]
    seed: Option<u64>,
}

impl EvalArgs {
    fn resolve(&self, preset: EvalConfig) -> Result<EvalConfig> {
        let mut config = match &self.config {
            Some(path) => EvalConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => preset,
        };
        if let Some(test_size) = self.test_size {
            config.test_size = test_size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Presence,
    Count,
}

impl From<ModeArg> for VectorMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Presence => VectorMode::Presence,
            ModeArg::Count => VectorMode::Count,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    match cli.command {
        Commands::Toy { words } => toy(words),
        Commands::Spam {
            spam_dir,
            ham_dir,
            count,
            encoding,
            eval,
        } => {
            let config = eval.resolve(EvalConfig::spam())?;
            let encoding = Encoding::for_label(encoding.as_bytes())
                .with_context(|| format!("unknown encoding {encoding}"))?;
            let corpus =
                Corpus::from_labeled_dirs_with_encoding(&spam_dir, &ham_dir, count, encoding)
                    .context("failed to load spam/ham corpus")?;
            let evaluation = evaluate_seeded(&corpus, &config)?;
            report(&evaluation);
            Ok(())
        }
        Commands::Feeds {
            feed1,
            feed0,
            top_k,
            threshold,
            eval,
        } => {
            let mut config = eval.resolve(EvalConfig::feeds())?;
            if let Some(top_k) = top_k {
                config.top_k = top_k;
            }
            if let Some(threshold) = threshold {
                config.word_threshold = threshold;
            }
            let corpus = Corpus::from_feeds(&feed1, &feed0).context("failed to load feeds")?;
            let evaluation = evaluate_seeded(&corpus, &config)?;
            report(&evaluation);

            let top = evaluation
                .model
                .top_words(&evaluation.vocabulary, config.word_threshold);
            println!("\n----------- class 0 ({}) -----------", feed0.display());
            for (word, _) in &top.class0 {
                println!("{}", word);
            }
            println!("\n----------- class 1 ({}) -----------", feed1.display());
            for (word, _) in &top.class1 {
                println!("{}", word);
            }
            Ok(())
        }
        Commands::Predict {
            train,
            input,
            output,
            mode,
        } => predict(&train, &input, &output, mode.into()),
    }
}

fn toy(words: Vec<String>) -> Result<()> {
    let corpus = Corpus::toy();
    let vocab = Vocabulary::build(corpus.documents());
    let model = NaiveBayesClassifier::fit(
        &vocab,
        corpus.documents(),
        corpus.labels(),
        VectorMode::Presence,
    )?;

    let entries = if words.is_empty() {
        vec![
            vec!["love".to_string(), "my".to_string(), "dalmation".to_string()],
            vec!["stupid".to_string(), "garbage".to_string()],
        ]
    } else {
        vec![words]
    };
    for entry in entries {
        let vector = VectorMode::Presence.vectorize(&vocab, &entry);
        println!("{:?} classified as: {}", entry, model.classify(&vector));
    }
    Ok(())
}

fn report(evaluation: &Evaluation) {
    println!(
        "The error rate is: {} ({} of {})",
        evaluation.error_rate, evaluation.errors, evaluation.tested
    );
}

fn predict(train: &Path, input: &Path, output: &Path, mode: VectorMode) -> Result<()> {
    let corpus = Corpus::from_csv(train)
        .with_context(|| format!("failed to load training csv {}", train.display()))?;
    let vocab = Vocabulary::build(corpus.documents());
    let model = NaiveBayesClassifier::fit(&vocab, corpus.documents(), corpus.labels(), mode)?;

    let mut reader = csv::Reader::from_path(input)?;
    let mut results = Vec::new();
    for record in reader.records() {
        let record = record?;
        let id = record.get(0).context("csv record missing ID entry.")?;
        let text = record.get(1).unwrap_or_default();
        let vector = mode.vectorize(&vocab, &text_parse(text));
        results.push((id.to_string(), model.classify(&vector)));
    }

    // Now we can write the result:
    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(["ID", "Class"])?;
    for (id, label) in &results {
        let label = label.to_string();
        writer.write_record([id.as_str(), label.as_str()])?;
    }
    writer.flush()?;

    println!("Classified {} documents into {}", results.len(), output.display());
    Ok(())
}
