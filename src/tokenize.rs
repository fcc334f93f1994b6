use std::sync::OnceLock;

use regex::Regex;

/// Tokens shorter than this are dropped.
const MIN_TOKEN_CHARS: usize = 3;

fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"\W+").expect("separator pattern is valid"))
}

/// Splits text on runs of non-word characters, keeping lowercased tokens of 3+ characters.
pub fn text_parse(text: &str) -> Vec<String> {
    separator()
        .split(text)
        .filter(|tok| tok.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
        .collect()
}
