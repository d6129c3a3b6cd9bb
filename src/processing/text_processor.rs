//! Tokenization, n-gram extraction, and text normalization

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Window size used when callers do not ask for a specific n-gram length.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Tokens shorter than this are discarded.
pub const MIN_TOKEN_LEN: usize = 3;

/// Common English function words filtered out of every token stream.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
        "of", "with", "by", "from", "is", "are", "was", "were", "be", "have",
        "has", "had", "do", "does", "did", "will", "would", "could", "should",
        "may", "might", "must", "can", "this", "that", "these", "those", "i",
        "you", "he", "she", "it", "we", "they", "what", "which", "who", "when",
        "where", "why", "how", "all", "each", "every", "both", "few", "more",
        "most", "other", "some", "such", "no", "nor", "not", "only", "same",
        "so", "than", "too", "very", "as", "if", "just", "about", "into",
    ]
    .into_iter()
    .collect()
});

// Letter groups optionally joined by single hyphens or underscores.
static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]+(?:[_-][a-z]+)*\b").expect("Invalid word regex"));

/// Tokenizer over the shared, read-only lexicons.
#[derive(Debug, Clone, Copy)]
pub struct TextProcessor {
    stop_words: &'static HashSet<&'static str>,
    word_regex: &'static Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self {
            stop_words: &STOP_WORDS,
            word_regex: &WORD_REGEX,
        }
    }

    /// Lowercase the text and return its word-like spans, minus stop words
    /// and tokens shorter than [`MIN_TOKEN_LEN`].
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.word_regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| word.len() >= MIN_TOKEN_LEN && !self.is_stop_word(word))
            .map(str::to_string)
            .collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

/// Tokenize with the default lexicons.
pub fn tokenize(text: &str) -> Vec<String> {
    TextProcessor::new().tokenize(text)
}

/// Join every run of `n` consecutive tokens with a single space.
///
/// Produces `max(0, len - n + 1)` n-grams in original order. `n == 0` yields
/// nothing.
pub fn extract_ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }

    tokens
        .windows(n)
        .map(|window| {
            window
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect()
}

/// Count occurrences and rank terms by descending count.
///
/// Ties keep first-occurrence order, so the ranking is reproducible.
pub fn rank_by_frequency<S: AsRef<str>>(terms: &[S]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for term in terms {
        let term = term.as_ref();
        match index.get(term) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(term, counts.len());
                counts.push((term.to_string(), 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Collapse every whitespace run into a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cap input at `max_chars` user-perceived characters.
///
/// Cuts on a grapheme boundary so combined characters are never split.
pub fn truncate_input(text: &str, max_chars: usize) -> &str {
    match text.grapheme_indices(true).nth(max_chars) {
        Some((byte_offset, _)) => &text[..byte_offset],
        None => text,
    }
}
