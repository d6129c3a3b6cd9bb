//! TF-IDF scoring over a small corpus of documents
//!
//! idf(t) = ln(N / (df(t) + 1)) and tf(t, d) = count / |tokens(d)|. The `+ 1`
//! keeps idf finite, which also means a term present in every document gets a
//! negative idf. For a one-document corpus every idf is ln(1/2), so nothing
//! clears [`SCORE_THRESHOLD`]; keyword extraction over a single job
//! description therefore ranks by raw frequency instead of calling this.

use crate::processing::text_processor::TextProcessor;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Scores at or below this value are dropped as noise.
pub const SCORE_THRESHOLD: f64 = 0.01;

/// Term -> `(document index, score)` pairs, document indices ascending.
pub type TfIdfScores = BTreeMap<String, Vec<(usize, f64)>>;

/// Inverse document frequencies for one corpus. Immutable once built.
#[derive(Debug, Clone)]
pub struct InverseDocumentFrequency {
    scores: HashMap<String, f64>,
    total_docs: usize,
}

impl InverseDocumentFrequency {
    pub fn from_tokenized<S: AsRef<str>>(doc_tokens: &[Vec<S>]) -> Self {
        let total_docs = doc_tokens.len();
        let mut doc_frequencies: HashMap<&str, usize> = HashMap::new();

        for tokens in doc_tokens {
            let unique: HashSet<&str> = tokens.iter().map(AsRef::as_ref).collect();
            for term in unique {
                *doc_frequencies.entry(term).or_insert(0) += 1;
            }
        }

        let scores = doc_frequencies
            .into_iter()
            .map(|(term, df)| {
                let idf = (total_docs as f64 / (df as f64 + 1.0)).ln();
                (term.to_string(), idf)
            })
            .collect();

        Self { scores, total_docs }
    }

    /// Unknown terms score 0.
    pub fn get(&self, term: &str) -> f64 {
        self.scores.get(term).copied().unwrap_or(0.0)
    }

    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Raw count divided by document length for every distinct term.
pub fn term_frequencies<S: AsRef<str>>(tokens: &[S]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_ref()).or_insert(0) += 1;
    }

    let length = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(term, count)| (term, count as f64 / length))
        .collect()
}

/// Score every term of every document against the corpus.
pub fn calculate_tfidf<S: AsRef<str>>(documents: &[S]) -> TfIdfScores {
    let processor = TextProcessor::new();
    let doc_tokens: Vec<Vec<String>> = documents
        .iter()
        .map(|doc| processor.tokenize(doc.as_ref()))
        .collect();

    let idf = InverseDocumentFrequency::from_tokenized(&doc_tokens);
    let mut scores = TfIdfScores::new();

    for (doc_index, tokens) in doc_tokens.iter().enumerate() {
        for (term, tf) in term_frequencies(tokens.as_slice()) {
            let score = tf * idf.get(term);
            if score > SCORE_THRESHOLD {
                scores
                    .entry(term.to_string())
                    .or_default()
                    .push((doc_index, score));
            }
        }
    }

    log::debug!(
        "TF-IDF over {} documents kept {} of {} terms",
        idf.total_docs(),
        scores.len(),
        idf.len()
    );

    scores
}
