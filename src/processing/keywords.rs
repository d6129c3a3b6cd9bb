//! ATS (Applicant Tracking System) keyword extraction and résumé merging

use crate::processing::text_processor::{extract_ngrams, rank_by_frequency, TextProcessor, DEFAULT_NGRAM_SIZE};
use aho_corasick::AhoCorasick;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper bound on the keyword list returned for a job description.
pub const MAX_KEYWORDS: usize = 25;

/// How many frequency-ranked terms feed the union with gazetteer hits.
pub const MAX_FREQUENCY_TERMS: usize = 20;

/// Upper bound when only gazetteer matches are available.
pub const MAX_FALLBACK_KEYWORDS: usize = 15;

/// At most this many missing keywords are appended to a résumé.
pub const MAX_MERGED_KEYWORDS: usize = 10;

/// Domain keywords recruiters screen for, matched by plain substring lookup.
pub const GAZETTEER: &[&str] = &[
    "python", "java", "javascript", "sql", "machine learning", "data science",
    "cloud", "aws", "azure", "docker", "kubernetes", "agile", "scrum",
    "project management", "leadership", "communication", "analytics",
    "deep learning", "neural networks", "nlp", "computer vision",
    "tensorflow", "pytorch", "pandas", "numpy",
    "git", "github", "cicd", "rest api", "microservices", "api", "database",
];

// Standard (overlapping) semantics so "java" still hits inside "javascript".
static GAZETTEER_MATCHER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(GAZETTEER).expect("Invalid gazetteer patterns"));

/// Keyword extractor combining frequency ranking with the gazetteer.
#[derive(Debug, Clone, Copy)]
pub struct KeywordExtractor {
    processor: TextProcessor,
    gazetteer: &'static [&'static str],
    matcher: &'static AhoCorasick,
}

/// Which keywords a résumé already covers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordCoverage {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordCoverage {
    /// Fraction of keywords present, 0.0 for an empty keyword list.
    pub fn ratio(&self) -> f32 {
        let total = self.matched.len() + self.missing.len();
        if total == 0 {
            0.0
        } else {
            self.matched.len() as f32 / total as f32
        }
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            processor: TextProcessor::new(),
            gazetteer: GAZETTEER,
            matcher: &GAZETTEER_MATCHER,
        }
    }

    /// Extract up to [`MAX_KEYWORDS`] distinct keywords from a job description.
    ///
    /// Frequency-ranked unigrams and bigrams come first, followed by gazetteer
    /// hits in gazetteer order. Text with no usable tokens falls back to
    /// gazetteer hits alone. Never fails; empty input gives an empty list.
    pub fn extract_keywords(&self, job_description: &str) -> Vec<String> {
        if job_description.is_empty() {
            return Vec::new();
        }

        let gazetteer_hits = self.gazetteer_matches(job_description);

        let Some(ranked) = self.frequency_terms(job_description) else {
            debug!("No tokens in job description, using gazetteer matches only");
            return gazetteer_hits
                .into_iter()
                .take(MAX_FALLBACK_KEYWORDS)
                .collect();
        };

        let mut seen = HashSet::new();
        let keywords: Vec<String> = ranked
            .into_iter()
            .chain(gazetteer_hits)
            .filter(|keyword| seen.insert(keyword.clone()))
            .take(MAX_KEYWORDS)
            .collect();

        debug!("Extracted {} keywords from job description", keywords.len());
        keywords
    }

    /// Top unigram + bigram terms by count, or `None` when the text has no tokens.
    fn frequency_terms(&self, text: &str) -> Option<Vec<String>> {
        let mut terms = self.processor.tokenize(text);
        if terms.is_empty() {
            return None;
        }

        let bigrams = extract_ngrams(&terms, DEFAULT_NGRAM_SIZE);
        terms.extend(bigrams);

        Some(
            rank_by_frequency(&terms)
                .into_iter()
                .filter(|(_, count)| *count >= 1)
                .take(MAX_FREQUENCY_TERMS)
                .map(|(term, _)| term)
                .collect(),
        )
    }

    /// Gazetteer terms contained anywhere in the lowercased text.
    pub fn gazetteer_matches(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut found = vec![false; self.gazetteer.len()];

        for mat in self.matcher.find_overlapping_iter(&lowered) {
            found[mat.pattern().as_usize()] = true;
        }

        self.gazetteer
            .iter()
            .zip(found)
            .filter(|(_, hit)| *hit)
            .map(|(keyword, _)| keyword.to_string())
            .collect()
    }
}

/// Split keywords into those the résumé mentions (case-insensitively) and those it lacks.
pub fn keyword_coverage<S: AsRef<str>>(resume_text: &str, keywords: &[S]) -> KeywordCoverage {
    let resume_lower = resume_text.to_lowercase();
    let mut coverage = KeywordCoverage::default();

    for keyword in keywords {
        let keyword = keyword.as_ref();
        if resume_lower.contains(&keyword.to_lowercase()) {
            coverage.matched.push(keyword.to_string());
        } else {
            coverage.missing.push(keyword.to_string());
        }
    }

    coverage
}

/// Append the keywords a résumé lacks as a skills addendum.
///
/// The heading is "Additional Skills:" when the résumé already talks about
/// skills or technical work, "Relevant Skills:" otherwise. Returns the input
/// unchanged when nothing is missing.
pub fn merge_keywords<S: AsRef<str>>(resume_text: &str, keywords: &[S]) -> String {
    if keywords.is_empty() {
        return resume_text.to_string();
    }

    let coverage = keyword_coverage(resume_text, keywords);
    if coverage.missing.is_empty() {
        return resume_text.to_string();
    }

    let resume_lower = resume_text.to_lowercase();
    let heading = if resume_lower.contains("skills") || resume_lower.contains("technical") {
        "Additional Skills:"
    } else {
        "Relevant Skills:"
    };

    let additions: Vec<&str> = coverage
        .missing
        .iter()
        .take(MAX_MERGED_KEYWORDS)
        .map(String::as_str)
        .collect();

    debug!("Merging {} missing keywords into resume", additions.len());
    format!("{}\n\n{} {}", resume_text, heading, additions.join(", "))
}

/// Extract keywords with the default lexicons.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    KeywordExtractor::new().extract_keywords(job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn test_gazetteer_hits_are_included() {
        let keywords = extract_keywords("Python developer with Python and SQL experience");

        assert!(keywords.contains(&"python".to_string()));
        assert!(keywords.contains(&"sql".to_string()));
        // most frequent term ranks first
        assert_eq!(keywords[0], "python");
    }

    #[test]
    fn test_keywords_are_bounded_and_unique() {
        let text = "Senior platform engineer building distributed storage, streaming ingestion, \
                    observability tooling, release automation, capacity planning, incident response, \
                    cost optimization, security hardening, developer experience, and data governance \
                    using Python, Java, JavaScript, SQL, AWS, Azure, Docker, Kubernetes, Git, GitHub \
                    and REST API microservices with machine learning and deep learning analytics.";
        let keywords = extract_keywords(text);

        assert!(keywords.len() <= MAX_KEYWORDS);
        let unique: HashSet<&String> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Agile team seeks backend engineer for cloud database and api work";
        assert_eq!(extract_keywords(text), extract_keywords(text));
    }

    #[test]
    fn test_fallback_to_gazetteer_without_tokens() {
        let extractor = KeywordExtractor::new();

        // glued digits stop tokenization but not substring hits
        assert_eq!(extractor.extract_keywords("Python3, SQL2 & 42"), vec!["python", "sql"]);
        assert!(extractor.extract_keywords("!!! 123 ???").is_empty());
    }

    #[test]
    fn test_overlapping_gazetteer_terms() {
        let hits = KeywordExtractor::new().gazetteer_matches("JavaScript on GitHub behind a REST API");

        for expected in ["java", "javascript", "git", "github", "rest api", "api"] {
            assert!(hits.contains(&expected.to_string()), "missing {}", expected);
        }
    }

    #[test]
    fn test_end_to_end_job_description() {
        let jd = "We need a Python developer with AWS and Docker experience, strong communication skills";
        let keywords = extract_keywords(jd);

        for expected in ["python", "aws", "docker", "communication"] {
            assert!(keywords.contains(&expected.to_string()), "missing {}", expected);
        }
    }

    #[test]
    fn test_merge_with_no_keywords_is_identity() {
        let text = "I have skills in X";
        assert_eq!(merge_keywords::<String>(text, &[]), text);
    }

    #[test]
    fn test_merge_when_all_present_is_identity() {
        let text = "Built services in Python and Docker on AWS";
        assert_eq!(merge_keywords(text, &["python", "DOCKER", "aws"]), text);
    }

    #[test]
    fn test_merge_appends_additional_skills() {
        let merged = merge_keywords("Technical lead using Python", &["python", "kubernetes", "scrum"]);
        assert_eq!(
            merged,
            "Technical lead using Python\n\nAdditional Skills: kubernetes, scrum"
        );
    }

    #[test]
    fn test_merge_appends_relevant_skills_capped() {
        let keywords: Vec<String> = (0..15).map(|i| format!("keyword{}", i)).collect();
        let merged = merge_keywords("Barista and cashier", &keywords);

        let (_, addendum) = merged.split_once("\n\nRelevant Skills: ").unwrap();
        assert_eq!(addendum.split(", ").count(), MAX_MERGED_KEYWORDS);
        assert!(addendum.starts_with("keyword0, keyword1"));
    }

    #[test]
    fn test_keyword_coverage() {
        let coverage = keyword_coverage("Python and SQL", &["python", "sql", "rust", "go"]);

        assert_eq!(coverage.matched, vec!["python", "sql"]);
        assert_eq!(coverage.missing, vec!["rust", "go"]);
        assert_eq!(coverage.ratio(), 0.5);
        assert_eq!(KeywordCoverage::default().ratio(), 0.0);
    }
}
