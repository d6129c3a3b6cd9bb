//! Professional summary synthesis

use crate::processing::keywords::KeywordExtractor;
use crate::processing::text_processor::{collapse_whitespace, rank_by_frequency, TextProcessor};
use log::debug;

/// Returned verbatim when there is no résumé text to work from.
pub const GENERIC_SUMMARY: &str = "Motivated student seeking opportunities to apply skills, \
gain professional experience, and contribute effectively to organizational goals.";

/// Opening phrase of every synthesized summary.
pub const SUMMARY_LEAD: &str = "Results-driven student with practical exposure to";

const SUMMARY_TAIL: &str = "Possesses strong analytical thinking, adaptability, and a continuous \
learning mindset. Actively seeking opportunities to contribute to impactful projects and grow professionally.";

const FALLBACK_TERMS: [&str; 3] = ["problem solving", "communication", "teamwork"];

const MAX_SUMMARY_TERMS: usize = 8;
const KEPT_RESUME_TERMS: usize = 5;
const CONSIDERED_JOB_KEYWORDS: usize = 5;
const SPLICED_JOB_KEYWORDS: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct SummarySynthesizer {
    processor: TextProcessor,
    extractor: KeywordExtractor,
}

impl SummarySynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a one-paragraph summary from the résumé's most frequent terms,
    /// spliced with job keywords the résumé does not already surface.
    pub fn enhance_resume(&self, resume_text: &str, job_description: Option<&str>) -> String {
        let resume_text = collapse_whitespace(resume_text);
        if resume_text.is_empty() {
            return GENERIC_SUMMARY.to_string();
        }

        let mut terms = self.top_terms(&resume_text);

        if let Some(job_description) = job_description.filter(|jd| !jd.is_empty()) {
            let joined = terms.join(" ").to_lowercase();
            let job_terms: Vec<String> = self
                .extractor
                .extract_keywords(job_description)
                .into_iter()
                .take(CONSIDERED_JOB_KEYWORDS)
                .filter(|keyword| !joined.contains(keyword.as_str()))
                .take(SPLICED_JOB_KEYWORDS)
                .collect();

            if !job_terms.is_empty() {
                debug!("Splicing job keywords into summary: {:?}", job_terms);
                terms.truncate(KEPT_RESUME_TERMS);
                terms.extend(job_terms);
            }
        }

        terms.truncate(MAX_SUMMARY_TERMS);
        format!("{} {}. {}", SUMMARY_LEAD, terms.join(", "), SUMMARY_TAIL)
    }

    fn top_terms(&self, text: &str) -> Vec<String> {
        let tokens = self.processor.tokenize(text);
        let terms: Vec<String> = rank_by_frequency(&tokens)
            .into_iter()
            .take(MAX_SUMMARY_TERMS)
            .map(|(term, _)| term)
            .collect();

        if terms.is_empty() {
            FALLBACK_TERMS.iter().map(|t| t.to_string()).collect()
        } else {
            terms
        }
    }
}

/// Synthesize a summary with the default lexicons.
pub fn enhance_resume(resume_text: &str, job_description: Option<&str>) -> String {
    SummarySynthesizer::new().enhance_resume(resume_text, job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resume_gives_generic_summary() {
        assert_eq!(enhance_resume("", Some("")), GENERIC_SUMMARY);
        assert_eq!(enhance_resume(" \n\t ", None), GENERIC_SUMMARY);
    }

    #[test]
    fn test_summary_lists_top_terms() {
        let summary = enhance_resume("Rust rust RUST tooling and compilers", None);

        assert_eq!(
            summary,
            format!("{} rust, tooling, compilers. {}", SUMMARY_LEAD, SUMMARY_TAIL)
        );
    }

    #[test]
    fn test_summary_falls_back_to_generic_terms() {
        let summary = enhance_resume("I am on it, as we do.", None);

        assert!(summary.starts_with(SUMMARY_LEAD));
        assert!(summary.contains("problem solving, communication, teamwork"));
    }

    #[test]
    fn test_summary_caps_at_eight_terms() {
        let summary = enhance_resume(
            "alpha bravo charlie delta echo foxtrot golf hotel india juliet",
            None,
        );
        assert!(summary.contains("alpha, bravo, charlie, delta, echo, foxtrot, golf, hotel."));
        assert!(!summary.contains("india"));
    }

    #[test]
    fn test_summary_splices_job_keywords() {
        let jd = "We need a Python developer with AWS and Docker experience, strong communication skills";
        let summary = enhance_resume("Built APIs using Python and Docker for two years", Some(jd));

        assert!(summary.contains(SUMMARY_LEAD));
        assert!(summary.contains("python"));
        assert!(summary.contains("docker"));
        assert!(summary.contains(
            "built, apis, using, python, docker, need, developer, aws."
        ));
    }

    #[test]
    fn test_summary_ignores_empty_job_description() {
        let text = "Designed dashboards in Tableau";
        assert_eq!(enhance_resume(text, Some("")), enhance_resume(text, None));
    }
}
