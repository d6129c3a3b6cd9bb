//! End-to-end application package generation
//!
//! Runs the analytics in the order a candidate needs them: job keywords are
//! extracted and merged into the résumé first, and the merged résumé then
//! feeds the summary, the achievement bullets, and the cover letter.

use crate::processing::cover_letter::CoverLetterGenerator;
use crate::processing::keywords::{keyword_coverage, merge_keywords, KeywordCoverage, KeywordExtractor};
use crate::processing::star::generate_star_bullets;
use crate::processing::summary::SummarySynthesizer;
use crate::processing::text_processor::truncate_input;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Everything the candidate supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRequest {
    pub name: String,
    pub email: String,
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

/// Generated documents for one application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationPackage {
    pub name: String,
    pub email: String,
    pub job_description: String,
    pub job_keywords: Vec<String>,
    /// Coverage of the job keywords by the résumé as supplied, before merging.
    pub coverage: KeywordCoverage,
    pub resume_text: String,
    pub summary: String,
    pub star_bullets: Vec<String>,
    pub cover_letter: String,
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
}

impl ApplicationPackage {
    pub fn has_job_description(&self) -> bool {
        !self.job_description.is_empty()
    }
}

/// Drives the analytics over one request. Inputs longer than
/// `max_input_chars` are truncated before any tokenization.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationGenerator {
    max_input_chars: usize,
    extractor: KeywordExtractor,
    summarizer: SummarySynthesizer,
    letters: CoverLetterGenerator,
}

impl ApplicationGenerator {
    pub fn new(max_input_chars: usize) -> Self {
        Self {
            max_input_chars,
            extractor: KeywordExtractor::new(),
            summarizer: SummarySynthesizer::new(),
            letters: CoverLetterGenerator::new(),
        }
    }

    pub fn generate(&self, request: &ApplicationRequest) -> ApplicationPackage {
        let start = Instant::now();

        let resume_text = truncate_input(&request.resume_text, self.max_input_chars);
        let job_description = truncate_input(&request.job_description, self.max_input_chars);
        if resume_text.len() < request.resume_text.len() {
            info!("Resume truncated to {} characters", self.max_input_chars);
        }
        if job_description.len() < request.job_description.len() {
            info!("Job description truncated to {} characters", self.max_input_chars);
        }

        let job_keywords = if job_description.is_empty() {
            Vec::new()
        } else {
            self.extractor.extract_keywords(job_description)
        };
        debug!("Job keywords: {:?}", job_keywords);

        let coverage = keyword_coverage(resume_text, job_keywords.as_slice());
        let merged = merge_keywords(resume_text, job_keywords.as_slice());

        let summary = self
            .summarizer
            .enhance_resume(&merged, Some(job_description));
        let star_bullets = generate_star_bullets(&merged, Some(job_keywords.as_slice()));
        let cover_letter = self.letters.generate(&request.name, job_description, &merged);

        let processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Generated application package ({} keywords, {} bullets) in {}ms",
            job_keywords.len(),
            star_bullets.len(),
            processing_time_ms
        );

        ApplicationPackage {
            name: request.name.clone(),
            email: request.email.clone(),
            job_description: job_description.to_string(),
            job_keywords,
            coverage,
            resume_text: merged,
            summary,
            star_bullets,
            cover_letter,
            generated_at: Utc::now(),
            processing_time_ms,
        }
    }
}

impl Default for ApplicationGenerator {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_INPUT_CHARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::summary::SUMMARY_LEAD;

    fn request(resume: &str, job: &str) -> ApplicationRequest {
        ApplicationRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            resume_text: resume.to_string(),
            job_description: job.to_string(),
        }
    }

    #[test]
    fn test_package_without_job_description() {
        let package = ApplicationGenerator::default()
            .generate(&request("Developed a data pipeline in Python for research", ""));

        assert!(package.job_keywords.is_empty());
        assert_eq!(package.resume_text, "Developed a data pipeline in Python for research");
        assert!(package.summary.starts_with(SUMMARY_LEAD));
        assert_eq!(package.star_bullets.len(), 1);
        assert!(package.cover_letter.ends_with("Jane Doe"));
        assert!(!package.has_job_description());
    }

    #[test]
    fn test_package_merges_missing_keywords() {
        let jd = "We need a Python developer with AWS and Docker experience, strong communication skills";
        let package = ApplicationGenerator::default()
            .generate(&request("Built APIs using Python and Docker for two years", jd));

        assert!(package.coverage.matched.contains(&"python".to_string()));
        assert!(package.coverage.missing.contains(&"aws".to_string()));
        assert!(package.resume_text.contains("\n\nRelevant Skills: "));
        assert!(package.resume_text.contains("aws"));
        assert!(package.cover_letter.contains("strong interest"));
        assert!(package.has_job_description());
    }

    #[test]
    fn test_inputs_are_truncated() {
        let long_resume = "managed ".repeat(100);
        let package = ApplicationGenerator::new(16).generate(&request(&long_resume, ""));

        assert_eq!(package.resume_text, "managed managed ");
    }
}
