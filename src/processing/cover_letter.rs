//! Templated cover letters

use crate::processing::keywords::KeywordExtractor;

pub const DEFAULT_SIGNATURE: &str = "Your Name";

/// Background phrase when there is no résumé to draw from.
pub const FALLBACK_BACKGROUND: &str = "relevant field";

/// Skills phrase when the job description yields no keywords.
pub const FALLBACK_SKILLS: &str = "relevant skills";

const RESUME_BACKGROUND_TERMS: usize = 3;
const JOB_SKILL_TERMS: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct CoverLetterGenerator {
    extractor: KeywordExtractor,
}

impl CoverLetterGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a cover letter signed by `name`.
    ///
    /// With a job description the letter names its top keywords; without one
    /// it falls back to a short letter built from the résumé's keywords. Any
    /// non-empty job description counts, even one that is only whitespace.
    pub fn generate(&self, name: &str, job_description: &str, resume_text: &str) -> String {
        let signature = if name.trim().is_empty() {
            DEFAULT_SIGNATURE
        } else {
            name.trim()
        };

        if job_description.is_empty() {
            let background = self.keyword_phrase(resume_text, RESUME_BACKGROUND_TERMS, FALLBACK_BACKGROUND);
            return format!(
                "Dear Hiring Manager,\n\n\
                 I am writing to express my interest in the position. \
                 With my background in {background}, \
                 I am confident I would be a valuable addition to your team.\n\n\
                 Sincerely,\n{signature}"
            );
        }

        let skills = self.keyword_phrase(job_description, JOB_SKILL_TERMS, FALLBACK_SKILLS);
        format!(
            "Dear Hiring Manager,\n\n\
             I am writing to express my strong interest in the position. \
             With my background in {skills}, \n\
             I am excited about the opportunity to contribute to your team.\n\n\
             My experience aligns well with the requirements you've outlined. \
             I have a proven track record of \n\
             delivering results and working collaboratively in dynamic environments.\n\n\
             I am eager to discuss how my skills and experience can benefit your organization. \
             Thank you for \nconsidering my application.\n\n\
             Sincerely,\n{signature}"
        )
    }

    fn keyword_phrase(&self, text: &str, limit: usize, fallback: &str) -> String {
        let keywords: Vec<String> = self
            .extractor
            .extract_keywords(text)
            .into_iter()
            .take(limit)
            .collect();

        if keywords.is_empty() {
            fallback.to_string()
        } else {
            keywords.join(", ")
        }
    }
}

/// Generate a cover letter with the default lexicons.
pub fn generate_cover_letter(name: &str, job_description: &str, resume_text: &str) -> String {
    CoverLetterGenerator::new().generate(name, job_description, resume_text)
}
