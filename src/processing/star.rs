//! STAR-format achievement bullets

use once_cell::sync::Lazy;
use regex::Regex;

/// Verbs that mark a sentence as an achievement worth a bullet.
pub const ACTION_VERBS: &[&str] = &[
    "developed", "implemented", "designed", "created", "managed", "led",
    "improved", "optimized", "achieved", "increased", "reduced", "delivered",
];

/// Used when no sentence in the experience text qualifies.
pub const FALLBACK_BULLETS: [&str; 3] = [
    "• Applied technical skills to solve complex problems and deliver measurable results.",
    "• Collaborated with team members to achieve project objectives and meet deadlines.",
    "• Demonstrated strong problem-solving abilities and attention to detail.",
];

pub const BULLET_MARKER: &str = "• ";
pub const MAX_BULLETS: usize = 5;

/// Sentences must be strictly longer than this after trimming.
const MIN_SENTENCE_LEN: usize = 20;

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("Invalid sentence break regex"));

/// Turn experience prose into at most [`MAX_BULLETS`] bullets.
///
/// Only the first five sentences are considered. `_job_keywords` is accepted
/// so callers can pass the job's keywords once bullet selection uses them.
pub fn generate_star_bullets(experience_text: &str, _job_keywords: Option<&[String]>) -> Vec<String> {
    if experience_text.is_empty() {
        return Vec::new();
    }

    let bullets: Vec<String> = SENTENCE_BREAK
        .split(experience_text)
        .take(MAX_BULLETS)
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_LEN && has_action_verb(sentence))
        .map(format_bullet)
        .collect();

    if bullets.is_empty() {
        return FALLBACK_BULLETS.iter().map(|b| b.to_string()).collect();
    }

    bullets
}

fn has_action_verb(sentence: &str) -> bool {
    let lowered = sentence.to_lowercase();
    ACTION_VERBS.iter().any(|verb| lowered.contains(verb))
}

fn format_bullet(sentence: &str) -> String {
    let mut bullet = format!("{}{}", BULLET_MARKER, capitalize(sentence));
    if !bullet.ends_with('.') {
        bullet.push('.');
    }
    bullet
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_gives_no_bullets() {
        assert!(generate_star_bullets("", None).is_empty());
    }

    #[test]
    fn test_bullets_from_action_sentences() {
        let text = "Developed a REST service for billing. Went to lunch daily with the team. \
                    Led a migration to Kubernetes across three regions!";
        let bullets = generate_star_bullets(text, None);

        assert_eq!(
            bullets,
            vec![
                "• Developed a rest service for billing.",
                "• Led a migration to kubernetes across three regions!.",
            ]
        );
    }

    #[test]
    fn test_no_qualifying_sentences_uses_fallback() {
        let bullets = generate_star_bullets("Hi there. I like cats. Coffee is good.", None);
        assert_eq!(bullets, FALLBACK_BULLETS.to_vec());

        // long enough, but no action verb
        let bullets = generate_star_bullets("Attended many meetings about quarterly planning", None);
        assert_eq!(bullets.len(), 3);
    }

    #[test]
    fn test_short_action_sentence_is_skipped() {
        let bullets = generate_star_bullets("Led a team. Managed a budget.", None);
        assert_eq!(bullets, FALLBACK_BULLETS.to_vec());
    }

    #[test]
    fn test_only_first_five_sentences_are_considered() {
        let text = (1..=8)
            .map(|i| format!("Implemented feature number {} for customers", i))
            .collect::<Vec<_>>()
            .join(". ");
        let keywords = vec!["rust".to_string()];
        let bullets = generate_star_bullets(&text, Some(keywords.as_slice()));

        assert_eq!(bullets.len(), MAX_BULLETS);
        assert_eq!(bullets[4], "• Implemented feature number 5 for customers.");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hELLO World"), "Hello world");
        assert_eq!(capitalize(""), "");
    }
}
