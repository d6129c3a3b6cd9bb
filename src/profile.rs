//! Saved candidate profiles (JSON)

use crate::error::{Result, ResumeBuilderError};
use crate::processing::generator::{ApplicationPackage, ApplicationRequest};
use chrono::{DateTime, Local, NaiveDateTime};
use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// A candidate's inputs plus the last generated summary and letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub cover_letter: String,
    #[serde(default)]
    pub star_bullets: Vec<String>,
    /// RFC 3339, or a naive ISO timestamp read as local time.
    #[serde(default = "Local::now", deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Local>,
}

impl Profile {
    pub fn from_package(package: &ApplicationPackage) -> Self {
        Self {
            name: package.name.clone(),
            email: package.email.clone(),
            resume_text: package.resume_text.clone(),
            job_description: package.job_description.clone(),
            summary: package.summary.clone(),
            cover_letter: package.cover_letter.clone(),
            star_bullets: package.star_bullets.clone(),
            created_at: Local::now(),
        }
    }

    /// The inputs needed to regenerate this profile's documents.
    pub fn to_request(&self) -> ApplicationRequest {
        ApplicationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            resume_text: self.resume_text.clone(),
            job_description: self.job_description.clone(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            ResumeBuilderError::Profile(format!("Invalid profile JSON in '{}': {}", path.display(), e))
        })
    }

    /// Write the profile as pretty JSON into `dir`, returning the file path.
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;

        info!("Saved profile to {}", path.display());
        Ok(path)
    }

    /// `profile_<Name_With_Underscores>_<YYYYmmdd_HHMMSS>.json`
    pub fn file_name(&self) -> String {
        format!(
            "profile_{}_{}.json",
            file_stem_for(&self.name, "candidate"),
            self.created_at.format("%Y%m%d_%H%M%S")
        )
    }
}

/// Profiles written without an offset carry naive local timestamps. The
/// timestamp only names files, so anything unreadable becomes "now".
fn deserialize_created_at<'de, D>(deserializer: D) -> std::result::Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp).unwrap_or_else(|| {
        debug!("Unreadable profile timestamp {:?}, using current time", raw);
        Local::now()
    }))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Local));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .and_then(|naive| naive.and_local_timezone(Local).earliest())
}

/// Replace spaces with underscores, or use `fallback` for an empty name.
pub fn file_stem_for(name: &str, fallback: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        fallback.to_string()
    } else {
        name.replace(' ', "_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Profile {
        Profile {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            resume_text: "Developed dashboards".to_string(),
            job_description: "Data analyst".to_string(),
            summary: "Summary".to_string(),
            cover_letter: "Letter".to_string(),
            star_bullets: vec!["• Developed dashboards.".to_string()],
            created_at: Local::now(),
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let profile = sample();

        let path = profile.save_to_dir(temp_dir.path()).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("profile_Jane_Doe_"));
        assert!(name.ends_with(".json"));

        let loaded = Profile::load(&path).unwrap();
        assert_eq!(loaded.name, profile.name);
        assert_eq!(loaded.star_bullets, profile.star_bullets);
        assert_eq!(loaded.to_request().job_description, "Data analyst");
    }

    #[test]
    fn test_missing_fields_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.json");
        std::fs::write(&path, r#"{"name": "Sam", "resume_text": "Led a team"}"#).unwrap();

        let profile = Profile::load(&path).unwrap();
        assert_eq!(profile.name, "Sam");
        assert!(profile.job_description.is_empty());
        assert!(profile.star_bullets.is_empty());
    }

    #[test]
    fn test_loads_profile_with_naive_timestamp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile_Jane_Doe_20240115_103000.json");
        std::fs::write(
            &path,
            r#"{
    "name": "Jane Doe",
    "email": "jane@example.com",
    "resume_text": "Developed dashboards",
    "job_description": "Data analyst",
    "summary": "Summary",
    "cover_letter": "Letter",
    "created_at": "2024-01-15T10:30:00.123456"
}"#,
        )
        .unwrap();

        let profile = Profile::load(&path).unwrap();
        assert_eq!(profile.name, "Jane Doe");
        assert!(profile.star_bullets.is_empty());
        assert_eq!(
            profile.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-01-15 10:30:00"
        );
        assert_eq!(profile.file_name(), "profile_Jane_Doe_20240115_103000.json");
    }

    #[test]
    fn test_unreadable_timestamp_does_not_fail_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("odd.json");
        std::fs::write(&path, r#"{"name": "Sam", "created_at": "last tuesday"}"#).unwrap();

        assert_eq!(Profile::load(&path).unwrap().name, "Sam");
    }

    #[test]
    fn test_timestamp_survives_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let profile = sample();

        let loaded = Profile::load(&profile.save_to_dir(temp_dir.path()).unwrap()).unwrap();
        assert_eq!(loaded.created_at, profile.created_at);
    }

    #[test]
    fn test_invalid_json_is_a_profile_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Profile::load(&path), Err(ResumeBuilderError::Profile(_))));
    }

    #[test]
    fn test_file_stem_for() {
        assert_eq!(file_stem_for("Jane Q Doe", "candidate"), "Jane_Q_Doe");
        assert_eq!(file_stem_for("  ", "candidate"), "candidate");
    }
}
