//! Portfolio ZIP bundles

use crate::error::Result;
use crate::processing::generator::ApplicationPackage;
use crate::profile::file_stem_for;
use chrono::Local;
use log::info;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const COVER_LETTER_ENTRY: &str = "Cover_Letter.txt";
pub const SUMMARY_ENTRY: &str = "Professional_Summary.txt";
pub const RESUME_ENTRY: &str = "Resume_Content.txt";
pub const ACHIEVEMENTS_ENTRY: &str = "Key_Achievements.txt";

/// Text documents of one application, ready to archive.
pub struct PortfolioBundle<'a> {
    package: &'a ApplicationPackage,
}

impl<'a> PortfolioBundle<'a> {
    pub fn new(package: &'a ApplicationPackage) -> Self {
        Self { package }
    }

    /// Entry name and contents; empty documents are skipped.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let package = self.package;
        [
            (COVER_LETTER_ENTRY, package.cover_letter.clone()),
            (SUMMARY_ENTRY, package.summary.clone()),
            (RESUME_ENTRY, package.resume_text.clone()),
            (ACHIEVEMENTS_ENTRY, package.star_bullets.join("\n")),
        ]
        .into_iter()
        .filter(|(_, content)| !content.trim().is_empty())
        .collect()
    }

    /// `Portfolio_<Name_With_Underscores>_<YYYYmmdd>.zip`, dated in local time
    /// like saved profiles.
    pub fn file_name(&self) -> String {
        format!(
            "Portfolio_{}_{}.zip",
            file_stem_for(&self.package.name, "Candidate"),
            self.package.generated_at.with_timezone(&Local).format("%Y%m%d")
        )
    }

    /// Write the bundle into `dir` and return its path.
    pub fn write_zip(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());

        let file = File::create(&path)?;
        self.write_to(file)?;

        info!("Wrote portfolio bundle to {}", path.display());
        Ok(path)
    }

    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);

        for (name, content) in self.entries() {
            let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
            zip.start_file(name, options)?;
            zip.write_all(content.as_bytes())?;
        }

        Ok(zip.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::generator::{ApplicationGenerator, ApplicationRequest};
    use crate::profile::Profile;
    use chrono::{TimeZone, Utc};
    use std::io::{Cursor, Read};
    use tempfile::TempDir;

    fn package(name: &str) -> ApplicationPackage {
        ApplicationGenerator::default().generate(&ApplicationRequest {
            name: name.to_string(),
            email: String::new(),
            resume_text: "Optimized build times for the robotics club. Mentored new members".to_string(),
            job_description: String::new(),
        })
    }

    #[test]
    fn test_bundle_contents() {
        let pkg = package("Jane Doe");
        let bundle = PortfolioBundle::new(&pkg);

        let cursor = bundle.write_to(Cursor::new(Vec::new())).unwrap();
        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        assert_eq!(archive.len(), 4);

        let mut letter = String::new();
        archive
            .by_name(COVER_LETTER_ENTRY)
            .unwrap()
            .read_to_string(&mut letter)
            .unwrap();
        assert_eq!(letter, pkg.cover_letter);
    }

    #[test]
    fn test_file_name_matches_profile_date() {
        let mut pkg = package("Jane Doe");
        pkg.generated_at = Utc.with_ymd_and_hms(2024, 3, 9, 23, 30, 0).unwrap();
        let local = pkg.generated_at.with_timezone(&Local);
        let date = local.format("%Y%m%d").to_string();

        assert_eq!(PortfolioBundle::new(&pkg).file_name(), format!("Portfolio_Jane_Doe_{}.zip", date));

        let profile = Profile {
            created_at: local,
            ..Profile::from_package(&pkg)
        };
        assert!(profile.file_name().starts_with(&format!("profile_Jane_Doe_{}_", date)));
    }

    #[test]
    fn test_write_zip_names_file_after_candidate() {
        let temp_dir = TempDir::new().unwrap();
        let pkg = package("");

        let path = PortfolioBundle::new(&pkg).write_zip(temp_dir.path()).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();

        assert!(name.starts_with("Portfolio_Candidate_"));
        assert!(name.ends_with(".zip"));
        assert!(path.exists());
    }
}
