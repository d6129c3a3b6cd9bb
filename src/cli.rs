//! CLI interface for the resume builder

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-builder")]
#[command(about = "ATS-aware resume summary, achievement bullet, and cover letter builder")]
#[command(long_about = "Extract ATS keywords from job descriptions with classical text statistics and \
generate a tailored professional summary, STAR-format bullets, and a cover letter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract ATS keywords from a job description
    Keywords {
        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Also report which keywords this resume already covers
        #[arg(short, long)]
        resume: Option<PathBuf>,
    },

    /// Score terms across several documents with TF-IDF
    Tfidf {
        /// Documents forming the corpus
        #[arg(required = true)]
        documents: Vec<PathBuf>,

        /// Number of terms to show per document
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },

    /// Generate summary, bullets, and cover letter from a resume
    Generate {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file for ATS optimization
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Candidate name used to sign the cover letter
        #[arg(short, long)]
        name: Option<String>,

        /// Candidate email address
        #[arg(short, long)]
        email: Option<String>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Regenerate documents from a saved profile JSON
    Regenerate {
        /// Path to profile JSON
        #[arg(short, long)]
        profile: PathBuf,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Output format: console, json, markdown, text
    #[arg(short, long)]
    pub output: Option<String>,

    /// Include the merged resume text in console output
    #[arg(short, long)]
    pub detailed: bool,

    /// Save output to file (or into a directory with a generated name)
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Write a portfolio ZIP with the generated documents
    #[arg(long)]
    pub bundle: bool,

    /// Save the inputs and results as a profile JSON
    #[arg(long)]
    pub save_profile: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "processing.max_input_chars")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "text" | "txt" => Ok(OutputFormat::Text),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, text", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "resume-builder", "generate", "--resume", "cv.pdf", "--job", "jd.txt",
            "--name", "Jane Doe", "--output", "md", "--bundle",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate { resume, job, name, export, .. } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(job, Some(PathBuf::from("jd.txt")));
                assert_eq!(name.as_deref(), Some("Jane Doe"));
                assert_eq!(export.output.as_deref(), Some("md"));
                assert!(export.bundle);
                assert!(!export.save_profile);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("txt"), Ok(OutputFormat::Text));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["pdf"]).is_err());
    }
}
