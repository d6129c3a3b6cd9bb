//! Output formatters for generated application packages

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::generator::ApplicationPackage;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an application package
pub trait OutputFormatter {
    fn format_package(&self, package: &ApplicationPackage) -> Result<String>;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing and editing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Plain text, safe for any terminal or file
pub struct TextFormatter;

/// Coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    text_formatter: TextFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_coverage_badge(&self, ratio: f32) -> String {
        let percentage = (ratio * 100.0).round() as u8;
        let (badge, color) = match percentage {
            80..=100 => ("STRONG", Color::Green),
            50..=79 => ("PARTIAL", Color::Yellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("{}% [{}]", percentage, badge.color(color).bold())
        } else {
            format!("{}% [{}]", percentage, badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_package(&self, package: &ApplicationPackage) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📝 APPLICATION PACKAGE", 1));
        output.push_str(&format!(
            "Candidate: {} | Generated: {} | Processing time: {}ms\n",
            display_name(&package.name),
            package.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            package.processing_time_ms
        ));

        if package.has_job_description() {
            output.push_str(&self.format_header("🎯 ATS Keywords", 2));
            output.push_str(&format!(
                "Coverage before merge: {}\n",
                self.format_coverage_badge(package.coverage.ratio())
            ));
            output.push_str(&format!("Keywords: {}\n", package.job_keywords.join(", ")));
            if !package.coverage.missing.is_empty() {
                output.push_str(&format!(
                    "Added to resume: {}\n",
                    self.colorize(&package.coverage.missing.join(", "), Color::Yellow)
                ));
            }
        }

        output.push_str(&self.format_header("Professional Summary", 2));
        output.push_str(&package.summary);
        output.push('\n');

        output.push_str(&self.format_header("STAR-Format Achievements", 2));
        for bullet in &package.star_bullets {
            output.push_str(&format!("  {}\n", self.colorize(bullet, Color::Cyan)));
        }

        output.push_str(&self.format_header("Cover Letter", 2));
        output.push_str(&package.cover_letter);
        output.push('\n');

        if self.detailed {
            output.push_str(&self.format_header("Resume Content", 3));
            output.push_str(&package.resume_text);
            output.push('\n');
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_package(&self, package: &ApplicationPackage) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(package)?)
        } else {
            Ok(serde_json::to_string(package)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_package(&self, package: &ApplicationPackage) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", display_name(&package.name)));
        if !package.email.is_empty() {
            output.push_str(&format!("{}\n\n", package.email));
        }

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n\n",
                package.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                package.processing_time_ms
            ));
        }

        output.push_str("## Professional Summary\n\n");
        output.push_str(&format!("{}\n\n", package.summary));

        output.push_str("## Key Achievements\n\n");
        for bullet in &package.star_bullets {
            let item = bullet.strip_prefix(crate::processing::star::BULLET_MARKER).unwrap_or(bullet);
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');

        if package.has_job_description() {
            output.push_str("## ATS Keywords\n\n");
            output.push_str("| Keyword | In resume |\n");
            output.push_str("|---------|-----------|\n");
            for keyword in &package.job_keywords {
                let present = if package.coverage.matched.contains(keyword) { "yes" } else { "added" };
                output.push_str(&format!("| {} | {} |\n", keyword, present));
            }
            output.push('\n');
        }

        output.push_str("## Cover Letter\n\n");
        output.push_str(&format!("{}\n", package.cover_letter));

        Ok(output)
    }
}

impl OutputFormatter for TextFormatter {
    fn format_package(&self, package: &ApplicationPackage) -> Result<String> {
        let mut sections = vec![
            display_name(&package.name).to_string(),
            format!("PROFESSIONAL SUMMARY\n{}", package.summary),
            format!("KEY ACHIEVEMENTS\n{}", package.star_bullets.join("\n")),
            format!("EXPERIENCE & SKILLS\n{}", package.resume_text.trim()),
            format!("COVER LETTER\n{}", package.cover_letter),
        ];
        if !package.email.is_empty() {
            sections.insert(1, package.email.clone());
        }
        Ok(sections.join("\n\n") + "\n")
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            text_formatter: TextFormatter,
        }
    }

    pub fn generate_report(&self, package: &ApplicationPackage, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_package(package),
            OutputFormat::Json => self.json_formatter.format_package(package),
            OutputFormat::Markdown => self.markdown_formatter.format_package(package),
            OutputFormat::Text => self.text_formatter.format_package(package),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn display_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "Candidate Name"
    } else {
        name.trim()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, candidate_name: &str, timestamp: bool) -> String {
    let base_name = crate::profile::file_stem_for(candidate_name, "Resume");

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console | OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_application{}.{}", base_name, timestamp_suffix, extension)
}
