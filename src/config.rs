//! Configuration management for the resume builder

use crate::error::{Result, ResumeBuilderError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Inputs are cut to this many characters before analysis.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 5000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
    pub portfolio: PortfolioConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub max_input_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Where bundles and saved profiles are written.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Text,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig {
                max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                pretty_json: true,
            },
            portfolio: PortfolioConfig {
                output_dir: PathBuf::from("."),
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeBuilderError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeBuilderError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-builder")
            .join("config.toml")
    }

    /// Update a single value addressed as `section.field`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "processing.max_input_chars" => {
                let chars: usize = parse_value(key, value)?;
                if chars == 0 {
                    return Err(ResumeBuilderError::Configuration(
                        "processing.max_input_chars must be greater than zero".to_string(),
                    ));
                }
                self.processing.max_input_chars = chars;
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeBuilderError::Configuration)?;
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            "output.pretty_json" => self.output.pretty_json = parse_value(key, value)?,
            "portfolio.output_dir" => self.portfolio.output_dir = PathBuf::from(value),
            _ => {
                return Err(ResumeBuilderError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        ResumeBuilderError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}
