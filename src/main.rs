//! Resume builder: ATS-aware resume summary, bullet, and cover letter generation

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_builder::cli::{self, Cli, Commands, ConfigAction, ExportArgs};
use resume_builder::config::Config;
use resume_builder::error::{Result, ResumeBuilderError};
use resume_builder::input::InputManager;
use resume_builder::output::{save_report_to_file, suggest_filename, PortfolioBundle, ReportGenerator};
use resume_builder::processing::generator::{ApplicationGenerator, ApplicationPackage, ApplicationRequest};
use resume_builder::processing::keywords::{keyword_coverage, KeywordExtractor};
use resume_builder::processing::text_processor::truncate_input;
use resume_builder::processing::tfidf::calculate_tfidf;
use resume_builder::profile::Profile;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt", "md"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: PathBuf) -> Result<()> {
    let max_chars = config.processing.max_input_chars;

    match command {
        Commands::Keywords { job, resume } => {
            let mut input_manager = InputManager::new();
            let job_text = input_manager.extract_text(&job).await?;
            let keywords = KeywordExtractor::new().extract_keywords(truncate_input(&job_text, max_chars));

            println!("🔤 ATS Keywords ({})", keywords.len());
            for (i, keyword) in keywords.iter().enumerate() {
                println!("  {}. {}", i + 1, keyword);
            }

            if let Some(resume) = resume {
                let resume_text = input_manager.extract_text(&resume).await?;
                let coverage = keyword_coverage(truncate_input(&resume_text, max_chars), keywords.as_slice());

                println!("\n📈 Keyword Coverage: {:.1}%", coverage.ratio() * 100.0);
                if !coverage.missing.is_empty() {
                    println!("⚠️  Missing: {}", coverage.missing.join(", "));
                }
            }
        }

        Commands::Tfidf { documents, top } => {
            let mut input_manager = InputManager::new();
            let mut texts = Vec::with_capacity(documents.len());
            for document in &documents {
                let text = input_manager.extract_text(document).await?;
                texts.push(truncate_input(&text, max_chars).to_string());
            }

            let scores = calculate_tfidf(texts.as_slice());
            if scores.is_empty() {
                println!("No term scored above the noise threshold.");
                if documents.len() == 1 {
                    println!("💡 A single document has no corpus to contrast against; use `keywords` instead.");
                }
                return Ok(());
            }

            for (index, document) in documents.iter().enumerate() {
                let mut ranked: Vec<(&str, f64)> = scores
                    .iter()
                    .filter_map(|(term, pairs)| {
                        pairs
                            .iter()
                            .find(|(doc, _)| *doc == index)
                            .map(|(_, score)| (term.as_str(), *score))
                    })
                    .collect();
                ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

                println!("\n📄 {}", document.display());
                for (term, score) in ranked.into_iter().take(top) {
                    println!("  • {:<24} {:.4}", term, score);
                }
            }
        }

        Commands::Generate { resume, job, name, email, export } => {
            cli::validate_file_extension(&resume, RESUME_EXTENSIONS)
                .map_err(|e| ResumeBuilderError::InvalidInput(format!("Resume file: {}", e)))?;
            if let Some(job) = &job {
                cli::validate_file_extension(job, RESUME_EXTENSIONS)
                    .map_err(|e| ResumeBuilderError::InvalidInput(format!("Job description file: {}", e)))?;
            }

            let mut input_manager = InputManager::new();
            let request = ApplicationRequest {
                name: name.unwrap_or_default(),
                email: email.unwrap_or_default(),
                resume_text: input_manager.extract_text(&resume).await?,
                job_description: input_manager.extract_optional(job.as_deref()).await?,
            };

            if request.resume_text.trim().is_empty() {
                return Err(ResumeBuilderError::InvalidInput(format!(
                    "No text could be extracted from {}",
                    resume.display()
                )));
            }

            let package = generate_with_spinner(&request, max_chars);
            export_package(&package, &export, &config)?;
        }

        Commands::Regenerate { profile, export } => {
            let profile = Profile::load(&profile)?;
            info!("Loaded profile for {}", profile.name);

            let package = generate_with_spinner(&profile.to_request(), max_chars);
            export_package(&package, &export, &config)?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Max input characters: {}", config.processing.max_input_chars);
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Colored output: {}", config.output.color_output);
                println!("Pretty JSON: {}", config.output.pretty_json);
                println!("Portfolio directory: {}", config.portfolio.output_dir.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                config.set(&key, &value)?;
                config.save_to(&config_path)?;
                println!("✅ Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn generate_with_spinner(request: &ApplicationRequest, max_chars: usize) -> ApplicationPackage {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Generating application documents...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let package = ApplicationGenerator::new(max_chars).generate(request);

    spinner.finish_and_clear();
    package
}

fn export_package(package: &ApplicationPackage, export: &ExportArgs, config: &Config) -> Result<()> {
    let format = match &export.output {
        Some(output) => cli::parse_output_format(output).map_err(ResumeBuilderError::InvalidInput)?,
        None => config.output.format,
    };

    // colors never go to files
    let use_colors = config.output.color_output && export.save.is_none();
    let reports = ReportGenerator::with_options(
        use_colors,
        export.detailed || config.output.detailed,
        config.output.pretty_json,
        true,
    );
    let rendered = reports.generate_report(package, format)?;

    match &export.save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(format, &package.name, true))
            } else {
                path.clone()
            };
            save_report_to_file(&rendered, &path)?;
            println!("💾 Saved {:?} output to {}", format, path.display());
        }
        None => println!("{}", rendered),
    }

    let output_dir = &config.portfolio.output_dir;
    if export.bundle {
        let path = PortfolioBundle::new(package).write_zip(output_dir)?;
        println!("📦 Portfolio bundle: {}", path.display());
    }

    if export.save_profile {
        let path = Profile::from_package(package).save_to_dir(output_dir)?;
        println!("🗂️  Profile saved: {}", path.display());
    }

    Ok(())
}
