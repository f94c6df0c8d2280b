//! Resume matcher: AI-powered resume and job description skill matching tool

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::Config;
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::extraction::client::{GeminiClient, ProfileExtractor};
use resume_matcher::input::manager::InputManager;
use resume_matcher::matching::{compare, normalize_skills};
use resume_matcher::output::{MatchReport, ReportGenerator};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Pick up GEMINI_API_KEY and friends from a local .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            save,
        } => {
            info!("Starting resume match analysis");

            cli::validate_file_extension(&resume, &["pdf", "docx", "txt", "md"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeMatcherError::InvalidInput)?;

            // Resolve the job description before any model call
            let mut input_manager = InputManager::new();

            let (job_content, job_source) = match (job, job_text) {
                (Some(path), None) => {
                    cli::validate_file_extension(&path, &["txt", "md", "pdf", "docx"]).map_err(
                        |e| {
                            ResumeMatcherError::InvalidInput(format!(
                                "Job description file: {}",
                                e
                            ))
                        },
                    )?;
                    let text = input_manager.extract_text(&path).await?;
                    (text, path.display().to_string())
                }
                (None, Some(text)) => (text, "(inline)".to_string()),
                _ => {
                    return Err(ResumeMatcherError::InvalidInput(
                        "Provide a job description via --job or --job-text".to_string(),
                    ))
                }
            };

            if job_content.trim().is_empty() {
                return Err(ResumeMatcherError::InvalidInput(
                    "Job description text is blank".to_string(),
                ));
            }

            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Description: {}", job_source);

            let resume_text = input_manager.extract_text(&resume).await?;
            info!("Resume text length: {} characters", resume_text.len());

            let client = GeminiClient::new(&config.extraction)?;

            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
                spinner.set_style(style);
            }
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner.set_message("Extracting profiles...");

            // Two sequential model calls; either failure aborts the run
            // before any comparison output
            let extracted = async {
                let candidate = client.extract_candidate(&resume_text).await?;
                let requirement = client.extract_requirement(&job_content).await?;
                Ok::<_, ResumeMatcherError>((candidate, requirement))
            }
            .await;

            spinner.finish_and_clear();
            let (candidate, requirement) = extracted?;

            let comparison = compare(
                &normalize_skills(&candidate.skills),
                &normalize_skills(&requirement.skills),
            );

            let report = MatchReport::new(
                candidate,
                requirement,
                comparison,
                resume.display().to_string(),
                job_source,
                config.extraction.model.clone(),
            );

            let generator =
                ReportGenerator::new(config.output.color_output, config.output.pretty_json);
            let rendered = generator.format_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    generator.save_report(&report, &output_format, &path)?;
                    println!("💾 Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            Ok(())
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeMatcherError::Configuration(format!(
                            "Failed to serialize config: {}",
                            e
                        ))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::reset()?;
                    println!("✅ Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}
