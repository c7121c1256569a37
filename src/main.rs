//! Resume scorer: score resumes against job descriptions and quality heuristics

use clap::Parser;
use log::{error, info};
use resume_scorer::cli::{self, Cli, Commands, ConfigAction};
use resume_scorer::config::Config;
use resume_scorer::error::{Result, ResumeScorerError};
use resume_scorer::input::InputManager;
use resume_scorer::output::formatter::ReportGenerator;
use resume_scorer::output::report::{save_report, ReportMetadata};
use resume_scorer::AnalysisEngine;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
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

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Job description file: {}", e)))?;
            let format = cli::parse_output_format(&output).map_err(ResumeScorerError::InvalidInput)?;

            info!("Scoring {} against {}", resume.display(), job.display());

            let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let engine = AnalysisEngine::new();
            let report = engine.analyze_alignment(&resume_text, &job_text);

            let metadata = ReportMetadata::new(
                &resume.display().to_string(),
                Some(&job.display().to_string()),
            );
            let detailed = detailed || config.output.detailed;
            let formatter = ReportGenerator::formatter(&format, config.output.color_output, detailed);
            let rendered = formatter.format_match(&report, &metadata)?;

            emit(&rendered, save.as_deref())?;
        }

        Commands::Check {
            resume,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Resume file: {}", e)))?;
            let format = cli::parse_output_format(&output).map_err(ResumeScorerError::InvalidInput)?;

            info!("Checking resume quality for {}", resume.display());

            let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);
            let resume_text = input_manager.extract_text(&resume).await?;

            let engine = AnalysisEngine::new();
            let report = engine.check_quality(&resume_text);

            let metadata = ReportMetadata::new(&resume.display().to_string(), None);
            let detailed = detailed || config.output.detailed;
            let formatter = ReportGenerator::formatter(&format, config.output.color_output, detailed);
            let rendered = formatter.format_quality(&report, &metadata)?;

            emit(&rendered, save.as_deref())?;
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeScorerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
            }
            ConfigAction::Reset => {
                Config::reset()?;
                println!("Configuration reset to defaults.");
            }
        },
    }

    Ok(())
}

/// Print the rendered report, and save it to disk when requested.
fn emit(rendered: &str, save: Option<&Path>) -> Result<()> {
    println!("{}", rendered);
    if let Some(path) = save {
        save_report(rendered, path)?;
        println!("Report saved to {}", path.display());
    }
    Ok(())
}
