//! Resume insight: resume analysis, ATS scoring, and job matching tool

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;
mod store;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, ResumeInsightError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::{ConsoleFormatter, JsonFormatter, OutputFormatter};
use processing::analyzer::{AnalysisEngine, ResumeAnalysis};
use processing::job_matcher::{JobPosting, UserPreferences};
use std::path::PathBuf;
use std::process;
use store::{AtsScoreCache, JsonFileStore};

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
            detailed,
            no_cache,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| ResumeInsightError::InvalidInput(format!("Resume file: {}", e)))?;
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeInsightError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            let job_text = match &job {
                Some(path) => {
                    cli::validate_file_extension(path, &["txt", "md"]).map_err(|e| {
                        ResumeInsightError::InvalidInput(format!("Job description file: {}", e))
                    })?;
                    Some(input_manager.extract_text(path).await?)
                }
                None => None,
            };

            let engine = AnalysisEngine::new(&config);
            let analysis = analyze_with_cache(
                &engine,
                &config,
                &resume_text,
                job_text.as_deref(),
                no_cache,
            )?;

            let formatter = make_formatter(&output_format, &config, detailed);
            println!("{}", formatter.format_analysis(&analysis)?);
            Ok(())
        }

        Commands::Match {
            resume,
            jobs,
            preferences,
            output,
            top,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| ResumeInsightError::InvalidInput(format!("Resume file: {}", e)))?;
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeInsightError::InvalidInput)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            let postings = load_jobs(&jobs).await?;
            let prefs = load_preferences(&preferences).await?;
            info!("Loaded {} job postings", postings.len());

            let engine = AnalysisEngine::new(&config);
            let document = engine.extract(&resume_text);
            let mut report = engine.match_jobs(&postings, &prefs, &document.skills);

            if let Some(top) = top {
                report.matches.truncate(top);
            }

            let formatter = make_formatter(&output_format, &config, false);
            println!("{}", formatter.format_matches(&report)?);
            Ok(())
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Reset) => {
                Config::reset()?;
                println!("Configuration reset to defaults.");
                Ok(())
            }
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeInsightError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
        },
    }
}

/// Score through the persistent cache unless caching is disabled.
fn analyze_with_cache(
    engine: &AnalysisEngine,
    config: &Config,
    resume_text: &str,
    job_text: Option<&str>,
    no_cache: bool,
) -> Result<ResumeAnalysis> {
    // Targeted scoring depends on the job description, so only the plain
    // score is cached.
    let use_cache = config.processing.enable_caching && !no_cache && job_text.is_none();

    if use_cache {
        let store = JsonFileStore::open(&Config::store_path())?;
        let mut cache = AtsScoreCache::new(store, config.processing.cache_ttl_hours);

        if let Some(cached) = cache.get(resume_text) {
            info!("Using cached ATS score");
            let document = engine.extract(resume_text);
            return Ok(ResumeAnalysis {
                document,
                ats: cached,
            });
        }

        let analysis = engine.analyze(resume_text, None);
        cache.put(resume_text, &analysis.ats);
        return Ok(analysis);
    }

    Ok(engine.analyze(resume_text, job_text))
}

fn make_formatter(
    format: &OutputFormat,
    config: &Config,
    detailed: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(
            config.output.color_output,
            detailed || config.output.detailed,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

async fn load_jobs(path: &PathBuf) -> Result<Vec<JobPosting>> {
    let content = tokio::fs::read_to_string(path).await?;
    let postings = serde_json::from_str(&content)?;
    Ok(postings)
}

async fn load_preferences(path: &PathBuf) -> Result<UserPreferences> {
    let content = tokio::fs::read_to_string(path).await?;
    let prefs = toml::from_str(&content).map_err(|e| {
        ResumeInsightError::InvalidInput(format!("Failed to parse preferences: {}", e))
    })?;
    Ok(prefs)
}
