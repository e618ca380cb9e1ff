//! resume-checker: rule-based resume quality checker

use clap::Parser;
use log::{error, info, warn};
use resume_checker::cli::{self, Cli, Commands, ConfigAction};
use resume_checker::input::InputManager;
use resume_checker::output::formatter::{resolve_save_path, save_report_to_file, summary_line, ReportGenerator};
use resume_checker::output::report::CheckReport;
use resume_checker::{Config, Faculty, Result, ResumeAnalyzer, ResumeCheckerError};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = load_config(cli.config.as_deref());

    match run_command(cli.command, config, cli.config).await {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            if e.is_user_error() {
                error!("{}", e);
            } else {
                error!("Command failed: {}", e);
            }
            process::exit(2);
        }
    }
}

/// Explicit paths must load; the default location falls back to built-in defaults
fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    };

    match loaded {
        Ok(config) => config,
        Err(e) if path.is_some() => {
            error!("Failed to load configuration: {}", e);
            process::exit(2);
        }
        Err(e) => {
            warn!("Failed to load configuration, using defaults: {}", e);
            Config::default()
        }
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<i32> {
    match command {
        Commands::Check {
            file,
            faculty,
            output,
            save,
            detailed,
            no_color,
        } => {
            let format = match output {
                Some(name) => cli::parse_output_format(&name).map_err(ResumeCheckerError::InvalidInput)?,
                None => config.output.format,
            };

            let faculty = faculty.and_then(|name| {
                let parsed = Faculty::from_name(&name);
                if parsed.is_none() {
                    warn!("Unknown faculty '{}', checking without a faculty profile", name);
                }
                parsed
            });

            info!("Checking resume: {}", file.display());
            let mut input_manager = InputManager::new(config.input.clone());
            let text = input_manager.extract_text(&file).await?;

            let analyzer = ResumeAnalyzer::new(&config)?;
            let result = analyzer.analyze(&text, faculty);
            info!("{}", summary_line(&result));

            let has_critical = result.has_critical_issues();
            let report = CheckReport::new(result, file.to_string_lossy());

            let use_colors = config.output.color_output && !no_color && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed || config.output.detailed, true, true);
            let rendered = generator.generate_report(&report, format)?;

            match save {
                Some(target) => {
                    let path = resolve_save_path(&target, format, &report.metadata.resume_file);
                    save_report_to_file(&rendered, &path)?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            Ok(if has_critical { 1 } else { 0 })
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("# {}\n", path.display());
                    println!("{}", config.to_toml()?);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults: {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
            Ok(0)
        }
    }
}
