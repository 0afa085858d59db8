//! ATS analyzer: resume vs. job description compatibility scorer

use ats_analyzer::cli::{self, Cli, Commands, ConfigAction};
use ats_analyzer::config::Config;
use ats_analyzer::error::{AtsError, Result};
use ats_analyzer::input::{file_detector::FileType, manager::InputManager, validate_inputs};
use ats_analyzer::output::{formatter::save_report_to_file, AnalysisReport, ReportGenerator};
use ats_analyzer::processing::AnalysisEngine;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_override: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            detailed,
            save,
            no_color,
        } => {
            info!("Starting ATS analysis");

            for (label, path) in [("Resume file", &resume), ("Job description file", &job)] {
                // Binary documents get a dedicated hint from the input manager.
                if !FileType::from_path(path).is_binary_document() {
                    cli::validate_file_extension(path, cli::INPUT_EXTENSIONS)
                        .map_err(|e| AtsError::InvalidInput(format!("{}: {}", label, e)))?;
                }
            }

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(AtsError::InvalidInput)?,
                None => config.output.format,
            };

            let started = Instant::now();

            let mut input_manager = InputManager::from_config(&config.input);
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;
            validate_inputs(&resume_text, &job_text)?;

            let engine = AnalysisEngine::with_weights(config.scoring)?;
            let result = engine.analyze(&resume_text, &job_text);

            let report = AnalysisReport::new(
                result,
                resume.display().to_string(),
                job.display().to_string(),
                started.elapsed().as_millis() as u64,
            );
            info!(
                "Analysis complete: score {} ({})",
                report.result.score,
                report.verdict()
            );

            // Colors never go to files
            let use_colors = config.output.color_output && !no_color && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                detailed || config.output.detailed,
                true,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    info!("Report saved to {}", path.display());
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }
        Commands::Config { action } => {
            let config_path = config_override.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", config_path.display());
                    println!("Scoring Weights:");
                    println!("  Keywords: {:.1}%", config.scoring.keyword_weight * 100.0);
                    println!("  Skills: {:.1}%", config.scoring.skill_weight * 100.0);
                    println!("  Sections: {:.1}%", config.scoring.section_weight * 100.0);
                    println!("  Action verbs: {:.1}%", config.scoring.action_verb_weight * 100.0);
                    println!("  Quantifiable: {:.1}%", config.scoring.quantifiable_weight * 100.0);
                    println!("  Experience: {:.1}%", config.scoring.experience_weight * 100.0);
                    println!("  Education: {:.1}%", config.scoring.education_weight * 100.0);
                    println!("\nInput:");
                    println!("  Caching: {}", config.input.enable_caching);
                    println!("  Max file size: {} KB", config.input.max_file_size_kb);
                    println!("\nOutput:");
                    println!("  Format: {:?}", config.output.format);
                    println!("  Detailed: {}", config.output.detailed);
                    println!("  Colors: {}", config.output.color_output);
                }
                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&config_path)?;
                    println!("✅ Configuration reset successfully!");
                }
                Some(ConfigAction::Path) => {
                    println!("{}", config_path.display());
                }
            }
        }
    }

    Ok(())
}
