//! Career matcher: resume skills extraction and job recommendation

use anyhow::Context;
use career_matcher::cli::{self, Cli, Commands, ConfigAction};
use career_matcher::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use career_matcher::output::report::RecommendationReport;
use career_matcher::{CareerMatchError, CareerPipeline, Config, CorpusIndex};
use clap::Parser;
use log::{error, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
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
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> career_matcher::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Load the catalog and build the index; failure here is fatal for the process
fn build_index(catalog: Option<PathBuf>, config: &Config) -> anyhow::Result<CorpusIndex> {
    let catalog_path = catalog.unwrap_or_else(|| config.catalog.path.clone());

    cli::validate_file_extension(&catalog_path, &["csv"])
        .map_err(|e| CareerMatchError::InvalidInput(format!("Catalog file: {}", e)))?;

    let index = CorpusIndex::from_csv(&catalog_path)
        .with_context(|| format!("Failed to initialize job catalog from {}", catalog_path.display()))?;
    Ok(index)
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    match command {
        Commands::Recommend {
            resume,
            catalog,
            output,
            save,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(CareerMatchError::InvalidInput)?,
                None => config.output.format,
            };

            info!("Starting career recommendation for {} resume(s)", resume.len());
            let index = build_index(catalog, &config)?;
            let pipeline = CareerPipeline::new(&index, config.matching.top_k);

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                config.output.show_skills,
                true,
                true,
            );
            let several = resume.len() > 1;
            let mut written = HashSet::new();

            for path in &resume {
                let start_time = Instant::now();
                let outcome = pipeline.process_path(path).await;
                let report = RecommendationReport::new(path.display().to_string(), outcome, start_time.elapsed());
                let rendered = generator.generate_report(&report, &output_format)?;

                match &save {
                    Some(target) => {
                        let file = if several {
                            target.join(suggest_filename(&output_format, &report.source, false))
                        } else {
                            target.clone()
                        };
                        if !written.insert(file.clone()) {
                            anyhow::bail!(
                                "Refusing to overwrite {}: two resumes map to the same report file",
                                file.display()
                            );
                        }
                        save_report_to_file(&rendered, &file)?;
                        println!("Saved {} report to {}", report.category(), file.display());
                    }
                    None => println!("{}", rendered),
                }
            }
        }

        Commands::Catalog { catalog, top } => {
            let index = build_index(catalog, &config)?;

            println!("Job Catalog\n");
            println!("Jobs: {}", index.len());
            println!("Vocabulary size: {} tokens", index.vocabulary().len());

            let top_tokens = index.top_tokens(top);
            if !top_tokens.is_empty() {
                println!("\nMost frequent skill tokens:");
                for (i, (token, count)) in top_tokens.iter().enumerate() {
                    println!("  {}. {} ({})", i + 1, token, count);
                }
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("Current Configuration ({})\n", path.display());
                    println!("Catalog: {}", config.catalog.path.display());
                    println!("Top K: {}", config.matching.top_k);
                    println!("Output Format: {:?}", config.output.format);
                    println!("Colors: {}", config.output.color_output);
                    println!("Show Skills: {}", config.output.show_skills);
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset to defaults at {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}
