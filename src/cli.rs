//! CLI interface for the career matcher

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "career-matcher")]
#[command(about = "Recommend jobs from the skills section of a resume")]
#[command(long_about = "Extract the skills section from PDF or DOCX resumes and match it against a job catalog using bag-of-words cosine similarity")]
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
    /// Recommend jobs for one or more resumes
    Recommend {
        /// Path to resume file (PDF, DOCX); repeat for several resumes
        #[arg(short, long, required = true, num_args = 1..)]
        resume: Vec<PathBuf>,

        /// Job catalog CSV (overrides configuration)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file (one resume) or directory (several resumes)
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show job catalog statistics
    Catalog {
        /// Job catalog CSV (overrides configuration)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Number of most frequent skill tokens to list
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
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
