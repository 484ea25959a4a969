//! CLI interface for the resume radar

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-radar")]
#[command(about = "Score a resume against a target role, with AI-backed feedback")]
#[command(
    long_about = "Analyze how well a resume fits a target role using keyword matching, ATS heuristics, and optional AI analysis, with a rolling history of past runs"
)]
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
    /// Analyze a resume against a target role
    Analyze {
        /// Path to resume file (TXT, MD)
        #[arg(short, long, conflicts_with = "sample")]
        resume: Option<PathBuf>,

        /// Use the built-in sample resume instead of a file
        #[arg(long)]
        sample: bool,

        /// Target role id (see `resume-radar roles`)
        #[arg(long)]
        role: String,

        /// Label stored with this run in history
        #[arg(short, long, default_value = "My Resume")]
        name: String,

        /// Skip AI analysis (heuristics only)
        #[arg(long)]
        no_ai: bool,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// List the target roles and their required skills
    Roles,

    /// Inspect past analyses
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Summary statistics over the analysis history
    Stats,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List stored analyses, newest first
    List,

    /// Show one stored analysis in full
    Show {
        /// Entry id (see `resume-radar history list`)
        id: String,

        /// Print the entry as JSON instead of the console view
        #[arg(long)]
        json: bool,
    },

    /// Dump the whole history as JSON, newest first
    Export,

    /// Delete one stored analysis
    Delete {
        /// Entry id to delete
        id: String,
    },

    /// Delete all stored analyses
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
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
