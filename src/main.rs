//! Resume radar: score a resume against a target role, with AI-backed feedback

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_radar::ai::OpenAiProvider;
use resume_radar::analysis::AnalysisResult;
use resume_radar::cli::{
    parse_output_format, validate_file_extension, Cli, Commands, ConfigAction, HistoryAction,
    OutputFormat,
};
use resume_radar::engine::Analyzer;
use resume_radar::error::{Error, Result};
use resume_radar::export::ExportRecord;
use resume_radar::history::{stats, HistoryStore, JsonFileBackend};
use resume_radar::Config;
use std::process;
use std::time::Duration;

const SAMPLE_RESUME: &str = include_str!("../assets/sample_resume.txt");

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            sample,
            role,
            name,
            no_ai,
            output,
        } => {
            info!("Starting resume analysis for role '{}'", role);

            let output_format =
                parse_output_format(&output).map_err(Error::InvalidInput)?;

            // Resolve the resume text
            let resume_text = match (&resume, sample) {
                (Some(path), _) => {
                    validate_file_extension(path, &["txt", "md"])
                        .map_err(|e| Error::InvalidInput(format!("Resume file: {}", e)))?;
                    std::fs::read_to_string(path)?
                }
                (None, true) => SAMPLE_RESUME.to_string(),
                (None, false) => {
                    return Err(Error::InvalidInput(
                        "Provide a resume with --resume <file> or use --sample".to_string(),
                    ));
                }
            };

            // Prefer the AI path when a plausible key is present
            let analyzer = if no_ai || !config.ai.is_configured() {
                if !no_ai {
                    info!("AI provider not configured, using heuristic analysis");
                }
                Analyzer::new(&config)
            } else {
                let provider = OpenAiProvider::from_config(&config.ai)?;
                Analyzer::with_provider(&config, Box::new(provider))
            };

            let result = if analyzer.has_provider() {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::with_template("{spinner} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                spinner.set_message("Running AI analysis...");
                spinner.enable_steady_tick(Duration::from_millis(100));
                let result = analyzer.analyze(&resume_text, &role).await;
                spinner.finish_and_clear();
                result?
            } else {
                analyzer.analyze(&resume_text, &role).await?
            };

            // Record the run before printing, so history survives a broken pipe
            let role_name = analyzer
                .catalog()
                .get(&role)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| role.clone());
            let backend = JsonFileBackend::new(config.history_path());
            let mut store = HistoryStore::open(Box::new(backend), config.history.max_entries)?;
            let entry = store.append(&role, &role_name, &name, result.clone())?;
            info!("Recorded analysis {}", entry.id);

            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&ExportRecord::from_entry(&entry))?);
                }
                OutputFormat::Console => print_analysis(&role_name, &name, &result),
            }
        }

        Commands::Roles => {
            println!("🎯 Target Roles\n");
            for role in config.catalog().roles() {
                println!("{} {} ({})", role.icon, role.name.bold(), role.id);
                println!("   Skills: {}", role.skills.join(", "));
                println!();
            }
        }

        Commands::History { action } => {
            let backend = JsonFileBackend::new(config.history_path());
            let mut store = HistoryStore::open(Box::new(backend), config.history.max_entries)?;

            match action {
                Some(HistoryAction::List) | None => {
                    if store.is_empty() {
                        println!("📭 No analyses recorded yet. Run `resume-radar analyze` first.");
                        return Ok(());
                    }
                    println!("🗂️  Analysis History ({} entries)\n", store.len());
                    for entry in store.list() {
                        println!(
                            "{}  {}  {}  match {}  ats {}",
                            entry.id.dimmed(),
                            entry.timestamp.format("%Y-%m-%d %H:%M"),
                            entry.role_name,
                            score_label(entry.result.match_percentage),
                            score_label(entry.result.ats_score),
                        );
                    }
                }

                Some(HistoryAction::Show { id, json }) => {
                    let entry = store
                        .get(&id)
                        .ok_or_else(|| Error::InvalidInput(format!("No history entry '{}'", id)))?;
                    let record = ExportRecord::from_entry(entry);
                    if json {
                        println!("{}", serde_json::to_string_pretty(&record)?);
                    } else {
                        for (label, value) in record.fields() {
                            println!("{:>10}: {}", label, value);
                        }
                        print_analysis(&entry.role_name, &entry.resume_name, &entry.result);
                    }
                }

                Some(HistoryAction::Export) => {
                    let records: Vec<ExportRecord> =
                        store.list().iter().map(ExportRecord::from_entry).collect();
                    println!("{}", serde_json::to_string_pretty(&records)?);
                }

                Some(HistoryAction::Delete { id }) => {
                    if store.remove(&id)? {
                        println!("🗑️  Deleted analysis {}", id);
                    } else {
                        return Err(Error::InvalidInput(format!("No history entry '{}'", id)));
                    }
                }

                Some(HistoryAction::Clear) => {
                    let count = store.len();
                    store.clear()?;
                    println!("🗑️  Cleared {} stored analyses", count);
                }
            }
        }

        Commands::Stats => {
            let backend = JsonFileBackend::new(config.history_path());
            let store = HistoryStore::open(Box::new(backend), config.history.max_entries)?;
            let summary = stats::compute(store.list());

            println!("📊 History Statistics\n");
            println!("Total analyses:   {}", summary.total);
            println!("Average match:    {}", score_label(summary.avg_match));
            println!("Average ATS:      {}", score_label(summary.avg_ats));
            if let Some(role) = &summary.top_role {
                println!("Most analyzed:    {}", role);
            }
            let trend = if summary.improvement > 0 {
                format!("+{} 📈", summary.improvement).green().to_string()
            } else if summary.improvement < 0 {
                format!("{} 📉", summary.improvement).red().to_string()
            } else {
                "±0".to_string()
            };
            println!("Recent trend:     {}", trend);

            let series = stats::chart_series(store.list());
            if !series.is_empty() {
                println!("\n📈 Match score over time:");
                for point in &series {
                    let bar = "█".repeat((point.match_percentage as usize / 5).max(1));
                    println!("  {:>6}  {:>3}%  {}", point.date, point.match_percentage, bar);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("AI model: {}", config.ai.model);
                println!("AI key env var: {}", config.ai.api_key_env);
                println!(
                    "AI configured: {}",
                    if config.ai.is_configured() { "yes" } else { "no" }
                );
                println!("History file: {}", config.history_path().display());
                println!("History capacity: {}", config.history.max_entries);
                println!("\nATS signal weights:");
                println!("  Sections:   {}", config.scoring.section_weight);
                println!("  Length:     {}", config.scoring.length_weight);
                println!("  Formatting: {}", config.scoring.formatting_weight);
                println!("  Density:    {}", config.scoring.density_weight);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn print_analysis(role_name: &str, resume_name: &str, result: &AnalysisResult) {
    println!("\n🎯 {} vs {}", resume_name.bold(), role_name.bold());
    if result.is_ai_powered {
        println!("🤖 AI analysis");
    } else {
        println!("📐 Heuristic analysis");
    }

    println!("\n📊 Scores:");
    println!("  • Skill match: {}", score_label(result.match_percentage));
    println!("  • ATS score:   {}", score_label(result.ats_score));

    if !result.matched_skills.is_empty() {
        println!("\n✅ Matched skills:");
        for skill in &result.matched_skills {
            println!("  • {}", skill.green());
        }
    }

    if !result.missing_skills.is_empty() {
        println!("\n⚠️  Missing skills:");
        for skill in &result.missing_skills {
            println!("  • {}", skill.yellow());
        }
    }

    println!("\n💡 Suggestions:");
    for (i, suggestion) in result.suggestions.iter().enumerate() {
        println!("  {}. {}", i + 1, suggestion);
    }

    if let Some(feedback) = &result.detailed_feedback {
        println!("\n📝 Detailed feedback:");
        println!("{}", feedback);
    }
}

fn score_label(score: u32) -> String {
    let text = format!("{}%", score);
    if score >= 70 {
        text.green().to_string()
    } else if score >= 40 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
