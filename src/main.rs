mod analyze;
mod cli;
mod config;
mod error;
mod report;
mod scan;
mod trends;
mod types;

use crate::error::{Result, RevscanError};
use crate::types::config::RevscanConfig;
use crate::types::metadata::RepoMetadata;
use chrono::Utc;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_metadata(args: &cli::MetadataArgs, root: &Path) -> Result<RepoMetadata> {
    let mut metadata = match &args.meta {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content).map_err(|e| {
                RevscanError::MetadataParse(format!("{}: {}", path.display(), e))
            })?
        }
        None => RepoMetadata::default(),
    };

    if let Some(name) = &args.name {
        metadata.name = name.clone();
    }
    if let Some(url) = &args.url {
        metadata.url = url.clone();
    }
    if let Some(stars) = args.stars {
        metadata.star_count = stars;
    }
    if let Some(forks) = args.forks {
        metadata.fork_count = forks;
    }
    if let Some(issues) = args.issues {
        metadata.open_issue_count = issues;
    }
    if let Some(description) = &args.description {
        metadata.description = description.clone();
    }
    if let Some(updated_at) = &args.updated_at {
        metadata.last_updated = Some(updated_at.clone());
    }

    if metadata.name.is_empty() {
        metadata.name = root
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
    }

    Ok(metadata)
}

fn resolve_weights(config_path: Option<&Path>) -> Result<[f64; 7]> {
    let loaded = config::load_config(config_path)?;
    Ok(loaded
        .as_ref()
        .map(RevscanConfig::weights)
        .unwrap_or_else(RevscanConfig::default_weights))
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let weights = resolve_weights(cmd.config.as_deref())?;
            let metadata = resolve_metadata(&cmd.metadata, &cmd.path)?;
            let model = scan::discover(&cmd.path)?;
            let analysis = analyze::score(&metadata, &model, Utc::now(), &weights);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render_analysis(&analysis, output_format)?;
            println!("{rendered}");

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Suggest(cmd) => {
            let weights = resolve_weights(cmd.config.as_deref())?;
            let metadata = resolve_metadata(&cmd.metadata, &cmd.path)?;
            let model = scan::discover(&cmd.path)?;
            let analysis = analyze::score(&metadata, &model, Utc::now(), &weights);

            let trend_set = trends::TrendSet::latest();
            let mut recommendations = trends::recommend(&analysis, &trend_set);
            if let Some(top) = cmd.top {
                recommendations.truncate(top);
            }

            if recommendations.is_empty() {
                println!("suggest: no recommendations");
                return Ok(exit_code::SUCCESS);
            }

            println!(
                "suggestions for {} (potential: {}):",
                analysis.name, analysis.revenue_tier
            );
            for recommendation in &recommendations {
                println!(
                    "- [{}] {}: {} (effort {}; {})",
                    recommendation.priority,
                    recommendation.category,
                    recommendation.action,
                    recommendation.effort,
                    recommendation.impact
                );
            }

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Trends(cmd) => {
            let trend_set = trends::TrendSet::latest();
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render_trends(&trend_set, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
