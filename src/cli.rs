use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "revscan",
    version,
    about = "Repository revenue potential scoring and AI trend recommendation CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a checked-out repository for revenue potential
    Analyze(AnalyzeCommand),
    /// Score a repository and print trend-aligned recommendations
    Suggest(SuggestCommand),
    /// Render the curated AI trend catalog
    Trends(TrendsCommand),
}

/// Repository metadata inputs. A `--meta` JSON file (accepting
/// `gh repo list --json` field names) is read first; individual flags
/// override it.
#[derive(Args)]
pub struct MetadataArgs {
    /// JSON metadata file
    #[arg(long)]
    pub meta: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub stars: Option<u64>,

    #[arg(long)]
    pub forks: Option<u64>,

    #[arg(long)]
    pub issues: Option<u64>,

    #[arg(long)]
    pub description: Option<String>,

    /// RFC 3339 timestamp of the last update
    #[arg(long)]
    pub updated_at: Option<String>,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Path to the checked-out repository
    pub path: PathBuf,

    #[command(flatten)]
    pub metadata: MetadataArgs,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Explicit config file (defaults to ./revscan.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct SuggestCommand {
    /// Path to the checked-out repository
    pub path: PathBuf,

    #[command(flatten)]
    pub metadata: MetadataArgs,

    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep only the first N recommendations
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct TrendsCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
