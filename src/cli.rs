use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "profile-scan",
    version,
    about = "School profile completeness scoring with scan history"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding profile-scan.toml and the scan store
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a profile document and compare it with earlier scans
    Analyze(AnalyzeCommand),
    /// Show the change between the two newest scans of a school
    Trend(TrendCommand),
    /// List recorded scans of a school, newest first
    History(HistoryCommand),
    /// Score every profile document under a directory
    Batch(BatchCommand),
    /// Extract school slugs from a CSV of profile URLs
    Slugs(SlugsCommand),
    /// Print the review prompt for a map of profile sections
    Prompt(PromptCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub path: PathBuf,
    /// School identifier; defaults to the document's `slug`
    #[arg(long)]
    pub slug: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Do not append this scan to the store
    #[arg(long)]
    pub no_record: bool,
}

#[derive(Args)]
pub struct TrendCommand {
    pub slug: String,
}

#[derive(Args)]
pub struct HistoryCommand {
    pub slug: String,
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Args)]
pub struct BatchCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub no_record: bool,
}

#[derive(Args)]
pub struct SlugsCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct PromptCommand {
    /// JSON object of section title to section text
    pub path: PathBuf,
    #[arg(long)]
    pub slug: String,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
