use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-collectr",
    about = "Collect license summaries from marker-delimited license files",
    version
)]
pub struct Cli {
    /// Root path to scan (file or directory)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output file receiving one record line per valid license file
    #[arg(short, long, default_value = "licenses.txt")]
    pub output: PathBuf,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show skipped files and the reason each was skipped
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the collected count
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
