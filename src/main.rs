//! `license-collectr` — scan a tree for marker-delimited license files and
//! collect their summaries.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Validate the scan root and walk it depth-first ([`walker`]).
//! 3. Each regular file runs the classify → extract → validate pipeline
//!    ([`license`]); rejections are skipped, the walk continues.
//! 4. Write one record per valid license file to the output file.
//! 5. Render the requested report ([`report`]).

mod cli;
mod error;
mod license;
mod models;
mod report;
mod walker;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, ReportFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    walker::validate_root(&cli.root)?;

    // Truncate-then-write; created before the walk, so a bad output target
    // fails the run before any file is processed.
    let mut out = std::fs::File::create(&cli.output)
        .with_context(|| format!("cannot create output file {}", cli.output.display()))?;

    let summaries = walker::collect(&cli.root, cli.verbose)?;
    for summary in &summaries {
        out.write_all(summary.to_record().as_bytes())
            .with_context(|| format!("cannot write to {}", cli.output.display()))?;
    }

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&summaries, &cli.root, &cli.output, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
    }

    Ok(())
}
