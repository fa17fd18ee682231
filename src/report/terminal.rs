use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::models::LicenseSummary;

/// Render the terminal report: record echo plus a collected-count summary.
///
/// `quiet` reduces the output to the count line. `verbose` adds a table of
/// the collected entries.
pub fn render(
    summaries: &[LicenseSummary],
    root: &Path,
    output: &Path,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    if quiet {
        println!("Collected: {}", summaries.len().to_string().green());
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "license-collectr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanning: {}\n", root.display());

    for summary in summaries {
        print!("{}", summary.to_record());
    }

    if summaries.is_empty() {
        println!(" {} no license files found", "→".cyan());
    } else {
        println!(
            "\n {} {} license file(s) collected into {}",
            "✓".green(),
            summaries.len(),
            output.display()
        );
    }

    if verbose && !summaries.is_empty() {
        println!();
        render_table(summaries);
    }

    Ok(())
}

fn render_table(summaries: &[LicenseSummary]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("File").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Issued by").add_attribute(Attribute::Bold),
            Cell::new("Valid period").add_attribute(Attribute::Bold),
        ]);

    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.file_name),
            Cell::new(&summary.license),
            Cell::new(&summary.issued_by),
            Cell::new(format!(
                "{} - {}",
                summary.issued_on,
                summary.expires_display()
            )),
        ]);
    }

    println!("{}", table);
}
