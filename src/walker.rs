use std::path::Path;

use colored::Colorize;
use walkdir::WalkDir;

use crate::error::RootError;
use crate::license;
use crate::models::LicenseSummary;

/// Check that `root` can serve as a scan root.
///
/// A file root must be openable; a directory root must be listable, which
/// is what the executable bit grants on POSIX. Violations abort the run
/// before any file is processed.
pub fn validate_root(root: &Path) -> Result<(), RootError> {
    let meta = std::fs::metadata(root).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            RootError::Missing(root.to_path_buf())
        } else {
            RootError::Unreadable(root.to_path_buf())
        }
    })?;

    if meta.is_dir() {
        std::fs::read_dir(root).map_err(|_| RootError::NotTraversable(root.to_path_buf()))?;
    } else {
        std::fs::File::open(root).map_err(|_| RootError::Unreadable(root.to_path_buf()))?;
    }

    Ok(())
}

/// Walk `root` depth-first and collect one summary per valid license file.
///
/// Sibling order follows the platform's directory listing and is not
/// guaranteed. Per-file rejections are skipped (printed to stderr when
/// `verbose`); an unreadable subdirectory is reported and skipped without
/// aborting the walk. Symlinked directories are never followed.
pub fn collect(root: &Path, verbose: bool) -> Result<Vec<LicenseSummary>, RootError> {
    validate_root(root)?;

    let mut summaries = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("{} skipping unreadable entry: {}", "warning:".yellow().bold(), err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match license::process_file(entry.path()) {
            Ok(summary) => summaries.push(summary),
            Err(reason) => {
                if verbose {
                    eprintln!(
                        "  {} {}: {}",
                        "skip".dimmed(),
                        entry.path().display(),
                        reason
                    );
                }
            }
        }
    }

    Ok(summaries)
}
