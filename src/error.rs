use std::path::PathBuf;

use thiserror::Error;

use crate::models::Field;

/// Why a file produced no record.
///
/// Per-file and never fatal: the walker skips the file and continues.
#[derive(Debug, Error)]
pub enum Reject {
    #[error("not a license file (fewer than two `---` marker lines)")]
    NotALicenseFile,

    #[error("missing required field `{0}`")]
    MissingRequiredField(Field),

    #[error("field `{0}` is not a YYYY-MM-DD date")]
    InvalidDateFormat(Field),

    #[error("unreadable: {0}")]
    Io(#[from] std::io::Error),
}

/// Root validation failures. Fatal: raised at entry, before any processing.
#[derive(Debug, Error)]
pub enum RootError {
    #[error("path does not exist: {0}")]
    Missing(PathBuf),

    #[error("path is not readable: {0}")]
    Unreadable(PathBuf),

    #[error("directory is not traversable: {0}")]
    NotTraversable(PathBuf),
}
