use std::path::Path;

use crate::error::Reject;
use crate::models::LicenseSummary;

pub mod classifier;
pub mod extract;
pub mod validate;

/// Run one file through the classify → extract → validate pipeline.
///
/// Reads the file once and releases the handle before returning. Bytes are
/// converted lossily, so a readable binary file fails classification
/// instead of erroring the walk; only an actual read failure maps to
/// [`Reject::Io`].
pub fn process_file(path: &Path) -> Result<LicenseSummary, Reject> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    process_content(&base_name(path), &content)
}

/// Content-level pipeline, split from I/O so it is a pure function of
/// file name plus content.
pub fn process_content(file_name: &str, content: &str) -> Result<LicenseSummary, Reject> {
    if !classifier::is_license_file(content) {
        return Err(Reject::NotALicenseFile);
    }

    let fields = extract::extract(content);
    let terms = validate::validate(&fields)?;

    Ok(LicenseSummary {
        file_name: file_name.to_string(),
        license: terms.license,
        issued_by: terms.issued_by,
        issued_on: terms.issued_on,
        expires_on: terms.expires_on,
    })
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
