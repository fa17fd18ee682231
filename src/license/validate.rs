use std::sync::OnceLock;

use regex::Regex;

use crate::error::Reject;
use crate::models::Field;

use super::extract::LicenseFields;

/// Resolved values of a valid license block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseTerms {
    pub license: String,
    pub issued_by: String,
    pub issued_on: String,
    pub expires_on: Option<String>,
}

/// Check the required fields and date shapes of an extracted block.
///
/// `License`, `Issued by` and `Issued on` must be present, where presence
/// means the key exists; an empty value still counts. `Expires on` is
/// optional.
/// `Issued on` and a present `Expires on` must match `YYYY-MM-DD` exactly.
/// Presence is checked before shape, in block-key order.
pub fn validate(fields: &LicenseFields) -> Result<LicenseTerms, Reject> {
    let license = require(fields, Field::License)?;
    let issued_by = require(fields, Field::IssuedBy)?;
    let issued_on = require(fields, Field::IssuedOn)?;

    check_date_shape(&issued_on, Field::IssuedOn)?;
    let expires_on = fields.get(Field::ExpiresOn.key()).cloned();
    if let Some(date) = &expires_on {
        check_date_shape(date, Field::ExpiresOn)?;
    }

    Ok(LicenseTerms {
        license,
        issued_by,
        issued_on,
        expires_on,
    })
}

fn require(fields: &LicenseFields, field: Field) -> Result<String, Reject> {
    fields
        .get(field.key())
        .cloned()
        .ok_or(Reject::MissingRequiredField(field))
}

fn check_date_shape(date: &str, field: Field) -> Result<(), Reject> {
    if is_date_shape(date) {
        Ok(())
    } else {
        Err(Reject::InvalidDateFormat(field))
    }
}

/// Lexical `YYYY-MM-DD` check: ASCII digits and literal hyphens only.
/// No calendar validation; `9999-99-99` passes.
fn is_date_shape(date: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());
    re.is_match(date)
}
