use serde::Serialize;

/// Field names recognized inside a license block.
///
/// `Display` renders the key exactly as it is spelled in the block, so the
/// same value can tag rejection reasons and look up the extracted map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    License,
    IssuedBy,
    IssuedOn,
    ExpiresOn,
}

impl Field {
    /// The key as written in a license block.
    pub fn key(self) -> &'static str {
        match self {
            Field::License => "License",
            Field::IssuedBy => "Issued by",
            Field::IssuedOn => "Issued on",
            Field::ExpiresOn => "Expires on",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One collected license: the file's base name plus its resolved terms.
///
/// Immutable once built; the walker accumulates these in traversal order.
#[derive(Debug, Clone, Serialize)]
pub struct LicenseSummary {
    pub file_name: String,
    pub license: String,
    pub issued_by: String,
    pub issued_on: String,
    /// `None` means the license never expires; rendered as `unlimited`.
    pub expires_on: Option<String>,
}

impl LicenseSummary {
    /// The expiry date as shown in records and reports.
    pub fn expires_display(&self) -> &str {
        self.expires_on.as_deref().unwrap_or("unlimited")
    }

    /// Render the record line written to the output sink.
    ///
    /// The terminator is always `\n`, never platform-dependent.
    pub fn to_record(&self) -> String {
        format!(
            "License for {} is {} issued by {} [{} - {}]\n",
            self.file_name,
            self.license,
            self.issued_by,
            self.issued_on,
            self.expires_display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_expiry() {
        let summary = LicenseSummary {
            file_name: "a.txt".to_string(),
            license: "MIT".to_string(),
            issued_by: "Acme".to_string(),
            issued_on: "2023-05-01".to_string(),
            expires_on: Some("2024-05-01".to_string()),
        };
        assert_eq!(
            summary.to_record(),
            "License for a.txt is MIT issued by Acme [2023-05-01 - 2024-05-01]\n"
        );
    }

    #[test]
    fn test_record_without_expiry_is_unlimited() {
        let summary = LicenseSummary {
            file_name: "a.txt".to_string(),
            license: "MIT".to_string(),
            issued_by: "Acme".to_string(),
            issued_on: "2023-05-01".to_string(),
            expires_on: None,
        };
        assert_eq!(
            summary.to_record(),
            "License for a.txt is MIT issued by Acme [2023-05-01 - unlimited]\n"
        );
    }

    #[test]
    fn test_field_display_matches_block_spelling() {
        assert_eq!(Field::License.to_string(), "License");
        assert_eq!(Field::IssuedBy.to_string(), "Issued by");
        assert_eq!(Field::IssuedOn.to_string(), "Issued on");
        assert_eq!(Field::ExpiresOn.to_string(), "Expires on");
    }
}
