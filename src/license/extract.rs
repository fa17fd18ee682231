use std::collections::HashMap;

use super::classifier::BLOCK_MARKER;

/// Field mapping populated from a license block, keys as written.
///
/// Unrecognized keys are stored but never read; duplicate keys keep the
/// last occurrence.
pub type LicenseFields = HashMap<String, String>;

/// Collect `key: value` pairs from the first marker-delimited block.
///
/// The first marker line opens the block, the second closes it and stops
/// collection: anything after the second marker is ignored, even a third
/// marker. Inside the block, lines are split on the first colon with key
/// and value trimmed; lines without a colon are skipped.
pub fn extract(content: &str) -> LicenseFields {
    let mut fields = LicenseFields::new();
    let mut in_block = false;

    for line in content.lines() {
        let line = line.trim();
        if line == BLOCK_MARKER {
            if in_block {
                break;
            }
            in_block = true;
        } else if in_block {
            if let Some((key, value)) = line.split_once(':') {
                fields.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }

    fields
}
