/// Line that opens and closes a license block.
pub const BLOCK_MARKER: &str = "---";

/// Decide whether `content` is a license file.
///
/// Purely structural: the file qualifies when at least two lines trim to
/// the marker token. Nothing between the markers is required here; a file
/// with an empty block still classifies, and only fails later on the
/// required-field check.
pub fn is_license_file(content: &str) -> bool {
    content
        .lines()
        .filter(|line| line.trim() == BLOCK_MARKER)
        .take(2)
        .count()
        == 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_markers_classify() {
        assert!(is_license_file("---\nLicense: MIT\n---\n"));
    }

    #[test]
    fn test_one_marker_rejected() {
        assert!(!is_license_file("---\nLicense: MIT\n"));
    }

    #[test]
    fn test_no_markers_rejected() {
        assert!(!is_license_file("License: MIT\n"));
        assert!(!is_license_file(""));
    }

    #[test]
    fn test_markers_are_trimmed() {
        assert!(is_license_file("  ---  \nLicense: MIT\n\t---\n"));
    }

    #[test]
    fn test_empty_block_still_classifies() {
        assert!(is_license_file("---\n---\n"));
    }

    #[test]
    fn test_longer_dashes_are_not_markers() {
        assert!(!is_license_file("----\nLicense: MIT\n----\n"));
    }

    #[test]
    fn test_extra_markers_still_classify() {
        assert!(is_license_file("---\n---\n---\n"));
    }
}
