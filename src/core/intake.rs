// CsvEdit - core/intake.rs
//
// Acceptance rules for incoming files and decoding of their bytes.
// A file is accepted when its name matches one of the configured globs or
// its media type is on the accepted list; nothing else about the file
// (size aside, enforced by platform::fs) matters to the document model.

use crate::util::constants;
use crate::util::error::IntakeError;
use glob::{MatchOptions, Pattern};

/// Which files the drop zone and open dialog accept.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Filename glob patterns, matched case-insensitively (e.g. "*.csv").
    pub accepted_patterns: Vec<String>,
    /// Media types, compared without parameters and case-insensitively.
    pub accepted_media_types: Vec<String>,
    /// Maximum input size in bytes.
    pub max_file_size: u64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            accepted_patterns: constants::DEFAULT_ACCEPTED_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            accepted_media_types: constants::DEFAULT_ACCEPTED_MEDIA_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_file_size: constants::DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Decide whether a file may be loaded.
///
/// `file_name` is the bare name (no directory needed); `media_type` may be
/// empty when the drop source does not report one.
pub fn check_acceptable(
    config: &IntakeConfig,
    file_name: &str,
    media_type: &str,
) -> Result<(), IntakeError> {
    if name_matches(&config.accepted_patterns, file_name)
        || media_type_matches(&config.accepted_media_types, media_type)
    {
        return Ok(());
    }

    tracing::debug!(file_name, media_type, "File rejected at intake");
    Err(IntakeError::UnsupportedFile {
        name: file_name.to_string(),
        media_type: media_type.to_string(),
    })
}

fn name_matches(patterns: &[String], file_name: &str) -> bool {
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };
    patterns.iter().any(|raw| match Pattern::new(raw) {
        Ok(pattern) => pattern.matches_with(file_name, options),
        Err(e) => {
            tracing::warn!(pattern = %raw, error = %e, "Invalid intake pattern; skipping");
            false
        }
    })
}

fn media_type_matches(accepted: &[String], media_type: &str) -> bool {
    // "text/csv; charset=utf-8" -> "text/csv"
    let essence = media_type.split(';').next().unwrap_or("").trim();
    if essence.is_empty() {
        return false;
    }
    accepted.iter().any(|m| m.eq_ignore_ascii_case(essence))
}

/// Decode file bytes as UTF-8, replacing invalid sequences and stripping a
/// leading byte-order mark.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix(constants::UTF8_BOM) {
        Some(rest) => rest.to_owned(),
        None => text.into_owned(),
    }
}
