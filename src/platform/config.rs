// CsvEdit - platform/config.rs
//
// Platform-specific configuration, directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::intake::IntakeConfig;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for CsvEdit configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/csvedit/ or %APPDATA%\CsvEdit\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[csv]` section.
    pub csv: CsvSection,
    /// `[intake]` section.
    pub intake: IntakeSection,
    /// `[export]` section.
    pub export: ExportSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[csv]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CsvSection {
    /// Field delimiter: a single character, `"\t"` or `"tab"`.
    pub delimiter: Option<String>,
}

/// `[intake]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct IntakeSection {
    /// Accepted filename globs.
    pub accepted_patterns: Option<Vec<String>>,
    /// Accepted media types.
    pub accepted_media_types: Option<Vec<String>>,
    /// Largest file that will be loaded, in bytes.
    pub max_file_size_bytes: Option<u64>,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// File name offered by the save dialog.
    pub file_name: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
    /// Toast lifetime in seconds.
    pub toast_seconds: Option<i64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- CSV --
    /// Delimiter used for parsing and export.
    pub delimiter: char,

    // -- Intake --
    /// File acceptance rules.
    pub intake: IntakeConfig,

    // -- Export --
    /// Suggested export file name.
    pub export_file_name: String,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    /// Toast lifetime in seconds.
    pub toast_secs: i64,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            delimiter: constants::DEFAULT_DELIMITER,
            intake: IntakeConfig::default(),
            export_file_name: constants::DEFAULT_EXPORT_FILE_NAME.to_string(),
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            toast_secs: constants::DEFAULT_TOAST_SECS,
            log_level: None,
            log_file: None,
        }
    }
}

/// Interpret a user-supplied delimiter.
///
/// Accepts exactly one character, or the spellings `\t` and `tab` for a tab.
/// Newline and carriage return are refused because they separate lines.
pub fn parse_delimiter(raw: &str) -> Option<char> {
    if raw == "\\t" || raw.eq_ignore_ascii_case("tab") {
        return Some('\t');
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '\n' && c != '\r' => Some(c),
        _ => None,
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source: e,
            };
            tracing::warn!(error = %err, "Could not read config file");
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source: e,
            };
            tracing::warn!(error = %err, "Failed to parse config file");
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Validate each field against named constants, accumulating all warnings.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();
    let mut out_of_range = |field: &str, value: String, expected: String| {
        warnings.push(format!(
            "{}. Using default.",
            ConfigError::ValueOutOfRange {
                field: field.to_string(),
                value,
                expected,
            }
        ));
    };

    // -- CSV: delimiter --
    if let Some(ref raw_delim) = raw.csv.delimiter {
        match parse_delimiter(raw_delim) {
            Some(c) => config.delimiter = c,
            None => out_of_range(
                "csv.delimiter",
                raw_delim.clone(),
                "a single character other than newline, or \"tab\"".to_string(),
            ),
        }
    }

    // -- Intake --
    if let Some(patterns) = raw.intake.accepted_patterns {
        if patterns.is_empty() {
            out_of_range(
                "intake.accepted_patterns",
                "[]".to_string(),
                "at least one pattern".to_string(),
            );
        } else {
            config.intake.accepted_patterns = patterns;
        }
    }
    if let Some(types) = raw.intake.accepted_media_types {
        config.intake.accepted_media_types = types;
    }
    if let Some(size) = raw.intake.max_file_size_bytes {
        if (constants::MIN_MAX_FILE_SIZE..=constants::ABSOLUTE_MAX_FILE_SIZE).contains(&size) {
            config.intake.max_file_size = size;
        } else {
            out_of_range(
                "intake.max_file_size_bytes",
                size.to_string(),
                format!(
                    "{}-{}",
                    constants::MIN_MAX_FILE_SIZE,
                    constants::ABSOLUTE_MAX_FILE_SIZE
                ),
            );
        }
    }

    // -- Export: file_name --
    if let Some(name) = raw.export.file_name {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
            out_of_range(
                "export.file_name",
                name.clone(),
                "a plain file name without directories".to_string(),
            );
        } else {
            config.export_file_name = trimmed.to_string();
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => out_of_range(
                "ui.theme",
                other.to_string(),
                "\"dark\" or \"light\"".to_string(),
            ),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            out_of_range(
                "ui.font_size",
                size.to_string(),
                format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            );
        }
    }

    // -- UI: toast_seconds --
    if let Some(secs) = raw.ui.toast_seconds {
        if (constants::MIN_TOAST_SECS..=constants::MAX_TOAST_SECS).contains(&secs) {
            config.toast_secs = secs;
        } else {
            out_of_range(
                "ui.toast_seconds",
                secs.to_string(),
                format!("{}-{}", constants::MIN_TOAST_SECS, constants::MAX_TOAST_SECS),
            );
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            out_of_range(
                "logging.level",
                level.clone(),
                constants::VALID_LOG_LEVELS.join(", "),
            );
        }
    }

    // -- Logging: file --
    if let Some(file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file);
        }
    }

    config
}
