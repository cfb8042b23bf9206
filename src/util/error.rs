// CsvEdit - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all CsvEdit operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CsvEditError {
    /// A file was refused or could not be read at intake.
    Intake(IntakeError),

    /// A record edit could not be applied.
    Edit(EditError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for CsvEditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intake(e) => write!(f, "Intake error: {e}"),
            Self::Edit(e) => write!(f, "Edit error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CsvEditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Intake(e) => Some(e),
            Self::Edit(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Intake errors
// ---------------------------------------------------------------------------

/// Errors raised while accepting and reading an input file.
#[derive(Debug)]
pub enum IntakeError {
    /// Neither the file name nor the media type is on the accepted list.
    UnsupportedFile { name: String, media_type: String },

    /// File exceeds the configured maximum input size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// I/O error while reading the file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFile { name, media_type } => {
                if media_type.is_empty() {
                    write!(f, "'{name}' is not a CSV file")
                } else {
                    write!(f, "'{name}' ({media_type}) is not a CSV file")
                }
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "'{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<IntakeError> for CsvEditError {
    fn from(e: IntakeError) -> Self {
        Self::Intake(e)
    }
}

// ---------------------------------------------------------------------------
// Edit errors
// ---------------------------------------------------------------------------

/// Errors related to record edits.
///
/// Deleting an unknown record is not an error: absence already satisfies the
/// request. Only replacing a record requires the target to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// No record with this identity exists in the document.
    RecordNotFound { id: u64 },

    /// An edit arrived before any CSV file was loaded.
    NoDocument,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordNotFound { id } => write!(f, "Record #{id} not found"),
            Self::NoDocument => write!(f, "No CSV file is loaded"),
        }
    }
}

impl std::error::Error for EditError {}

impl From<EditError> for CsvEditError {
    fn from(e: EditError) -> Self {
        Self::Edit(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// Export was requested before any document was loaded.
    NoDocument,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::NoDocument => write!(f, "Nothing to export: no CSV file is loaded"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NoDocument => None,
        }
    }
}

impl From<ExportError> for CsvEditError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for CsvEditError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for CsvEdit results.
pub type Result<T> = std::result::Result<T, CsvEditError>;
