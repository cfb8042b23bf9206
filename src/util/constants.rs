// CsvEdit - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CsvEdit";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CsvEdit";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// CSV format
// =============================================================================

/// Field separator used for parsing and serialisation unless overridden.
pub const DEFAULT_DELIMITER: char = ',';

/// Line separator for both parsing and serialisation.
pub const LINE_SEPARATOR: char = '\n';

/// Byte-order mark some editors prepend to UTF-8 CSV files.
pub const UTF8_BOM: char = '\u{feff}';

// =============================================================================
// File intake
// =============================================================================

/// Filename globs accepted by drag-and-drop and the open dialog.
pub const DEFAULT_ACCEPTED_PATTERNS: &[&str] = &["*.csv"];

/// Media types accepted regardless of filename.
pub const DEFAULT_ACCEPTED_MEDIA_TYPES: &[&str] = &["text/csv"];

/// Extensions offered by the native open dialog filter.
pub const OPEN_DIALOG_EXTENSIONS: &[&str] = &["csv"];

/// Input files larger than this are refused. The whole file is parsed in
/// memory before any row is shown, so this bounds a single load.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024; // 64 MiB

/// Smallest user-configurable input size limit.
pub const MIN_MAX_FILE_SIZE: u64 = 1024; // 1 KiB

/// Hard upper bound on the input size limit.
pub const ABSOLUTE_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024; // 1 GiB

// =============================================================================
// Export
// =============================================================================

/// Default file name offered by the "Download CSV" save dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "updated_data.csv";

// =============================================================================
// Notifications
// =============================================================================

/// Maximum number of notifications retained by the in-memory log.
pub const MAX_NOTIFICATIONS: usize = 200;

/// How long a toast stays on screen (seconds).
pub const DEFAULT_TOAST_SECS: i64 = 4;

/// Minimum user-configurable toast lifetime (seconds).
pub const MIN_TOAST_SECS: i64 = 1;

/// Maximum user-configurable toast lifetime (seconds).
pub const MAX_TOAST_SECS: i64 = 30;

/// Maximum number of toasts stacked on screen at once.
pub const MAX_VISIBLE_TOASTS: usize = 4;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
