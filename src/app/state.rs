// CsvEdit - app/state.rs
//
// Application state management. Holds the editing session, the notification
// log, the add-row draft and UI flags.
// Owned by the eframe::App implementation.

use crate::app::notify::NotificationLog;
use crate::app::session::EditSession;
use crate::core::model::{FieldMap, RecordId};
use crate::platform::config::AppConfig;
use std::path::PathBuf;

/// A cell change collected while the grid is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub id: RecordId,
    pub column: String,
    pub value: String,
}

/// User requests gathered during one frame and applied after rendering, so
/// the document is never borrowed by the grid while it is being replaced.
#[derive(Debug, Default)]
pub struct PendingActions {
    pub edits: Vec<CellEdit>,
    pub deletes: Vec<RecordId>,
    pub add_row: bool,
    pub open_file: Option<PathBuf>,
    pub save_requested: bool,
}

impl PendingActions {
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
            && self.deletes.is_empty()
            && !self.add_row
            && self.open_file.is_none()
            && !self.save_requested
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The document owner.
    pub session: EditSession,

    /// Outcomes of user operations (toasts + status bar).
    pub notifications: NotificationLog,

    /// Values typed into the add-row form. Only columns the user has typed
    /// into are present, so untouched columns stay absent in the new record.
    pub new_row: FieldMap,

    /// Requests collected from panels during the current frame.
    pub pending: PendingActions,

    /// Validated configuration.
    pub config: AppConfig,

    /// Non-fatal startup warnings (config validation etc.).
    pub warnings: Vec<String>,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state from validated configuration.
    pub fn new(config: AppConfig, warnings: Vec<String>, debug_mode: bool) -> Self {
        Self {
            session: EditSession::new(config.delimiter, config.intake.clone()),
            notifications: NotificationLog::default(),
            new_row: FieldMap::new(),
            pending: PendingActions::default(),
            dark_mode: config.dark_mode,
            config,
            warnings,
            show_about: false,
            debug_mode,
        }
    }

    /// Status bar text: the most recent notification, or a hint.
    pub fn status_message(&self) -> String {
        match self.notifications.latest() {
            Some(n) => n.message.clone(),
            None if self.session.document().is_none() => {
                "Ready. Drop a CSV file to begin.".to_string()
            }
            None => "Ready.".to_string(),
        }
    }

    /// Status bar counts for the loaded document, e.g. "1 row \u{00b7} 3 columns".
    pub fn document_summary(&self) -> Option<String> {
        let doc = self.session.document()?;
        let rows = doc.len();
        let columns = doc.headers().len();
        Some(format!(
            "{rows} row{} \u{00b7} {columns} column{}",
            if rows == 1 { "" } else { "s" },
            if columns == 1 { "" } else { "s" },
        ))
    }

    /// Apply every request collected during the frame, in a fixed order:
    /// cell edits, deletions, row addition, file open, export.
    ///
    /// The export destination is chosen by the caller (a native dialog in
    /// the GUI), so a save request is handed back rather than executed here.
    pub fn apply_pending(&mut self) -> bool {
        let pending = std::mem::take(&mut self.pending);

        for edit in pending.edits {
            // Failures are reported through the notification log.
            let _ = self.session.update_field(
                edit.id,
                &edit.column,
                &edit.value,
                &mut self.notifications,
            );
        }

        for id in pending.deletes {
            self.session.delete_record(id, &mut self.notifications);
        }

        if pending.add_row {
            let fields = std::mem::take(&mut self.new_row);
            if let Err(e) = self.session.add_record(fields.clone(), &mut self.notifications) {
                // Keep what the user typed if the row could not be added.
                tracing::debug!(error = %e, "Add row failed; draft kept");
                self.new_row = fields;
            }
        }

        if let Some(path) = pending.open_file {
            if self
                .session
                .load_file(&path, "", &mut self.notifications)
                .is_ok()
            {
                self.new_row.clear();
            }
        }

        pending.save_requested
    }
}
