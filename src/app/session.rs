// CsvEdit - app/session.rs
//
// Editing session: owns the current document and routes every intake, edit
// and export request through the pure core functions, replacing the held
// document with each result and reporting outcomes to a notification sink.
//
// Edits are applied one at a time on the caller's thread, in the order they
// arrive. The session is the only owner of the document; the UI sees it
// through `document()` as a read-only view.

use crate::app::notify::{Notification, NotificationSink, Operation};
use crate::core::intake::{self, IntakeConfig};
use crate::core::model::{Document, FieldMap, RecordId};
use crate::core::{editor, export, parser, serializer};
use crate::platform::fs;
use crate::util::error::{CsvEditError, EditError, ExportError, IntakeError, Result};
use std::path::Path;

/// State of one editing session.
#[derive(Debug)]
pub struct EditSession {
    document: Option<Document>,
    /// Display name of the loaded file (for the title and messages).
    source_name: Option<String>,
    delimiter: char,
    intake: IntakeConfig,
}

impl EditSession {
    pub fn new(delimiter: char, intake: IntakeConfig) -> Self {
        Self {
            document: None,
            source_name: None,
            delimiter,
            intake,
        }
    }

    /// The loaded document, if any.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn intake_config(&self) -> &IntakeConfig {
        &self.intake
    }

    /// True when a document with at least one record is loaded.
    pub fn has_rows(&self) -> bool {
        self.document.as_ref().is_some_and(|d| !d.is_empty())
    }

    // -------------------------------------------------------------------------
    // Intake
    // -------------------------------------------------------------------------

    /// Parse `text` and make it the current document, replacing any other.
    pub fn load_text(&mut self, name: &str, text: &str, sink: &mut dyn NotificationSink) {
        let doc = parser::parse(text, self.delimiter);
        let rows = doc.len();
        let columns = doc.headers().len();
        sink.notify(Notification::success(
            Operation::Load,
            format!(
                "Loaded {name}: {rows} row{}, {columns} column{}",
                if rows == 1 { "" } else { "s" },
                if columns == 1 { "" } else { "s" },
            ),
        ));
        self.document = Some(doc);
        self.source_name = Some(name.to_string());
    }

    /// Accept and load a file from disk.
    ///
    /// `media_type` may be empty. A rejected or unreadable file leaves the
    /// current document untouched.
    pub fn load_file(
        &mut self,
        path: &Path,
        media_type: &str,
        sink: &mut dyn NotificationSink,
    ) -> std::result::Result<(), IntakeError> {
        let name = fs::file_name_of(path);
        let text = intake::check_acceptable(&self.intake, &name, media_type)
            .and_then(|()| fs::read_text_file(path, self.intake.max_file_size));

        match text {
            Ok(text) => {
                self.load_text(&name, &text, sink);
                Ok(())
            }
            Err(e) => {
                sink.notify(Notification::failure(Operation::Load, e.to_string()));
                Err(e)
            }
        }
    }

    /// Accept and load file contents that arrived without a path (e.g. a
    /// drop from a browser or sandboxed source).
    pub fn load_bytes(
        &mut self,
        name: &str,
        media_type: &str,
        bytes: &[u8],
        sink: &mut dyn NotificationSink,
    ) -> std::result::Result<(), IntakeError> {
        let checked = intake::check_acceptable(&self.intake, name, media_type).and_then(|()| {
            let size = bytes.len() as u64;
            if size > self.intake.max_file_size {
                Err(IntakeError::FileTooLarge {
                    path: name.into(),
                    size,
                    max_size: self.intake.max_file_size,
                })
            } else {
                Ok(())
            }
        });

        if let Err(e) = checked {
            sink.notify(Notification::failure(Operation::Load, e.to_string()));
            return Err(e);
        }

        let text = intake::decode_text(bytes);
        self.load_text(name, &text, sink);
        Ok(())
    }

    /// Drop the current document.
    pub fn close(&mut self) {
        self.document = None;
        self.source_name = None;
    }

    // -------------------------------------------------------------------------
    // Edits
    // -------------------------------------------------------------------------

    /// Cell edit event from the grid: set `column` of record `id` to `value`.
    pub fn update_field(
        &mut self,
        id: RecordId,
        column: &str,
        value: &str,
        sink: &mut dyn NotificationSink,
    ) -> std::result::Result<(), EditError> {
        let result = match self.document.as_ref() {
            Some(doc) => editor::set_field(doc, id, column, value),
            None => Err(EditError::NoDocument),
        };
        tracing::trace!(record = %id, column, value, "Cell edit");

        match result {
            Ok(doc) => {
                self.document = Some(doc);
                sink.notify(Notification::success(
                    Operation::Update,
                    "Row updated successfully",
                ));
                Ok(())
            }
            Err(e) => {
                sink.notify(Notification::failure(Operation::Update, e.to_string()));
                Err(e)
            }
        }
    }

    /// Delete event from the grid. Deleting an unknown record succeeds.
    pub fn delete_record(&mut self, id: RecordId, sink: &mut dyn NotificationSink) {
        if let Some(doc) = self.document.as_ref() {
            self.document = Some(editor::delete_record(doc, id));
        }
        sink.notify(Notification::success(
            Operation::Delete,
            "Row deleted successfully",
        ));
    }

    /// Add-row event: append a record with the given field values.
    pub fn add_record(
        &mut self,
        fields: FieldMap,
        sink: &mut dyn NotificationSink,
    ) -> std::result::Result<RecordId, EditError> {
        let Some(doc) = self.document.as_ref() else {
            let e = EditError::NoDocument;
            sink.notify(Notification::failure(Operation::Add, e.to_string()));
            return Err(e);
        };

        let (next, id) = editor::add_record(doc, fields);
        self.document = Some(next);
        sink.notify(Notification::success(Operation::Add, "Row added successfully"));
        Ok(id)
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// Serialised text of the current document.
    pub fn export_text(&self) -> std::result::Result<String, ExportError> {
        self.document
            .as_ref()
            .map(serializer::serialize)
            .ok_or(ExportError::NoDocument)
    }

    /// Write the current document to `path`, returning the record count.
    pub fn export_to_path(&self, path: &Path, sink: &mut dyn NotificationSink) -> Result<usize> {
        let result = self.write_export(path);
        match &result {
            Ok(count) => sink.notify(Notification::success(
                Operation::Export,
                format!(
                    "Exported {count} row{} to {}",
                    if *count == 1 { "" } else { "s" },
                    path.display()
                ),
            )),
            Err(e) => sink.notify(Notification::failure(Operation::Export, e.to_string())),
        }
        result
    }

    fn write_export(&self, path: &Path) -> Result<usize> {
        let doc = self.document.as_ref().ok_or(ExportError::NoDocument)?;
        let file = std::fs::File::create(path).map_err(|e| CsvEditError::Io {
            path: path.to_path_buf(),
            operation: "create export file",
            source: e,
        })?;
        let count = export::export_text(doc, std::io::BufWriter::new(file), path)?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notify::{Level, NotificationLog};

    fn session_with(text: &str) -> (EditSession, NotificationLog) {
        let mut session = EditSession::new(',', IntakeConfig::default());
        let mut log = NotificationLog::default();
        session.load_text("test.csv", text, &mut log);
        (session, log)
    }

    fn first_id(session: &EditSession) -> RecordId {
        session.document().unwrap().records()[0].id()
    }

    #[test]
    fn test_load_text_reports_counts() {
        let (session, log) = session_with("a,b\n1,2\n3,4");
        assert_eq!(session.source_name(), Some("test.csv"));
        assert!(session.has_rows());
        let latest = log.latest().unwrap();
        assert_eq!(latest.operation, Operation::Load);
        assert_eq!(latest.message, "Loaded test.csv: 2 rows, 2 columns");
    }

    #[test]
    fn test_load_text_singular_counts() {
        let (_, log) = session_with("a\n1");
        assert_eq!(log.latest().unwrap().message, "Loaded test.csv: 1 row, 1 column");
    }

    #[test]
    fn test_load_replaces_previous_document() {
        let (mut session, mut log) = session_with("a,b\n1,2");
        session.load_text("other.csv", "x\n9", &mut log);
        assert_eq!(session.document().unwrap().headers(), ["x"]);
        assert_eq!(session.source_name(), Some("other.csv"));
    }

    #[test]
    fn test_update_field_notifies_success() {
        let (mut session, mut log) = session_with("a,b\n1,2");
        let id = first_id(&session);
        session.update_field(id, "b", "9", &mut log).unwrap();
        assert_eq!(session.export_text().unwrap(), "a,b\n1,9");
        assert_eq!(log.latest().unwrap().message, "Row updated successfully");
    }

    #[test]
    fn test_update_missing_record_notifies_failure() {
        let (mut session, mut log) = session_with("a,b\n1,2");
        let id = first_id(&session);
        session.delete_record(id, &mut log);
        let err = session.update_field(id, "a", "x", &mut log).unwrap_err();
        assert!(matches!(err, EditError::RecordNotFound { .. }));
        let latest = log.latest().unwrap();
        assert_eq!(latest.level, Level::Failure);
        assert_eq!(latest.operation, Operation::Update);
    }

    #[test]
    fn test_edits_without_document() {
        let mut session = EditSession::new(',', IntakeConfig::default());
        let mut log = NotificationLog::default();
        assert_eq!(
            session.add_record(FieldMap::new(), &mut log),
            Err(EditError::NoDocument)
        );
        assert!(matches!(
            session.export_text(),
            Err(ExportError::NoDocument)
        ));
        // Deleting with nothing loaded is still a satisfied request.
        session.delete_record(RecordId(1), &mut log);
        assert_eq!(log.latest().unwrap().level, Level::Success);
    }

    #[test]
    fn test_add_and_delete() {
        let (mut session, mut log) = session_with("a,b\n1,2");
        let mut row = FieldMap::new();
        row.insert("a".to_string(), "5".to_string());
        let id = session.add_record(row, &mut log).unwrap();
        assert_eq!(session.export_text().unwrap(), "a,b\n1,2\n5,");
        assert_eq!(log.latest().unwrap().message, "Row added successfully");

        session.delete_record(id, &mut log);
        assert_eq!(session.export_text().unwrap(), "a,b\n1,2");
        assert_eq!(log.latest().unwrap().message, "Row deleted successfully");
    }

    #[test]
    fn test_load_bytes_rejects_non_csv() {
        let (mut session, mut log) = session_with("a\n1");
        let err = session
            .load_bytes("photo.png", "image/png", b"\x89PNG", &mut log)
            .unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedFile { .. }));
        // Previous document is kept.
        assert_eq!(session.source_name(), Some("test.csv"));
        assert!(log.latest().unwrap().is_failure());
    }

    #[test]
    fn test_load_bytes_accepts_media_type() {
        let mut session = EditSession::new(',', IntakeConfig::default());
        let mut log = NotificationLog::default();
        session
            .load_bytes("clipboard", "text/csv", b"a,b\n1,2", &mut log)
            .unwrap();
        assert_eq!(session.document().unwrap().len(), 1);
    }

    #[test]
    fn test_load_bytes_enforces_size_limit() {
        let intake = IntakeConfig {
            max_file_size: 4,
            ..Default::default()
        };
        let mut session = EditSession::new(',', intake);
        let mut log = NotificationLog::default();
        let err = session
            .load_bytes("big.csv", "", b"a,b\n1,2", &mut log)
            .unwrap_err();
        assert!(matches!(err, IntakeError::FileTooLarge { size: 7, .. }));
        assert!(session.document().is_none());
    }

    #[test]
    fn test_session_delimiter_used_for_parse_and_export() {
        let mut session = EditSession::new(';', IntakeConfig::default());
        let mut log = NotificationLog::default();
        session.load_text("semi.csv", "a;b\n1;2", &mut log);
        assert_eq!(session.document().unwrap().headers(), ["a", "b"]);
        assert_eq!(session.export_text().unwrap(), "a;b\n1;2");
    }

    #[test]
    fn test_close() {
        let (mut session, _) = session_with("a\n1");
        session.close();
        assert!(session.document().is_none());
        assert!(!session.has_rows());
    }
}
