// CsvEdit - tests/e2e_editing.rs
//
// End-to-end tests for the intake -> edit -> export pipeline.
//
// These tests exercise the real filesystem, real config loading and the
// editing session exactly as the GUI drives it: files are accepted and read
// from disk, edits go through the session, and the result is written to an
// actual export file and read back.

use csvedit::app::notify::{Level, NotificationLog, NullSink, Operation};
use csvedit::app::session::EditSession;
use csvedit::core::intake::IntakeConfig;
use csvedit::core::model::FieldMap;
use csvedit::core::{editor, parser, serializer};
use csvedit::platform::config::load_config;
use csvedit::util::error::{CsvEditError, ExportError, IntakeError};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn row(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Intake E2E
// =============================================================================

/// Loading the people fixture yields its headers and three records.
#[test]
fn e2e_loads_fixture_csv() {
    let mut session = EditSession::new(',', IntakeConfig::default());
    let mut log = NotificationLog::default();

    session
        .load_file(&fixture("people.csv"), "", &mut log)
        .unwrap();

    let doc = session.document().unwrap();
    assert_eq!(doc.headers(), ["name", "email", "city"]);
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.records()[1].get("name"), Some("Grace Hopper"));
    assert_eq!(session.source_name(), Some("people.csv"));

    let latest = log.latest().unwrap();
    assert_eq!(latest.operation, Operation::Load);
    assert_eq!(latest.level, Level::Success);
}

/// A non-CSV file is refused and the notification says so.
#[test]
fn e2e_rejects_non_csv_file() {
    let mut session = EditSession::new(',', IntakeConfig::default());
    let mut log = NotificationLog::default();

    let result = session.load_file(&fixture("notes.txt"), "text/plain", &mut log);
    assert!(
        matches!(result, Err(IntakeError::UnsupportedFile { .. })),
        "expected UnsupportedFile, got {result:?}"
    );
    assert!(session.document().is_none());
    assert!(log.latest().unwrap().is_failure());
}

/// A missing file surfaces as an I/O intake error.
#[test]
fn e2e_missing_file_returns_io_error() {
    let mut session = EditSession::new(',', IntakeConfig::default());
    let result = session.load_file(&fixture("does_not_exist.csv"), "", &mut NullSink);
    assert!(
        matches!(result, Err(IntakeError::Io { .. })),
        "expected Io, got {result:?}"
    );
}

/// A file ending in a newline gains one trailing record that exports empty.
#[test]
fn e2e_trailing_newline_passes_through() {
    let mut session = EditSession::new(',', IntakeConfig::default());
    session
        .load_file(&fixture("trailing_newline.csv"), "", &mut NullSink)
        .unwrap();

    let doc = session.document().unwrap();
    assert_eq!(doc.len(), 3);
    let last = doc.records().last().unwrap();
    assert!(doc.headers().iter().all(|h| last.display_value(h).is_empty()));
    assert_eq!(session.export_text().unwrap(), "id,qty\n1,10\n2,20\n,");
}

// =============================================================================
// Edit + export E2E
// =============================================================================

/// The full edit scenario, exported to a real file and read back.
#[test]
fn e2e_edit_and_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    fs::write(&input, "a,b\n1,2\n3,4").unwrap();

    let mut session = EditSession::new(',', IntakeConfig::default());
    let mut log = NotificationLog::default();
    session.load_file(&input, "", &mut log).unwrap();

    let ids: Vec<_> = session
        .document()
        .unwrap()
        .records()
        .iter()
        .map(|r| r.id())
        .collect();

    session.update_field(ids[0], "b", "9", &mut log).unwrap();
    session.delete_record(ids[1], &mut log);
    session
        .add_record(row(&[("a", "5"), ("b", "6")]), &mut log)
        .unwrap();

    let output = dir.path().join("updated_data.csv");
    let count = session.export_to_path(&output, &mut log).unwrap();
    assert_eq!(count, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "a,b\n1,9\n5,6");

    let operations: Vec<_> = log.iter().map(|n| n.operation).collect();
    assert_eq!(
        operations,
        vec![
            Operation::Load,
            Operation::Update,
            Operation::Delete,
            Operation::Add,
            Operation::Export,
        ]
    );
    assert!(log.iter().all(|n| n.level == Level::Success));
}

/// Exporting into a directory that does not exist reports an I/O error.
#[test]
fn e2e_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = EditSession::new(',', IntakeConfig::default());
    let mut log = NotificationLog::default();
    session.load_text("x.csv", "a\n1", &mut log);

    let dest = dir.path().join("missing").join("out.csv");
    let result = session.export_to_path(&dest, &mut log);
    assert!(
        matches!(result, Err(CsvEditError::Io { .. })),
        "expected Io, got {result:?}"
    );
    assert_eq!(log.latest().unwrap().operation, Operation::Export);
    assert!(log.latest().unwrap().is_failure());
}

/// Export with nothing loaded is refused.
#[test]
fn e2e_export_without_document() {
    let dir = tempfile::tempdir().unwrap();
    let session = EditSession::new(',', IntakeConfig::default());
    let result = session.export_to_path(&dir.path().join("out.csv"), &mut NullSink);
    assert!(matches!(
        result,
        Err(CsvEditError::Export(ExportError::NoDocument))
    ));
}

// =============================================================================
// Config E2E
// =============================================================================

/// A delimiter set in config.toml is used for both parsing and export.
#[test]
fn e2e_config_delimiter_round_trip() {
    let config_dir = tempfile::tempdir().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[csv]\ndelimiter = \"tab\"\n",
    )
    .unwrap();
    let (config, warnings) = load_config(config_dir.path());
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    let data_dir = tempfile::tempdir().unwrap();
    let input = data_dir.path().join("tabbed.csv");
    fs::write(&input, "x\ty\n1\t2").unwrap();

    let mut session = EditSession::new(config.delimiter, config.intake.clone());
    session.load_file(&input, "", &mut NullSink).unwrap();
    assert_eq!(session.document().unwrap().headers(), ["x", "y"]);
    assert_eq!(session.export_text().unwrap(), "x\ty\n1\t2");
}

/// Configured intake limits are honoured when reading from disk.
#[test]
fn e2e_config_max_file_size_enforced() {
    let config_dir = tempfile::tempdir().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[intake]\nmax_file_size_bytes = 1024\n",
    )
    .unwrap();
    let (config, _) = load_config(config_dir.path());

    let data_dir = tempfile::tempdir().unwrap();
    let input = data_dir.path().join("big.csv");
    fs::write(&input, "a\n".repeat(1000)).unwrap();

    let mut session = EditSession::new(config.delimiter, config.intake);
    let result = session.load_file(&input, "", &mut NullSink);
    assert!(
        matches!(result, Err(IntakeError::FileTooLarge { max_size: 1024, .. })),
        "expected FileTooLarge, got {result:?}"
    );
}

// =============================================================================
// Document model properties
// =============================================================================

/// Round trip holds for a range of well-formed inputs.
#[test]
fn e2e_round_trip_property() {
    let inputs = [
        "a",
        "a,b,c",
        "a,b\n1,2",
        "h1,h2,h3\nx,,z\n,,\n1,2,3",
        "dup,dup\nv,v",
        "col\n\u{00e9}t\u{00e9}\n\u{65e5}\u{672c}",
    ];
    for text in inputs {
        let doc = parser::parse(text, ',');
        assert_eq!(serializer::serialize(&doc), text, "round trip of {text:?}");
    }
}

/// Every edit keeps the header order and never reuses an identity.
#[test]
fn e2e_edits_preserve_headers_and_identity_uniqueness() {
    let original = parser::parse("c,b,a\n1,2,3\n4,5,6", ',');
    let mut doc = original.clone();
    let mut seen: Vec<_> = doc.records().iter().map(|r| r.id()).collect();

    for i in 0..5 {
        let value = i.to_string();
        let (next, id) = editor::add_record(&doc, row(&[("a", value.as_str())]));
        assert!(!seen.contains(&id), "identity {id} reused");
        seen.push(id);
        doc = editor::delete_record(&next, doc.records()[0].id());
    }

    assert_eq!(doc.headers(), original.headers());
    assert!(serializer::serialize(&doc).starts_with("c,b,a\n"));
}
