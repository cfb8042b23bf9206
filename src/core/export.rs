// CsvEdit - core/export.rs
//
// Writes the serialised document ("Download CSV").
// Core layer: writes to any Write trait object; the caller opens the file.

use crate::core::model::Document;
use crate::core::serializer::serialize;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Write `doc` as delimited text to `writer`.
///
/// Returns the number of records written (the header line is not counted).
/// `export_path` is only used to give I/O errors their context.
pub fn export_text<W: Write>(
    doc: &Document,
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let text = serialize(doc);

    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| ExportError::Io {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(
        path = %export_path.display(),
        records = doc.len(),
        bytes = text.len(),
        "Document exported"
    );

    Ok(doc.len())
}
