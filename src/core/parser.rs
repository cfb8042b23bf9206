// CsvEdit - core/parser.rs
//
// Delimited text -> Document.
// Core layer: accepts text already read by the intake collaborator, never
// touches the filesystem.
//
// Parsing is deliberately lenient and simple:
//   - fields are split on the delimiter verbatim (no quoting, no trimming);
//   - short rows leave trailing columns absent, long rows lose extra fields;
//   - a trailing newline yields one extra, effectively empty record.
// A delimiter inside a value therefore shifts the remaining columns.

use crate::core::model::{Document, FieldMap, Record};
use crate::util::constants::LINE_SEPARATOR;

/// Parse `content` into a new document.
///
/// The first line is the header line; every following line becomes one
/// record. Empty input produces an empty document rather than an error.
pub fn parse(content: &str, delimiter: char) -> Document {
    let mut doc = Document::empty(delimiter);

    if content.is_empty() {
        tracing::debug!("Parsed empty input");
        return doc;
    }

    let mut lines = content.split(LINE_SEPARATOR);
    if let Some(header_line) = lines.next() {
        doc.headers = header_line.split(delimiter).map(str::to_owned).collect();
    }

    for line in lines {
        let fields = pair_fields(&doc.headers, line, delimiter);
        let id = doc.allocate_id();
        doc.records.push(Record { id, fields });
    }

    tracing::debug!(
        headers = doc.headers.len(),
        records = doc.records.len(),
        delimiter = ?delimiter,
        "Parsed delimited text"
    );

    doc
}

/// Pair each value of `line` with the header at the same position.
///
/// When a header name repeats, the right-most value wins.
fn pair_fields(headers: &[String], line: &str, delimiter: char) -> FieldMap {
    let mut fields = FieldMap::with_capacity(headers.len());
    for (header, value) in headers.iter().zip(line.split(delimiter)) {
        fields.insert(header.clone(), value.to_owned());
    }
    fields
}
