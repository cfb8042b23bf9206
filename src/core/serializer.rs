// CsvEdit - core/serializer.rs
//
// Document -> delimited text. The mirror image of `core::parser`: no quoting
// and no escaping, so only values free of the delimiter and of newlines
// survive a round trip unchanged.

use crate::core::model::Document;
use crate::util::constants::LINE_SEPARATOR;

/// Serialise `doc` using its own delimiter.
///
/// Output is the header line followed by one line per record, joined by
/// `'\n'` with no trailing newline. Absent columns are written as "".
pub fn serialize(doc: &Document) -> String {
    // An empty document has no header line at all.
    if doc.headers().is_empty() && doc.is_empty() {
        return String::new();
    }

    let delimiter = doc.delimiter().to_string();
    let separator = LINE_SEPARATOR.to_string();

    let mut lines = Vec::with_capacity(doc.len() + 1);
    lines.push(doc.headers().join(&delimiter));

    for record in doc.records() {
        let row: Vec<&str> = doc
            .headers()
            .iter()
            .map(|h| record.display_value(h))
            .collect();
        lines.push(row.join(&delimiter));
    }

    lines.join(&separator)
}
