// CsvEdit - core/model.rs
//
// Tabular document model. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// Fields are crate-private: collaborators read through the accessor views
// and change documents only through `core::editor`.

use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Record identity
// =============================================================================

/// Synthetic identity of a record within one document.
///
/// Assigned from the document's monotonic counter when the record is created
/// and never exported. Deleting a record never frees its identity for reuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub(crate) u64);

impl RecordId {
    /// Raw counter value, used in error reports and log fields.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Record
// =============================================================================

/// Column-name to raw-text mapping, as supplied by the add-row form and
/// produced by cell edits.
pub type FieldMap = HashMap<String, String>;

/// One row of the document.
///
/// A column that is missing from `fields` is *absent*, which is distinct from
/// holding the empty string. Both render and serialise as empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub(crate) id: RecordId,
    pub(crate) fields: FieldMap,
}

impl Record {
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Value of `column`, or `None` when the column is absent.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Value of `column` for display and export: absent reads as "".
    pub fn display_value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// All present fields. Iteration order is unspecified; use the
    /// document's header set for ordered access.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

// =============================================================================
// Document
// =============================================================================

/// A loaded CSV: delimiter, ordered header set, and ordered records.
///
/// Values of this type are immutable from the outside. Every edit produces a
/// new `Document` (see `core::editor`); the editing session replaces its
/// current document with the returned one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) delimiter: char,
    pub(crate) headers: Vec<String>,
    pub(crate) records: Vec<Record>,
    /// Next identity to hand out. Only ever increases.
    pub(crate) next_id: u64,
}

impl Document {
    /// An empty document (no headers, no records) using `delimiter`.
    pub fn empty(delimiter: char) -> Self {
        Self {
            delimiter,
            headers: Vec::new(),
            records: Vec::new(),
            next_id: 1,
        }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Column names in display and export order, verbatim from the header
    /// line (duplicates and empty names included).
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by identity.
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Position of the record with `id` in the record sequence.
    pub(crate) fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Number of records (the header line is not counted).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Take the next identity from the counter.
    pub(crate) fn allocate_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Drop every key that is not part of the header set.
    pub(crate) fn normalize(&self, mut fields: FieldMap) -> FieldMap {
        fields.retain(|column, _| self.has_column(column));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_headers(headers: &[&str]) -> Document {
        let mut doc = Document::empty(',');
        doc.headers = headers.iter().map(|h| h.to_string()).collect();
        doc
    }

    #[test]
    fn test_allocate_id_is_monotonic() {
        let mut doc = Document::empty(',');
        let a = doc.allocate_id();
        let b = doc.allocate_id();
        assert!(b > a);
        assert_eq!(a.get() + 1, b.get());
    }

    #[test]
    fn test_normalize_drops_unknown_columns() {
        let doc = doc_with_headers(&["a", "b"]);
        let mut fields = FieldMap::new();
        fields.insert("a".to_string(), "1".to_string());
        fields.insert("zzz".to_string(), "x".to_string());
        let normalized = doc.normalize(fields);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_absent_and_empty_are_distinct() {
        let mut fields = FieldMap::new();
        fields.insert("a".to_string(), String::new());
        let record = Record {
            id: RecordId(1),
            fields,
        };
        assert_eq!(record.get("a"), Some(""));
        assert_eq!(record.get("b"), None);
        assert_eq!(record.display_value("b"), "");
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId(42).to_string(), "#42");
    }
}
