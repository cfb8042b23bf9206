// CsvEdit - core/editor.rs
//
// Record-level edits. Every operation borrows the current document and
// returns a new one; the input is never mutated, so each edit is a discrete
// unit that can be retried against the same base.
//
// Edits are expected to be applied serially by a single session. If two
// edits were computed from the same base document, whichever result is
// stored last wins.

use crate::core::model::{Document, FieldMap, Record, RecordId};
use crate::util::error::EditError;

/// Replace the whole field mapping of record `id` with `fields`.
///
/// Columns missing from `fields` become absent for that record. Keys outside
/// the header set are dropped. The record keeps its identity and position.
pub fn replace_record(
    doc: &Document,
    id: RecordId,
    fields: FieldMap,
) -> Result<Document, EditError> {
    let pos = doc
        .position(id)
        .ok_or(EditError::RecordNotFound { id: id.get() })?;

    let mut next = doc.clone();
    next.records[pos] = Record {
        id,
        fields: doc.normalize(fields),
    };
    Ok(next)
}

/// Set one cell of record `id`, keeping every other field of that record.
///
/// This is the merge the grid performs for a cell edit: the current fields
/// are copied, `column` is overwritten, and the result replaces the record.
pub fn set_field(
    doc: &Document,
    id: RecordId,
    column: &str,
    value: &str,
) -> Result<Document, EditError> {
    let record = doc
        .record(id)
        .ok_or(EditError::RecordNotFound { id: id.get() })?;

    if !doc.has_column(column) {
        tracing::debug!(record = %id, column, "Ignoring edit to unknown column");
    }

    let mut fields = record.fields.clone();
    fields.insert(column.to_owned(), value.to_owned());
    replace_record(doc, id, fields)
}

/// Remove record `id`. An unknown identity leaves the document unchanged.
pub fn delete_record(doc: &Document, id: RecordId) -> Document {
    let mut next = doc.clone();
    match doc.position(id) {
        Some(pos) => {
            next.records.remove(pos);
        }
        None => {
            tracing::debug!(record = %id, "Delete of unknown record is a no-op");
        }
    }
    next
}

/// Append a record built from `fields` and return it with its new identity.
///
/// Columns omitted from `fields` are absent in the new record.
pub fn add_record(doc: &Document, fields: FieldMap) -> (Document, RecordId) {
    let mut next = doc.clone();
    let fields = next.normalize(fields);
    let id = next.allocate_id();
    next.records.push(Record { id, fields });
    (next, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse;

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sample() -> Document {
        parse("a,b,c\n1,2,3\n4,5,6\n7,8,9", ',')
    }

    fn id_at(doc: &Document, index: usize) -> RecordId {
        doc.records()[index].id()
    }

    #[test]
    fn test_set_field_changes_only_target_cell() {
        let doc = sample();
        let target = id_at(&doc, 1);
        let edited = set_field(&doc, target, "b", "X").unwrap();

        for (before, after) in doc.records().iter().zip(edited.records()) {
            assert_eq!(before.id(), after.id());
            for header in doc.headers() {
                if before.id() == target && header == "b" {
                    assert_eq!(after.get(header), Some("X"));
                } else {
                    assert_eq!(before.get(header), after.get(header));
                }
            }
        }
    }

    #[test]
    fn test_set_field_does_not_mutate_input() {
        let doc = sample();
        let snapshot = doc.clone();
        let _ = set_field(&doc, id_at(&doc, 0), "a", "changed").unwrap();
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn test_set_field_unknown_record() {
        let doc = sample();
        let result = set_field(&doc, RecordId(999), "a", "x");
        assert_eq!(result, Err(EditError::RecordNotFound { id: 999 }));
    }

    #[test]
    fn test_set_field_on_absent_column_makes_it_present() {
        let doc = parse("a,b\n1", ',');
        let id = id_at(&doc, 0);
        assert_eq!(doc.records()[0].get("b"), None);
        let edited = set_field(&doc, id, "b", "").unwrap();
        assert_eq!(edited.records()[0].get("b"), Some(""));
    }

    #[test]
    fn test_set_field_unknown_column_is_dropped() {
        let doc = sample();
        let id = id_at(&doc, 0);
        let edited = set_field(&doc, id, "nope", "x").unwrap();
        assert_eq!(edited.records()[0].get("nope"), None);
        assert_eq!(edited, doc);
    }

    #[test]
    fn test_replace_record_clears_omitted_columns() {
        let doc = sample();
        let id = id_at(&doc, 0);
        let edited = replace_record(&doc, id, fields(&[("a", "10")])).unwrap();
        let record = edited.record(id).unwrap();
        assert_eq!(record.get("a"), Some("10"));
        assert_eq!(record.get("b"), None);
        assert_eq!(record.get("c"), None);
    }

    #[test]
    fn test_replace_record_keeps_position() {
        let doc = sample();
        let id = id_at(&doc, 1);
        let edited = replace_record(&doc, id, fields(&[("a", "x")])).unwrap();
        assert_eq!(id_at(&edited, 1), id);
        assert_eq!(edited.len(), doc.len());
    }

    #[test]
    fn test_delete_removes_exactly_one_and_keeps_order() {
        let doc = sample();
        let ids: Vec<_> = doc.records().iter().map(|r| r.id()).collect();
        let edited = delete_record(&doc, ids[1]);
        let remaining: Vec<_> = edited.records().iter().map(|r| r.id()).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let doc = sample();
        assert_eq!(delete_record(&doc, RecordId(12345)), doc);
    }

    #[test]
    fn test_delete_twice_is_safe() {
        let doc = sample();
        let id = id_at(&doc, 0);
        let once = delete_record(&doc, id);
        let twice = delete_record(&once, id);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_add_record_increments_len_with_fresh_id() {
        let doc = sample();
        let (edited, id) = add_record(&doc, fields(&[("a", "x")]));
        assert_eq!(edited.len(), doc.len() + 1);
        assert!(doc.record(id).is_none());
        assert_eq!(edited.records().last().map(|r| r.id()), Some(id));
    }

    #[test]
    fn test_add_record_omitted_columns_absent() {
        let doc = sample();
        let (edited, id) = add_record(&doc, fields(&[("b", "only-b"), ("bogus", "x")]));
        let record = edited.record(id).unwrap();
        assert_eq!(record.get("a"), None);
        assert_eq!(record.get("b"), Some("only-b"));
        assert_eq!(record.get("bogus"), None);
    }

    #[test]
    fn test_identity_not_reused_after_delete() {
        let doc = sample();
        let (with_new, new_id) = add_record(&doc, FieldMap::new());
        let without = delete_record(&with_new, new_id);
        let (again, newer_id) = add_record(&without, FieldMap::new());
        assert_ne!(new_id, newer_id);
        assert_eq!(again.len(), doc.len() + 1);
    }
}
