//! Text-boundary commits.
//!
//! Callers that hold the document as serialized text (an editor buffer, a
//! CLI pipe) commit edits through these helpers: parse, mutate, pretty-print.
//! Parsing is the only fallible step — when the document text is malformed
//! the edit is aborted and the caller's own state stays as it was, since
//! nothing here mutates in place.

use json_edit_core::{coerce, DocValue};
use json_edit_path::{Path, PathStep};

use crate::error::EditError;
use crate::op::{coerced_fields, Mutation};

/// Parse a path given as a JSON array of string/integer segments,
/// e.g. `["users", 0, "name"]`.
pub fn parse_path(path_json: &str) -> Result<Path, EditError> {
    serde_json::from_str(path_json).map_err(EditError::MalformedPath)
}

/// Commit a single scalar edit: coerce `raw` and replace the value at
/// `path`. Returns the pretty-printed new document.
///
/// A coerced scalar (or array) is never merge-eligible, so this always
/// replaces — even when the user typed a composite literal.
pub fn apply_value_edit(
    doc_json: &str,
    path: &[PathStep],
    raw: &str,
) -> Result<String, EditError> {
    let root = parse_doc(doc_json)?;
    let next = Mutation::Replace(coerce(raw)).apply(&root, path);
    Ok(next.to_json_text_pretty())
}

/// Commit a multi-field edit: coerce every `(field, raw)` pair into an
/// object and shallow-merge it at `path`, preserving children of the target
/// that were not presented as editable fields. Returns the pretty-printed
/// new document.
pub fn apply_field_edits(
    doc_json: &str,
    path: &[PathStep],
    fields: &[(&str, &str)],
) -> Result<String, EditError> {
    let root = parse_doc(doc_json)?;
    let next = Mutation::Merge(coerced_fields(fields)).apply(&root, path);
    Ok(next.to_json_text_pretty())
}

/// Commit a merge of a freeform payload: coerce `raw` and shallow-merge the
/// result at `path` (degrading to replace unless both sides are objects).
/// Returns the pretty-printed new document.
pub fn apply_merge_edit(
    doc_json: &str,
    path: &[PathStep],
    raw: &str,
) -> Result<String, EditError> {
    let root = parse_doc(doc_json)?;
    let next = Mutation::Merge(coerce(raw)).apply(&root, path);
    Ok(next.to_json_text_pretty())
}

fn parse_doc(doc_json: &str) -> Result<DocValue, EditError> {
    DocValue::from_json_text(doc_json).map_err(EditError::MalformedDocument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_edit_path::path_from_strings;

    #[test]
    fn parse_path_accepts_mixed_segments() {
        let path = parse_path(r#"["users", 0, "name"]"#).unwrap();
        assert_eq!(path, path_from_strings(&["users", "0", "name"]));
    }

    #[test]
    fn parse_path_rejects_non_arrays() {
        assert!(matches!(
            parse_path(r#""users.0.name""#),
            Err(EditError::MalformedPath(_))
        ));
        assert!(matches!(
            parse_path(r#"[{"k": 1}]"#),
            Err(EditError::MalformedPath(_))
        ));
    }

    #[test]
    fn malformed_document_aborts_the_edit() {
        let err = apply_value_edit("{oops", &path_from_strings(&["a"]), "1");
        assert!(matches!(err, Err(EditError::MalformedDocument(_))));
    }

    #[test]
    fn value_edit_roundtrips_through_text() {
        let next =
            apply_value_edit(r#"{"a": {"b": 1}}"#, &path_from_strings(&["a", "b"]), "99")
                .unwrap();
        assert_eq!(
            DocValue::from_json_text(&next).unwrap(),
            DocValue::from(serde_json::json!({"a": {"b": 99}}))
        );
    }
}
