//! Mutation intents.

use json_edit_core::{coerce, set_at_path, set_at_path_merge, DocValue, ObjectMap};
use json_edit_path::PathStep;

/// A write intent against a document location.
///
/// `Replace` installs the value wholesale. `Merge` shallow-merges an object
/// payload into an existing object target, preserving sibling keys; any
/// shape mismatch on either side degrades to replace semantics, so the
/// intent is always applicable.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Replace(DocValue),
    Merge(DocValue),
}

impl Mutation {
    /// Returns the intent name.
    pub fn op_name(&self) -> &'static str {
        match self {
            Mutation::Replace(_) => "replace",
            Mutation::Merge(_) => "merge",
        }
    }

    /// Apply this intent to `root` at `path`, returning the rebuilt root.
    pub fn apply(self, root: &DocValue, path: &[PathStep]) -> DocValue {
        match self {
            Mutation::Replace(value) => set_at_path(root, path, value),
            Mutation::Merge(partial) => set_at_path_merge(root, path, partial),
        }
    }
}

/// Build the merge payload for a multi-field edit.
///
/// Each `(field, raw)` pair becomes a coerced entry of an object; merging
/// that object preserves any children of the target that were not presented
/// as editable fields.
///
/// # Example
///
/// ```
/// use json_edit::{coerced_fields, DocValue};
///
/// let partial = coerced_fields(&[("name", "ada"), ("age", "36")]);
/// assert_eq!(
///     partial,
///     DocValue::from(serde_json::json!({"name": "ada", "age": 36}))
/// );
/// ```
pub fn coerced_fields(fields: &[(&str, &str)]) -> DocValue {
    let mut entries = ObjectMap::new();
    for (field, raw) in fields {
        entries.insert((*field).to_owned(), coerce(raw));
    }
    DocValue::object(entries)
}
