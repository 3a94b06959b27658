//! Immutable path lookup.

use json_edit_path::PathStep;

use crate::value::DocValue;

/// Get the value at `path`, or `None` on any miss.
///
/// Uses the same key resolution as the writes: index steps and canonical
/// integer key steps address array slots, everything else addresses object
/// properties (an index step against an object lands on the property with
/// its decimal spelling).
///
/// # Example
///
/// ```
/// use json_edit_core::{get, DocValue};
/// use json_edit_path::path_from_strings;
///
/// let doc = DocValue::from(serde_json::json!({"a": {"b": [10, 20]}}));
/// let found = get(&doc, &path_from_strings(&["a", "b", "1"]));
/// assert_eq!(found, Some(&DocValue::from(serde_json::json!(20))));
/// assert_eq!(get(&doc, &path_from_strings(&["a", "missing"])), None);
/// ```
pub fn get<'a>(root: &'a DocValue, path: &[PathStep]) -> Option<&'a DocValue> {
    let mut current = root;
    for step in path {
        match current {
            DocValue::Array(items) => {
                let idx = step.array_index()?;
                current = items.get(idx)?;
            }
            DocValue::Object(entries) => {
                current = match step {
                    PathStep::Key(k) => entries.get(k.as_str())?,
                    PathStep::Index(i) => entries.get(i.to_string().as_str())?,
                };
            }
            _ => return None,
        }
    }
    Some(current)
}
