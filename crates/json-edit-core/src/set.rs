//! Persistent path writes.
//!
//! Both entry points take the root by reference and return a rebuilt root.
//! Only the ancestors along the path are copied, one container level per
//! step; every subtree off the path is shared with the input via its `Arc`.
//! The input itself is never modified.

use std::sync::Arc;

use json_edit_path::PathStep;

use crate::value::{DocValue, ObjectMap};

/// What to do once the walk reaches the target location.
enum Write {
    Replace(DocValue),
    Merge(DocValue),
}

/// Install `value` at `path`, replacing whatever is there.
///
/// An empty path replaces the whole document. Missing intermediate
/// containers are synthesized: an array when the next step addresses an
/// index, an object otherwise. Writing past the end of an array pads the
/// gap with nulls.
///
/// # Example
///
/// ```
/// use json_edit_core::{set_at_path, DocValue};
/// use json_edit_path::path_from_strings;
///
/// let doc = DocValue::from(serde_json::json!({}));
/// let next = set_at_path(&doc, &path_from_strings(&["a", "0"]), DocValue::Bool(true));
/// assert_eq!(next, DocValue::from(serde_json::json!({"a": [true]})));
/// ```
pub fn set_at_path(root: &DocValue, path: &[PathStep], value: DocValue) -> DocValue {
    walk(root, path, Write::Replace(value))
}

/// Shallow-merge `partial` into the object at `path`.
///
/// When both the existing target and `partial` are objects, the result at
/// the target keeps the existing entries and overwrites/extends them with
/// `partial`'s entries (`partial` wins on collision). Any other shape on
/// either side degrades to a wholesale replace. The merge is shallow:
/// nested containers inside `partial` replace their counterparts, they are
/// not merged recursively.
///
/// # Example
///
/// ```
/// use json_edit_core::{set_at_path_merge, DocValue};
/// use json_edit_path::path_from_strings;
///
/// let doc = DocValue::from(serde_json::json!({"a": {"b": 1, "c": 2}}));
/// let partial = DocValue::from(serde_json::json!({"b": 99}));
/// let next = set_at_path_merge(&doc, &path_from_strings(&["a"]), partial);
/// assert_eq!(next, DocValue::from(serde_json::json!({"a": {"b": 99, "c": 2}})));
/// ```
pub fn set_at_path_merge(root: &DocValue, path: &[PathStep], partial: DocValue) -> DocValue {
    walk(root, path, Write::Merge(partial))
}

fn walk(cur: &DocValue, path: &[PathStep], write: Write) -> DocValue {
    let Some((step, rest)) = path.split_first() else {
        return match write {
            Write::Replace(value) => value,
            Write::Merge(partial) => merge_shallow(cur, partial),
        };
    };

    match cur {
        DocValue::Array(items) => match step.array_index() {
            Some(idx) => {
                let mut items = items.as_ref().clone();
                if idx >= items.len() {
                    items.resize(idx + 1, DocValue::Null);
                }
                let child = std::mem::replace(&mut items[idx], DocValue::Null);
                items[idx] = walk(&child, rest, write);
                DocValue::Array(Arc::new(items))
            }
            // A non-index key has no slot in an array; the write lands
            // nowhere and the subtree stays as-is.
            None => cur.clone(),
        },
        DocValue::Object(entries) => {
            let key = match step {
                PathStep::Key(k) => k.clone(),
                PathStep::Index(i) => i.to_string(),
            };
            let mut entries = entries.as_ref().clone();
            let child = entries.get(&key).cloned().unwrap_or(DocValue::Null);
            entries.insert(key, walk(&child, rest, write));
            DocValue::Object(Arc::new(entries))
        }
        // A scalar where the path still descends: replace it with the
        // container the step addresses and keep walking.
        _ => walk(&synthesize_for(step), path, write),
    }
}

/// Shallow object merge; any shape mismatch replaces wholesale.
fn merge_shallow(existing: &DocValue, partial: DocValue) -> DocValue {
    if let (DocValue::Object(base), DocValue::Object(overlay)) = (existing, &partial) {
        let mut merged = base.as_ref().clone();
        for (k, v) in overlay.iter() {
            merged.insert(k.clone(), v.clone());
        }
        return DocValue::Object(Arc::new(merged));
    }
    partial
}

/// Empty container for a missing step target: an array when the step looks
/// like an index, an object otherwise.
fn synthesize_for(step: &PathStep) -> DocValue {
    if step.array_index().is_some() {
        DocValue::array(Vec::new())
    } else {
        DocValue::object(ObjectMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_edit_path::{path_from_strings, Path};
    use serde_json::json;

    fn doc(v: serde_json::Value) -> DocValue {
        DocValue::from(v)
    }

    fn p(steps: &[&str]) -> Path {
        path_from_strings(steps)
    }

    #[test]
    fn replace_at_empty_path_is_identity() {
        let root = doc(json!({"a": 1}));
        let value = doc(json!([1, 2, 3]));
        assert_eq!(set_at_path(&root, &[], value.clone()), value);
    }

    #[test]
    fn replace_nested_value() {
        let root = doc(json!({"a": {"b": 1}, "c": 2}));
        let next = set_at_path(&root, &p(&["a", "b"]), doc(json!(99)));
        assert_eq!(next, doc(json!({"a": {"b": 99}, "c": 2})));
    }

    #[test]
    fn untouched_siblings_are_shared() {
        let root = doc(json!({"a": {"b": 1}, "c": {"big": [1, 2, 3]}}));
        let next = set_at_path(&root, &p(&["a", "b"]), doc(json!(99)));

        let old_c = &root.as_object().unwrap()["c"];
        let new_c = &next.as_object().unwrap()["c"];
        assert!(old_c.same_ref(new_c));

        // The copied spine is fresh at every level.
        assert!(!root.same_ref(&next));
        let old_a = &root.as_object().unwrap()["a"];
        let new_a = &next.as_object().unwrap()["a"];
        assert!(!old_a.same_ref(new_a));
    }

    #[test]
    fn input_is_never_mutated() {
        let root = doc(json!({"a": {"b": 1}, "c": [1, 2]}));
        let snapshot = root.clone();

        let _ = set_at_path(&root, &p(&["a", "b"]), doc(json!("x")));
        let _ = set_at_path(&root, &p(&["c", "5"]), doc(json!("y")));
        let _ = set_at_path_merge(&root, &p(&["a"]), doc(json!({"b": 7})));

        assert_eq!(root, snapshot);
    }

    #[test]
    fn synthesizes_object_for_key_step() {
        let root = doc(json!({}));
        let next = set_at_path(&root, &p(&["a", "b"]), doc(json!(1)));
        assert_eq!(next, doc(json!({"a": {"b": 1}})));
    }

    #[test]
    fn synthesizes_array_for_index_step() {
        let root = doc(json!({}));
        let next = set_at_path(&root, &p(&["a", "0"]), doc(json!(1)));
        assert_eq!(next, doc(json!({"a": [1]})));
    }

    #[test]
    fn deep_synthesis_mixes_shapes() {
        let root = doc(json!({}));
        let next = set_at_path(&root, &p(&["a", "0", "b"]), doc(json!(true)));
        assert_eq!(next, doc(json!({"a": [{"b": true}]})));
    }

    #[test]
    fn string_typed_numeric_segment_addresses_array_index() {
        let root = doc(json!({"a": [10, 20, 30]}));
        let next = set_at_path(&root, &p(&["a", "1"]), doc(json!(99)));
        assert_eq!(next, doc(json!({"a": [10, 99, 30]})));
    }

    #[test]
    fn index_step_addresses_array_index() {
        let root = doc(json!([10, 20]));
        let next = set_at_path(&root, &[PathStep::index(0)], doc(json!(0)));
        assert_eq!(next, doc(json!([0, 20])));
    }

    #[test]
    fn index_step_on_object_uses_decimal_key() {
        let root = doc(json!({"2": "two"}));
        let next = set_at_path(&root, &[PathStep::index(2)], doc(json!("II")));
        assert_eq!(next, doc(json!({"2": "II"})));
    }

    #[test]
    fn writing_past_array_end_pads_with_null() {
        let root = doc(json!({"a": [10]}));
        let next = set_at_path(&root, &p(&["a", "3"]), doc(json!(40)));
        assert_eq!(next, doc(json!({"a": [10, null, null, 40]})));
    }

    #[test]
    fn scalar_in_the_middle_of_a_path_is_replaced() {
        let root = doc(json!({"a": 5}));
        let next = set_at_path(&root, &p(&["a", "b"]), doc(json!(1)));
        assert_eq!(next, doc(json!({"a": {"b": 1}})));
    }

    #[test]
    fn scalar_root_with_nonempty_path_is_replaced() {
        let root = doc(json!(42));
        let next = set_at_path(&root, &p(&["a"]), doc(json!(1)));
        assert_eq!(next, doc(json!({"a": 1})));
    }

    #[test]
    fn non_index_key_on_array_is_a_noop() {
        let root = doc(json!({"a": [1, 2]}));
        let next = set_at_path(&root, &p(&["a", "name"]), doc(json!("x")));
        assert_eq!(next, root);
        // The untouched array is still the shared allocation.
        assert!(root.as_object().unwrap()["a"].same_ref(&next.as_object().unwrap()["a"]));
    }

    #[test]
    fn merge_preserves_siblings() {
        let root = doc(json!({"a": {"b": 1, "c": 2}}));
        let next = set_at_path_merge(&root, &p(&["a"]), doc(json!({"b": 99})));
        assert_eq!(next, doc(json!({"a": {"b": 99, "c": 2}})));
    }

    #[test]
    fn merge_preserves_non_scalar_children() {
        let root = doc(json!({"node": {"label": "old", "children": [{"x": 1}]}}));
        let next = set_at_path_merge(&root, &p(&["node"]), doc(json!({"label": "new"})));
        assert_eq!(
            next,
            doc(json!({"node": {"label": "new", "children": [{"x": 1}]}}))
        );
    }

    #[test]
    fn merge_falls_back_to_replace_on_non_object_target() {
        let root = doc(json!({"a": 5}));
        let next = set_at_path_merge(&root, &p(&["a"]), doc(json!({"x": 1})));
        assert_eq!(next, doc(json!({"a": {"x": 1}})));
    }

    #[test]
    fn merge_falls_back_to_replace_on_array_target() {
        let root = doc(json!({"a": [1, 2]}));
        let next = set_at_path_merge(&root, &p(&["a"]), doc(json!({"x": 1})));
        assert_eq!(next, doc(json!({"a": {"x": 1}})));
    }

    #[test]
    fn merge_with_non_object_partial_replaces() {
        let root = doc(json!({"a": {"b": 1}}));
        let next = set_at_path_merge(&root, &p(&["a"]), doc(json!([7])));
        assert_eq!(next, doc(json!({"a": [7]})));
    }

    #[test]
    fn merge_at_root() {
        let root = doc(json!({"a": 1, "b": 2}));
        let next = set_at_path_merge(&root, &[], doc(json!({"b": 9, "c": 3})));
        assert_eq!(next, doc(json!({"a": 1, "b": 9, "c": 3})));
    }

    #[test]
    fn merge_at_root_with_shape_mismatch_replaces() {
        let root = doc(json!([1, 2]));
        let next = set_at_path_merge(&root, &[], doc(json!({"a": 1})));
        assert_eq!(next, doc(json!({"a": 1})));
    }

    #[test]
    fn merge_is_shallow() {
        let root = doc(json!({"a": {"nested": {"keep": 1, "drop": 2}}}));
        let next = set_at_path_merge(&root, &p(&["a"]), doc(json!({"nested": {"new": 3}})));
        // The nested object is replaced wholesale, not merged.
        assert_eq!(next, doc(json!({"a": {"nested": {"new": 3}}})));
    }

    #[test]
    fn merge_keeps_existing_key_positions() {
        let root = doc(json!({"z": 1, "a": 2}));
        let next = set_at_path_merge(&root, &[], doc(json!({"a": 9, "n": 3})));
        assert_eq!(next.to_json_text(), r#"{"z":1,"a":9,"n":3}"#);
    }

    #[test]
    fn merge_synthesizes_missing_target() {
        let root = doc(json!({}));
        let next = set_at_path_merge(&root, &p(&["a"]), doc(json!({"x": 1})));
        assert_eq!(next, doc(json!({"a": {"x": 1}})));
    }

    #[test]
    fn merge_shares_untouched_siblings() {
        let root = doc(json!({"a": {"b": 1}, "c": [1, 2, 3]}));
        let next = set_at_path_merge(&root, &p(&["a"]), doc(json!({"b": 2})));
        assert!(root.as_object().unwrap()["c"].same_ref(&next.as_object().unwrap()["c"]));
    }
}
