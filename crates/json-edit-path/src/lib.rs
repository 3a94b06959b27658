//! Path model for the `json-edit` document editor.
//!
//! A path is an ordered sequence of steps — object keys or array indices —
//! describing a walk from a document root to a target location. The empty
//! path denotes the root itself.
//!
//! # Orientation
//!
//! Every function in this workspace takes paths in **root→leaf** order.
//! Components that discover a node by walking parent links upward (tree
//! renderers, breadcrumb builders) naturally collect steps leaf-first; they
//! must adapt with [`path_from_leaf_order`] before calling any mutator or
//! lookup.
//!
//! # Example
//!
//! ```
//! use json_edit_path::{path_from_strings, PathStep};
//!
//! // Segments arriving from a UI layer as plain strings.
//! let path = path_from_strings(&["users", "0", "name"]);
//! assert_eq!(
//!     path,
//!     vec![PathStep::key("users"), PathStep::index(0), PathStep::key("name")]
//! );
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Path, PathStep};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("NO_PARENT")]
    NoParent,
}

/// Build a path from plain string segments.
///
/// Segments spelled as canonical non-negative integers become index steps;
/// everything else becomes a key step. This is the adapter for UI layers
/// that stringify every segment.
pub fn path_from_strings<S: AsRef<str>>(segments: &[S]) -> Path {
    segments
        .iter()
        .map(|s| {
            let s = s.as_ref();
            match s.parse() {
                Ok(i) if is_valid_index(s) => PathStep::Index(i),
                _ => PathStep::Key(s.to_owned()),
            }
        })
        .collect()
}

/// Build a canonical root→leaf path from steps collected leaf-first.
///
/// Tree-walking producers that climb from a selected node to the root emit
/// steps in leaf→root order; this reverses them into the orientation the
/// rest of the workspace expects.
///
/// # Example
///
/// ```
/// use json_edit_path::{path_from_leaf_order, PathStep};
///
/// let leaf_first = vec![PathStep::key("name"), PathStep::index(0), PathStep::key("users")];
/// assert_eq!(
///     path_from_leaf_order(leaf_first),
///     vec![PathStep::key("users"), PathStep::index(0), PathStep::key("name")]
/// );
/// ```
pub fn path_from_leaf_order(mut steps: Vec<PathStep>) -> Path {
    steps.reverse();
    steps
}

/// Check if a path points to the root value.
pub fn is_root(path: &[PathStep]) -> bool {
    path.is_empty()
}

/// Check if `parent` path contains the `child` path.
pub fn is_child(parent: &[PathStep], child: &[PathStep]) -> bool {
    if parent.len() >= child.len() {
        return false;
    }
    for i in 0..parent.len() {
        if parent[i] != child[i] {
            return false;
        }
    }
    true
}

/// Check if two paths address the same location.
pub fn is_path_equal(p1: &[PathStep], p2: &[PathStep]) -> bool {
    if p1.len() != p2.len() {
        return false;
    }
    for i in 0..p1.len() {
        if p1[i] != p2[i] {
            return false;
        }
    }
    true
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns an error if the path has no parent (is the root).
pub fn parent(path: &[PathStep]) -> Result<Path, PathError> {
    if path.is_empty() {
        return Err(PathError::NoParent);
    }
    Ok(path[..path.len() - 1].to_vec())
}

/// Render a path in display form, e.g. `.users[0].name`.
///
/// The rendering is stable for a given path, which lets callers re-identify
/// a previously selected node across re-renders by string comparison.
pub fn format_path(path: &[PathStep]) -> String {
    let mut out = String::new();
    for step in path {
        out.push_str(&step.to_string());
    }
    out
}

/// Check if a string is a canonical non-negative integer array index.
///
/// Digits only, and no leading zeros except `"0"` itself. Any other spelling
/// (`"01"`, `"+5"`, `"1.5"`) addresses an object property, never an array
/// slot.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}
