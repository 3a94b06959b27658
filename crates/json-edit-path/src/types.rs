//! Type definitions for document paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single step in a document path.
///
/// Either an object key or an array index. The serde representation is
/// untagged, so a JSON array such as `["users", 0, "name"]` deserializes
/// directly into a sequence of steps.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathStep {
    /// Array element access: `[index]`
    Index(usize),
    /// Object property access: `{"key": value}`
    Key(String),
}

/// A document path.
///
/// An ordered walk from the document root toward a leaf. The empty path
/// denotes the root itself. All consumers of this crate accept paths in
/// root→leaf order; see [`path_from_leaf_order`](crate::path_from_leaf_order)
/// for producers that emit steps the other way around.
pub type Path = Vec<PathStep>;

impl PathStep {
    /// Create a key step.
    #[inline]
    pub fn key(k: impl Into<String>) -> Self {
        PathStep::Key(k.into())
    }

    /// Create an index step.
    #[inline]
    pub fn index(i: usize) -> Self {
        PathStep::Index(i)
    }

    /// Returns true if this is a key step.
    #[inline]
    pub fn is_key(&self) -> bool {
        matches!(self, PathStep::Key(_))
    }

    /// Returns true if this is an index step.
    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, PathStep::Index(_))
    }

    /// Get the key if this is a key step.
    #[inline]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathStep::Key(k) => Some(k),
            PathStep::Index(_) => None,
        }
    }

    /// The array index this step can address, if any.
    ///
    /// Index steps address their index directly. Key steps address an index
    /// when their text is a canonical non-negative integer (digits only, no
    /// leading zeros) — the spelling a UI layer produces when it stringifies
    /// array positions.
    ///
    /// # Example
    ///
    /// ```
    /// use json_edit_path::PathStep;
    ///
    /// assert_eq!(PathStep::index(3).array_index(), Some(3));
    /// assert_eq!(PathStep::key("3").array_index(), Some(3));
    /// assert_eq!(PathStep::key("03").array_index(), None);
    /// assert_eq!(PathStep::key("name").array_index(), None);
    /// ```
    pub fn array_index(&self) -> Option<usize> {
        match self {
            PathStep::Index(i) => Some(*i),
            PathStep::Key(k) => {
                if crate::is_valid_index(k) {
                    k.parse().ok()
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(k) => write!(f, ".{}", k),
            PathStep::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<String> for PathStep {
    fn from(s: String) -> Self {
        PathStep::Key(s)
    }
}

impl From<&str> for PathStep {
    fn from(s: &str) -> Self {
        PathStep::Key(s.to_owned())
    }
}

impl From<usize> for PathStep {
    fn from(i: usize) -> Self {
        PathStep::Index(i)
    }
}
