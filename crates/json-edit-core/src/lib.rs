//! Core primitives for the `json-edit` document editor.
//!
//! This crate holds the document value type and the two pure operations the
//! editor is built on:
//!
//! - [`coerce`] — total conversion of freeform user text into a typed JSON
//!   value.
//! - [`set_at_path`] / [`set_at_path_merge`] — persistent writes: given a
//!   root, a path, and a value, produce a new root with the value installed.
//!   The input root is never touched; ancestors along the path are freshly
//!   copied, and every subtree off the path is shared with the input.
//!
//! # Example
//!
//! ```
//! use json_edit_core::{coerce, set_at_path, DocValue};
//! use json_edit_path::path_from_strings;
//!
//! let doc = DocValue::from(serde_json::json!({"a": {"b": 1}, "c": 2}));
//! let path = path_from_strings(&["a", "b"]);
//! let next = set_at_path(&doc, &path, coerce("99"));
//!
//! assert_eq!(next, DocValue::from(serde_json::json!({"a": {"b": 99}, "c": 2})));
//! // The original document is unchanged.
//! assert_eq!(doc, DocValue::from(serde_json::json!({"a": {"b": 1}, "c": 2})));
//! ```

pub mod coerce;
pub mod get;
pub mod set;
pub mod value;

pub use coerce::coerce;
pub use get::get;
pub use set::{set_at_path, set_at_path_merge};
pub use value::{DocValue, ObjectMap};
