//! Editor core for path-addressed JSON documents.
//!
//! Ties the pure primitives from [`json_edit_core`] into the surfaces an
//! interactive editor needs:
//!
//! - [`Mutation`] — the two write intents (replace, shallow merge) as data,
//!   with a single `apply` dispatch.
//! - [`text`] — string-in/string-out commits for callers that hold the
//!   document as serialized text (editor buffers, CLI tools). A malformed
//!   document aborts the edit and leaves the caller's state untouched.
//! - [`EditSession`] — an owned document root with commit methods, remembered
//!   selection, and best-effort change fan-out to subscribed views.
//!
//! # Example
//!
//! ```
//! use json_edit::text::apply_value_edit;
//! use json_edit_path::path_from_strings;
//!
//! let doc = r#"{"users": [{"name": "ada"}]}"#;
//! let path = path_from_strings(&["users", "0", "name"]);
//! let next = apply_value_edit(doc, &path, "grace").unwrap();
//! assert!(next.contains("\"grace\""));
//! ```

pub mod error;
pub mod op;
pub mod session;
pub mod text;

pub use error::{EditError, SinkError};
pub use op::{coerced_fields, Mutation};
pub use session::{DocumentSink, EditSession};

// The primitives, re-exported for convenience.
pub use json_edit_core::{coerce, get, set_at_path, set_at_path_merge, DocValue, ObjectMap};
pub use json_edit_path::{Path, PathStep};
