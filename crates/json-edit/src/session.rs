//! The stateful edit session.
//!
//! `EditSession` owns the single document root the rest of the application
//! shares. Every commit swaps the owned root for a freshly built one — the
//! previous root is never mutated, so any outstanding clone of it stays
//! valid. Dependent views subscribe as [`DocumentSink`]s and are refreshed
//! after each change on a best-effort basis: a failing sink is logged and
//! skipped, never rolling back the document.

use json_edit_core::{coerce, get, DocValue};
use json_edit_path::{format_path, Path, PathStep};

use crate::error::{EditError, SinkError};
use crate::op::{coerced_fields, Mutation};

/// A dependent view of the document: a mirrored text buffer, a tree
/// re-render trigger, a persistence hook.
pub trait DocumentSink {
    /// Name used when a failure of this sink is logged.
    fn name(&self) -> &str {
        "sink"
    }

    /// Called after every successful document change with the new root and
    /// its pretty-printed form.
    fn document_changed(&mut self, doc: &DocValue, pretty: &str) -> Result<(), SinkError>;
}

/// An owned document root with commit methods, remembered selection, and
/// change fan-out.
pub struct EditSession {
    root: DocValue,
    selection: Option<Path>,
    sinks: Vec<Box<dyn DocumentSink>>,
}

impl EditSession {
    /// Start a session over an already-parsed document.
    pub fn new(root: DocValue) -> Self {
        Self {
            root,
            selection: None,
            sinks: Vec::new(),
        }
    }

    /// Start a session from serialized JSON text.
    pub fn from_text(text: &str) -> Result<Self, EditError> {
        let root = DocValue::from_json_text(text).map_err(EditError::MalformedDocument)?;
        Ok(Self::new(root))
    }

    /// The current document root.
    pub fn root(&self) -> &DocValue {
        &self.root
    }

    /// The current document, pretty-printed.
    pub fn pretty(&self) -> String {
        self.root.to_json_text_pretty()
    }

    /// Subscribe a dependent view. It is not called until the next change.
    pub fn subscribe(&mut self, sink: Box<dyn DocumentSink>) {
        self.sinks.push(sink);
    }

    /// Remember a selected node. The selection is re-validated after every
    /// commit and cleared if the node no longer exists.
    pub fn select(&mut self, path: Path) {
        self.selection = Some(path);
    }

    /// The currently selected path, if any.
    pub fn selection(&self) -> Option<&Path> {
        self.selection.as_ref()
    }

    /// The value at the current selection, if it still exists.
    pub fn selected_value(&self) -> Option<&DocValue> {
        self.selection.as_ref().and_then(|path| get(&self.root, path))
    }

    /// Commit a single scalar edit: coerce `raw` and replace at `path`.
    pub fn commit_value(&mut self, path: &[PathStep], raw: &str) -> &DocValue {
        self.commit(path, Mutation::Replace(coerce(raw)))
    }

    /// Commit a multi-field edit: coerce each `(field, raw)` pair and
    /// shallow-merge the resulting object at `path`.
    pub fn commit_fields(&mut self, path: &[PathStep], fields: &[(&str, &str)]) -> &DocValue {
        self.commit(path, Mutation::Merge(coerced_fields(fields)))
    }

    /// Commit an arbitrary mutation intent.
    pub fn commit(&mut self, path: &[PathStep], mutation: Mutation) -> &DocValue {
        self.root = mutation.apply(&self.root, path);
        self.after_change();
        &self.root
    }

    /// Replace the document from serialized text. Malformed input is an
    /// error and the prior document is kept.
    pub fn load_text(&mut self, text: &str) -> Result<(), EditError> {
        let root = DocValue::from_json_text(text).map_err(EditError::MalformedDocument)?;
        self.root = root;
        self.after_change();
        Ok(())
    }

    /// Secondary updates after the primary mutation has been committed.
    /// Each step may fail on its own; failures are logged and do not undo
    /// the document change.
    fn after_change(&mut self) {
        if let Some(selected) = &self.selection {
            if get(&self.root, selected).is_none() {
                tracing::warn!(
                    path = %format_path(selected),
                    "selected node no longer exists; clearing selection"
                );
                self.selection = None;
            }
        }

        let pretty = self.root.to_json_text_pretty();
        for sink in &mut self.sinks {
            if let Err(err) = sink.document_changed(&self.root, &pretty) {
                tracing::warn!(sink = sink.name(), error = %err, "document sink failed");
            }
        }
    }
}
