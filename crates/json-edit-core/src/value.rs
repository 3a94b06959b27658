//! [`DocValue`] — the document value type shared across the editor.
//!
//! A JSON value with reference-counted containers. Cloning a `DocValue` is
//! cheap for arrays and objects (the `Arc` is bumped, the contents are
//! shared), which is what makes the persistent writes in [`crate::set`] cost
//! O(path length) instead of O(document size).

use indexmap::IndexMap;
use std::sync::Arc;

/// Insertion-ordered object storage. Key order is meaningful: it survives
/// into serialized output.
pub type ObjectMap = IndexMap<String, DocValue>;

/// A JSON document value.
///
/// Scalars are stored inline; arrays and objects are behind `Arc`, so an
/// unmodified subtree in a rebuilt document is the same allocation as in the
/// original. [`DocValue::same_ref`] observes that sharing.
#[derive(Debug, Clone, PartialEq)]
pub enum DocValue {
    /// JSON null
    Null,
    /// Boolean value
    Bool(bool),
    /// Number (integer or float, exact serialized form preserved)
    Number(serde_json::Number),
    /// String
    String(String),
    /// Array of values, shared
    Array(Arc<Vec<DocValue>>),
    /// Object (insertion-ordered key-value pairs), shared
    Object(Arc<ObjectMap>),
}

impl DocValue {
    /// Wrap a vector of values into a shared array.
    #[inline]
    pub fn array(items: Vec<DocValue>) -> Self {
        DocValue::Array(Arc::new(items))
    }

    /// Wrap an ordered map into a shared object.
    #[inline]
    pub fn object(entries: ObjectMap) -> Self {
        DocValue::Object(Arc::new(entries))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, DocValue::Null)
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, DocValue::Bool(_))
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, DocValue::Number(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, DocValue::String(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, DocValue::Array(_))
    }

    /// Returns true for objects — the only shape merge applies to.
    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, DocValue::Object(_))
    }

    /// Get the boolean if this is a boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DocValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the string contents if this is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the array contents if this is an array.
    #[inline]
    pub fn as_array(&self) -> Option<&Vec<DocValue>> {
        match self {
            DocValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the object entries if this is an object.
    #[inline]
    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            DocValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// True when both values are the **same shared container allocation**.
    ///
    /// Deep equality (`==`) compares contents; `same_ref` compares identity.
    /// Scalars have no shared storage and never compare true.
    ///
    /// # Example
    ///
    /// ```
    /// use json_edit_core::DocValue;
    ///
    /// let a = DocValue::from(serde_json::json!([1, 2, 3]));
    /// let b = a.clone();
    /// assert!(a.same_ref(&b));
    ///
    /// let c = DocValue::from(serde_json::json!([1, 2, 3]));
    /// assert_eq!(a, c);
    /// assert!(!a.same_ref(&c));
    /// ```
    pub fn same_ref(&self, other: &DocValue) -> bool {
        match (self, other) {
            (DocValue::Array(a), DocValue::Array(b)) => Arc::ptr_eq(a, b),
            (DocValue::Object(a), DocValue::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Parse a serialized JSON document.
    pub fn from_json_text(text: &str) -> Result<DocValue, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(DocValue::from(value))
    }

    /// Serialize to compact JSON text. Object key order is insertion order.
    pub fn to_json_text(&self) -> String {
        serde_json::Value::from(self).to_string()
    }

    /// Serialize to pretty-printed JSON text. Object key order is insertion
    /// order, so re-serializing an edited document keeps untouched keys
    /// where the user last saw them.
    pub fn to_json_text_pretty(&self) -> String {
        format!("{:#}", serde_json::Value::from(self))
    }
}

impl From<serde_json::Value> for DocValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => DocValue::Null,
            serde_json::Value::Bool(b) => DocValue::Bool(b),
            serde_json::Value::Number(n) => DocValue::Number(n),
            serde_json::Value::String(s) => DocValue::String(s),
            serde_json::Value::Array(arr) => {
                DocValue::array(arr.into_iter().map(DocValue::from).collect())
            }
            serde_json::Value::Object(obj) => DocValue::object(
                obj.into_iter()
                    .map(|(k, v)| (k, DocValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&DocValue> for serde_json::Value {
    fn from(v: &DocValue) -> Self {
        match v {
            DocValue::Null => serde_json::Value::Null,
            DocValue::Bool(b) => serde_json::Value::Bool(*b),
            DocValue::Number(n) => serde_json::Value::Number(n.clone()),
            DocValue::String(s) => serde_json::Value::String(s.clone()),
            DocValue::Array(items) => serde_json::Value::Array(
                items.iter().map(serde_json::Value::from).collect(),
            ),
            DocValue::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<DocValue> for serde_json::Value {
    fn from(v: DocValue) -> Self {
        serde_json::Value::from(&v)
    }
}
