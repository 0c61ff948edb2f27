//! Property values and the per-node property map.
//!
//! Component properties are an open, JSON-shaped map: every node carries a
//! common subset (sizing, spacing, color, visibility, opacity) plus fields
//! specific to its kind. [`PropValue`] represents all values that can be
//! stored; [`Props`] is the ordered map of named properties.
//!
//! # Direct Comparisons
//!
//! `PropValue` implements `PartialEq` with primitive types for ergonomic
//! assertions:
//!
//! ```
//! # use pagewright::component::PropValue;
//! let text = PropValue::from("10px");
//! let number = PropValue::from(42);
//! let flag = PropValue::from(true);
//!
//! assert!(text == "10px");
//! assert!(number == 42);
//! assert!(flag == true);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single property value.
///
/// Values are either leaves (null, booleans, numbers, text) or branches
/// (lists and maps, used for things like select options or free-form style
/// overrides). The shape mirrors JSON so the transport bridge can map
/// values without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Explicit null. Persisted documents always spell absence out as null.
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value (opacity, coordinates, ...)
    Float(f64),
    /// Text string value
    Text(String),
    /// Ordered list of values
    List(Vec<PropValue>),
    /// Nested map of values
    Map(BTreeMap<String, PropValue>),
}

impl PropValue {
    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropValue::Null => "null",
            PropValue::Bool(_) => "bool",
            PropValue::Int(_) => "int",
            PropValue::Float(_) => "float",
            PropValue::Text(_) => "text",
            PropValue::List(_) => "list",
            PropValue::Map(_) => "map",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropValue::Float(n) => Some(*n),
            PropValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&[PropValue]> {
        match self {
            PropValue::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a map (returns immutable reference)
    pub fn as_map(&self) -> Option<&BTreeMap<String, PropValue>> {
        match self {
            PropValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Int(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Int(n.into())
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Float(n)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(list: Vec<PropValue>) -> Self {
        PropValue::List(list)
    }
}

impl From<BTreeMap<String, PropValue>> for PropValue {
    fn from(map: BTreeMap<String, PropValue>) -> Self {
        PropValue::Map(map)
    }
}

impl<T> From<Option<T>> for PropValue
where
    T: Into<PropValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => value.into(),
            None => PropValue::Null,
        }
    }
}

impl PartialEq<bool> for PropValue {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<i64> for PropValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<str> for PropValue {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for PropValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

/// Ordered map of named properties on a component node.
///
/// Key order is stable (sorted), so serialized documents are deterministic
/// regardless of the order in which the editor touched the fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    /// Creates an empty property map
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of properties
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no properties
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the map contains the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Gets a value by key
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// Gets the text value for a key, if it is text
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_text)
    }

    /// Sets a value, returning the previous value if present
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a value by key, returning it if present
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.0.remove(key)
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Copies every entry of `other` into this map, overwriting collisions.
    ///
    /// Used by the factory to layer shared trait groups under type-specific
    /// defaults.
    pub fn merge(&mut self, other: Props) {
        self.0.extend(other.0);
    }

    /// Returns an iterator over all key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropValue)> {
        self.0.iter()
    }

    /// Returns an iterator over all keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

impl FromIterator<(String, PropValue)> for Props {
    fn from_iter<T: IntoIterator<Item = (String, PropValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a String, &'a PropValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
