//! Opaque component identifier type.
//!
//! Every node in the canvas tree carries a `ComponentId`, generated once at
//! creation and never changed for the node's lifetime. The string form is a
//! UUID v4, but callers must treat the value as opaque.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a component node.
///
/// Backed by a string so foreign ids (documents written by other tooling)
/// round-trip untouched; locally created ids are UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(String);

impl ComponentId {
    /// Generates a fresh unique id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the id is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&ComponentId> for ComponentId {
    fn from(id: &ComponentId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.0)
    }
}

impl PartialEq<str> for ComponentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ComponentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<ComponentId> for str {
    fn eq(&self, other: &ComponentId) -> bool {
        self == other.0
    }
}

impl PartialEq<ComponentId> for &str {
    fn eq(&self, other: &ComponentId) -> bool {
        *self == other.0
    }
}

impl From<ComponentId> for String {
    fn from(id: ComponentId) -> Self {
        id.0
    }
}

impl From<&ComponentId> for String {
    fn from(id: &ComponentId) -> Self {
        id.0.clone()
    }
}
