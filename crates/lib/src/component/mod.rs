//! The component node data model.
//!
//! A canvas document is a forest of [`Component`] nodes: a top-level ordered
//! sequence (the canvas root), each node recursively owning an ordered
//! sequence of children. Ownership is exclusive: every node lives in
//! exactly one owning array. Subtrees are shared between tree versions
//! through [`Arc`], which is what makes copy-on-write mutation cheap and
//! lets the render loop detect change by pointer comparison.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub mod id;
pub mod kind;
pub mod props;

pub use id::ComponentId;
pub use kind::{Category, ComponentKind, UnknownKind};
pub use props::{PropValue, Props};

/// Denormalized description of a component kind.
///
/// Attached to nodes for the convenience of downstream consumers (the
/// rendering SDK lists components by display name without a registry of its
/// own); always reconstructible from the kind alone and never hand-edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub display_name: String,
    pub description: String,
    pub category: Category,
    pub accepts_children: bool,
}

/// A single node in the canvas tree.
///
/// `children` is `Some` (possibly empty) exactly for kinds classified as
/// children-capable by [`ComponentKind::accepts_children`], and `None` for
/// leaf kinds. The factory and the transport bridge uphold that agreement;
/// the tree algorithms rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub props: Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Arc<Component>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ComponentMetadata>,
}

impl Component {
    /// Children as a slice, empty for leaf nodes.
    pub fn child_nodes(&self) -> &[Arc<Component>] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Returns true if this node owns a children sequence (even an empty one).
    pub fn has_children_slot(&self) -> bool {
        self.children.is_some()
    }

    /// Returns true if `id` names this node or any node in its subtree.
    pub fn contains(&self, id: &ComponentId) -> bool {
        if self.id == *id {
            return true;
        }
        self.child_nodes().iter().any(|child| child.contains(id))
    }

    /// Number of nodes in this subtree, including this node.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .child_nodes()
            .iter()
            .map(|child| child.subtree_len())
            .sum::<usize>()
    }
}
