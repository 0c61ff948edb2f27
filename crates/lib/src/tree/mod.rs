//! Tree location engine: pure structural algorithms over the canvas tree.
//!
//! Every function here is a pure projection or a copy-on-write rewrite:
//! mutating operations ([`remove`], [`insert`], [`update`]) reconstruct only
//! the path from the root to the touched node and reuse every untouched
//! subtree by [`Arc`] reference, so the cost of an edit is proportional to
//! tree depth, not tree size, and downstream consumers can detect "did
//! anything change" with a pointer comparison.
//!
//! None of these functions report missing ids as errors: locating an absent
//! id yields `None`, removing it yields an unchanged tree. Uniqueness of
//! ids across the tree is an unchecked precondition; if it is ever
//! violated, the first match in pre-order wins.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::component::{Component, ComponentId};


/// Names the owner of a position in the canvas tree: either the top-level
/// root sequence or the children of a specific component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    /// The canvas root sequence.
    Root,
    /// The children sequence of the named component.
    Node(ComponentId),
}

impl Anchor {
    /// Returns true for the canvas root.
    pub fn is_root(&self) -> bool {
        matches!(self, Anchor::Root)
    }

    /// The component id, if this anchor names one.
    pub fn node_id(&self) -> Option<&ComponentId> {
        match self {
            Anchor::Root => None,
            Anchor::Node(id) => Some(id),
        }
    }
}

impl From<ComponentId> for Anchor {
    fn from(id: ComponentId) -> Self {
        Anchor::Node(id)
    }
}

impl From<&ComponentId> for Anchor {
    fn from(id: &ComponentId) -> Self {
        Anchor::Node(id.clone())
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anchor::Root => f.write_str("canvas-root"),
            Anchor::Node(id) => write!(f, "{id}"),
        }
    }
}

/// The result of locating a node: the node itself, the exact owning slice
/// it physically sits in (the root sequence or some parent's children), and
/// its index within that slice.
///
/// The owning slice is borrowed from inside the searched tree, so callers
/// can compare it by pointer against a candidate parent's children to tell
/// *which* level of the tree owns the node.
#[derive(Debug, Clone, Copy)]
pub struct Location<'a> {
    pub component: &'a Arc<Component>,
    pub owner: &'a [Arc<Component>],
    pub index: usize,
}

/// One row of the flattened outline projection.
#[derive(Debug, Clone)]
pub struct FlatNode {
    pub id: ComponentId,
    pub depth: usize,
    pub parent: Anchor,
    pub component: Arc<Component>,
}

/// Finds a node by id, depth-first pre-order.
///
/// Returns `None` if the id is not present anywhere in the tree.
pub fn locate<'a>(tree: &'a [Arc<Component>], id: &ComponentId) -> Option<Location<'a>> {
    for (index, component) in tree.iter().enumerate() {
        if component.id == *id {
            return Some(Location {
                component,
                owner: tree,
                index,
            });
        }
        if let Some(children) = &component.children {
            if let Some(found) = locate(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Removes the node with the given id, cascading to its whole subtree.
///
/// Returns the new tree. Only the path from the root to the removed node's
/// parent is rebuilt; all sibling subtrees keep their `Arc` identity.
/// Removing an id that is not present returns an unchanged tree.
pub fn remove(tree: &[Arc<Component>], id: &ComponentId) -> Vec<Arc<Component>> {
    remove_in(tree, id).unwrap_or_else(|| tree.to_vec())
}

fn remove_in(tree: &[Arc<Component>], id: &ComponentId) -> Option<Vec<Arc<Component>>> {
    if let Some(position) = tree.iter().position(|c| c.id == *id) {
        let mut out = Vec::with_capacity(tree.len().saturating_sub(1));
        out.extend_from_slice(&tree[..position]);
        out.extend_from_slice(&tree[position + 1..]);
        return Some(out);
    }
    for (index, component) in tree.iter().enumerate() {
        if let Some(children) = &component.children {
            if let Some(new_children) = remove_in(children, id) {
                let mut copy = Component::clone(component);
                copy.children = Some(new_children);
                let mut out = tree.to_vec();
                out[index] = Arc::new(copy);
                return Some(out);
            }
        }
    }
    None
}

/// Inserts `node` into the children of `target` (or the root sequence) at
/// `index`, clamped to the length of the target sequence.
///
/// Inserting under a node that has no children capability is a no-op; a
/// diagnostic is logged but no error surfaces, matching the engine's
/// soft-failure contract. Inserting under an id that does not exist leaves
/// the tree unchanged as well.
pub fn insert(
    tree: &[Arc<Component>],
    node: Arc<Component>,
    target: &Anchor,
    index: usize,
) -> Vec<Arc<Component>> {
    match target {
        Anchor::Root => {
            let mut out = tree.to_vec();
            let clamped = index.min(out.len());
            out.insert(clamped, node);
            out
        }
        Anchor::Node(parent_id) => match insert_in(tree, node, parent_id, index) {
            Some(out) => out,
            None => {
                debug!(target = %parent_id, "insert target not found, leaving tree unchanged");
                tree.to_vec()
            }
        },
    }
}

fn insert_in(
    tree: &[Arc<Component>],
    node: Arc<Component>,
    parent_id: &ComponentId,
    index: usize,
) -> Option<Vec<Arc<Component>>> {
    if let Some(position) = tree.iter().position(|c| c.id == *parent_id) {
        let parent = &tree[position];
        let Some(children) = &parent.children else {
            warn!(
                target = %parent_id,
                kind = %parent.kind,
                "attempted to insert into a component without children capability"
            );
            return Some(tree.to_vec());
        };
        let mut new_children = children.to_vec();
        let clamped = index.min(new_children.len());
        new_children.insert(clamped, node);
        let mut copy = Component::clone(parent);
        copy.children = Some(new_children);
        let mut out = tree.to_vec();
        out[position] = Arc::new(copy);
        return Some(out);
    }
    for (i, component) in tree.iter().enumerate() {
        if let Some(children) = &component.children {
            if let Some(new_children) = insert_in(children, Arc::clone(&node), parent_id, index) {
                let mut copy = Component::clone(component);
                copy.children = Some(new_children);
                let mut out = tree.to_vec();
                out[i] = Arc::new(copy);
                return Some(out);
            }
        }
    }
    None
}

/// Rewrites a single node in place (copy-on-write), leaving the rest of the
/// tree shared.
///
/// The closure receives a mutable copy of the node; the path from the root
/// down to it is rebuilt, everything else keeps its `Arc` identity. If the
/// id is not present the tree is returned unchanged and the closure is not
/// called.
pub fn update(
    tree: &[Arc<Component>],
    id: &ComponentId,
    edit: impl FnOnce(&mut Component),
) -> Vec<Arc<Component>> {
    match path_to(tree, id) {
        Some(path) => rebuild_along(tree, &path, edit),
        None => tree.to_vec(),
    }
}

fn path_to(tree: &[Arc<Component>], id: &ComponentId) -> Option<Vec<usize>> {
    for (index, component) in tree.iter().enumerate() {
        if component.id == *id {
            return Some(vec![index]);
        }
        if let Some(children) = &component.children {
            if let Some(mut path) = path_to(children, id) {
                path.insert(0, index);
                return Some(path);
            }
        }
    }
    None
}

fn rebuild_along<F: FnOnce(&mut Component)>(
    tree: &[Arc<Component>],
    path: &[usize],
    edit: F,
) -> Vec<Arc<Component>> {
    let index = path[0];
    let mut copy = Component::clone(&tree[index]);
    if path.len() == 1 {
        edit(&mut copy);
    } else {
        let children = copy.children.take().unwrap_or_default();
        copy.children = Some(rebuild_along(&children, &path[1..], edit));
    }
    let mut out = tree.to_vec();
    out[index] = Arc::new(copy);
    out
}

/// Finds the structural parent node of a given child id.
///
/// Returns `None` if the child sits at the canvas root or is not present.
pub fn find_parent<'a>(
    tree: &'a [Arc<Component>],
    child_id: &ComponentId,
) -> Option<&'a Arc<Component>> {
    for component in tree {
        if let Some(children) = &component.children {
            if children.iter().any(|child| child.id == *child_id) {
                return Some(component);
            }
            if let Some(parent) = find_parent(children, child_id) {
                return Some(parent);
            }
        }
    }
    None
}

/// Flattens the tree into a depth-annotated pre-order sequence for
/// list-based outline views.
///
/// A pure projection: it is recomputed from scratch whenever the tree
/// reference changes and holds no state of its own.
pub fn flatten(tree: &[Arc<Component>]) -> Vec<FlatNode> {
    let mut out = Vec::new();
    flatten_into(tree, &Anchor::Root, 0, &mut out);
    out
}

fn flatten_into(
    tree: &[Arc<Component>],
    parent: &Anchor,
    depth: usize,
    out: &mut Vec<FlatNode>,
) {
    for component in tree {
        out.push(FlatNode {
            id: component.id.clone(),
            depth,
            parent: parent.clone(),
            component: Arc::clone(component),
        });
        if let Some(children) = &component.children {
            if !children.is_empty() {
                flatten_into(children, &Anchor::Node(component.id.clone()), depth + 1, out);
            }
        }
    }
}

/// Visits every node in pre-order together with its structural parent
/// (`None` at the root level).
pub fn walk<'a>(
    tree: &'a [Arc<Component>],
    visit: &mut impl FnMut(&'a Arc<Component>, Option<&'a Arc<Component>>),
) {
    fn walk_in<'a>(
        tree: &'a [Arc<Component>],
        parent: Option<&'a Arc<Component>>,
        visit: &mut impl FnMut(&'a Arc<Component>, Option<&'a Arc<Component>>),
    ) {
        for component in tree {
            visit(component, parent);
            if let Some(children) = &component.children {
                walk_in(children, Some(component), visit);
            }
        }
    }
    walk_in(tree, None, visit);
}
