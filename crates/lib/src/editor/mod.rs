//! Drag-and-drop reconciliation controller.
//!
//! [`Editor`] owns the canvas tree, the current selection and the state of
//! the in-flight drag gesture, and is the single mutation entry point for
//! every structural edit: palette drops, node moves, deletions and property
//! edits all funnel through it. Views (canvas, outline, property panel,
//! JSON preview) receive read-only projections and never touch the tree
//! directly.
//!
//! A gesture runs `Idle → Dragging → resolved`: [`Editor::drag_start`]
//! captures the dragged subject and snapshots a preview node for the drag
//! overlay; [`Editor::drag_end`] interprets the drop target against the
//! current tree, applies the placement rules, and either commits exactly
//! one remove/insert pair or cancels with zero observable effect. State is
//! frozen for the duration of a gesture; all mutation happens
//! synchronously inside `drag_end`.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::component::{Category, Component, ComponentId, ComponentKind, Props};
use crate::registry;
use crate::tree::{self, Anchor, FlatNode};

pub mod errors;

pub use errors::PlacementError;


/// What is being dragged: a palette template (a kind that has not yet been
/// instantiated) or an existing node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSubject {
    Palette(ComponentKind),
    Node(ComponentId),
}

/// Notice that a root placement was re-targeted into the existing root
/// layout container instead of being rejected.
#[derive(Debug, Clone)]
pub struct RedirectNotice {
    /// Id of the layout container the component was placed into.
    pub into: ComponentId,
    /// Kind of that container, for phrasing the user notice.
    pub container: ComponentKind,
}

impl std::fmt::Display for RedirectNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "component was placed inside the existing root {} container",
            self.container
        )
    }
}

/// How a drag gesture resolved.
#[derive(Debug, Clone)]
pub enum DragOutcome {
    /// A palette template was instantiated and inserted.
    Inserted {
        id: ComponentId,
        redirected: Option<RedirectNotice>,
    },
    /// An existing node was relocated, identity preserved.
    Moved {
        id: ComponentId,
        redirected: Option<RedirectNotice>,
    },
    /// Nothing changed. `reason` is present when a rule was violated and a
    /// user-facing notice should be shown; `None` for plain no-ops (no drop
    /// target, dropped on itself).
    Cancelled { reason: Option<PlacementError> },
}

impl DragOutcome {
    /// Returns true if the gesture mutated the tree.
    pub fn is_applied(&self) -> bool {
        !matches!(self, DragOutcome::Cancelled { .. })
    }

    fn cancelled(reason: PlacementError) -> Self {
        DragOutcome::Cancelled {
            reason: Some(reason),
        }
    }

    fn no_op() -> Self {
        DragOutcome::Cancelled { reason: None }
    }
}

/// Resolved landing position for a drop: the owning anchor plus insertion
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Placement {
    parent: Anchor,
    index: usize,
}

#[derive(Debug, Clone, Default)]
enum DragGesture {
    #[default]
    Idle,
    Dragging {
        subject: DragSubject,
        preview: Option<Arc<Component>>,
    },
}

/// The top-level editor controller: canvas tree + selection + gesture.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    components: Vec<Arc<Component>>,
    selected: Option<ComponentId>,
    gesture: DragGesture,
}

impl Editor {
    /// Creates an editor over an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor over an existing tree (e.g. a loaded page).
    pub fn with_components(components: Vec<Arc<Component>>) -> Self {
        Self {
            components,
            selected: None,
            gesture: DragGesture::Idle,
        }
    }

    /// The current canvas tree.
    pub fn components(&self) -> &[Arc<Component>] {
        &self.components
    }

    /// The currently selected component id, if any.
    pub fn selected(&self) -> Option<&ComponentId> {
        self.selected.as_ref()
    }

    /// Changes the selection. Passing `None` clears it.
    pub fn select(&mut self, id: Option<ComponentId>) {
        self.selected = id;
    }

    /// Returns true while a drag gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, DragGesture::Dragging { .. })
    }

    /// The preview snapshot of the node about to be placed, for the drag
    /// overlay. `None` outside a gesture or when the dragged node could not
    /// be located.
    pub fn drag_preview(&self) -> Option<&Arc<Component>> {
        match &self.gesture {
            DragGesture::Dragging { preview, .. } => preview.as_ref(),
            DragGesture::Idle => None,
        }
    }

    /// Replaces the whole tree, clearing selection and any gesture.
    ///
    /// Used by the page controller after loading a document.
    pub fn replace_components(&mut self, components: Vec<Arc<Component>>) {
        self.components = components;
        self.selected = None;
        self.gesture = DragGesture::Idle;
    }

    /// The flattened outline projection of the current tree.
    pub fn outline(&self) -> Vec<FlatNode> {
        tree::flatten(&self.components)
    }

    /// Begins a drag gesture.
    ///
    /// For a palette template the preview is a freshly instantiated default
    /// node (its id is discarded on drop; the inserted node is created
    /// anew); for an existing node it is the node itself.
    pub fn drag_start(&mut self, subject: DragSubject) -> Option<&Arc<Component>> {
        let preview = match &subject {
            DragSubject::Palette(kind) => Some(registry::create_default_shared(*kind)),
            DragSubject::Node(id) => {
                let found = tree::locate(&self.components, id).map(|loc| Arc::clone(loc.component));
                if found.is_none() {
                    debug!(%id, "drag started on a node that is not in the tree");
                }
                found
            }
        };
        self.gesture = DragGesture::Dragging { subject, preview };
        self.drag_preview()
    }

    /// Ends the in-flight drag gesture over the given drop target.
    ///
    /// `None` means the pointer was released with no valid target; the
    /// gesture cancels with no observable effect. Cancellation never rolls
    /// anything back; mutation is all-or-nothing per gesture.
    pub fn drag_end(&mut self, over: Option<Anchor>) -> DragOutcome {
        let gesture = std::mem::take(&mut self.gesture);
        let DragGesture::Dragging { subject, .. } = gesture else {
            debug!("drag_end without an active gesture");
            return DragOutcome::no_op();
        };
        let Some(over) = over else {
            debug!("drag ended with no drop target");
            return DragOutcome::no_op();
        };
        match subject {
            DragSubject::Palette(kind) => self.resolve_palette_drop(kind, &over),
            DragSubject::Node(id) => self.resolve_node_move(id, &over),
        }
    }

    /// Removes a node (and its whole subtree) from the tree.
    ///
    /// Clears the selection if the selected node was inside the removed
    /// subtree. Returns false if the id was not present.
    pub fn remove_component(&mut self, id: &ComponentId) -> bool {
        let Some(location) = tree::locate(&self.components, id) else {
            return false;
        };
        let removed = Arc::clone(location.component);
        self.components = tree::remove(&self.components, id);
        if let Some(selected) = &self.selected {
            if removed.contains(selected) {
                self.selected = None;
            }
        }
        true
    }

    /// Edits a node's properties in place (copy-on-write).
    ///
    /// Returns false if the id was not present; the closure is then never
    /// called.
    pub fn update_props(&mut self, id: &ComponentId, edit: impl FnOnce(&mut Props)) -> bool {
        if tree::locate(&self.components, id).is_none() {
            return false;
        }
        self.components = tree::update(&self.components, id, |component| edit(&mut component.props));
        true
    }

    fn resolve_palette_drop(&mut self, kind: ComponentKind, over: &Anchor) -> DragOutcome {
        let placement = match resolve_placement(&self.components, over) {
            Ok(placement) => placement,
            Err(err) => return DragOutcome::cancelled(err),
        };
        match enforce_root_cardinality(&self.components, placement, kind) {
            Ok((placement, redirected)) => {
                let node = registry::create_default_shared(kind);
                let id = node.id.clone();
                self.components =
                    tree::insert(&self.components, node, &placement.parent, placement.index);
                self.selected = Some(id.clone());
                DragOutcome::Inserted { id, redirected }
            }
            Err(err) => DragOutcome::cancelled(err),
        }
    }

    fn resolve_node_move(&mut self, id: ComponentId, over: &Anchor) -> DragOutcome {
        if let Anchor::Node(over_id) = over {
            if *over_id == id {
                debug!(%id, "dropped onto itself, nothing to move");
                return DragOutcome::no_op();
            }
        }

        let Some(location) = tree::locate(&self.components, &id) else {
            return DragOutcome::cancelled(PlacementError::SubjectVanished { id });
        };
        let moving = Arc::clone(location.component);

        // A drop target inside the dragged subtree would detach the subtree
        // from the tree and re-attach it under itself.
        if let Anchor::Node(over_id) = over {
            if moving.contains(over_id) {
                return DragOutcome::cancelled(PlacementError::CycleDetected {
                    id,
                    target: over_id.clone(),
                });
            }
        }

        // Placement and cardinality are evaluated against the tree with the
        // dragged node taken out, which is the tree the insert will run on.
        let pruned = tree::remove(&self.components, &id);
        let placement = match resolve_placement(&pruned, over) {
            Ok(placement) => placement,
            Err(err) => return DragOutcome::cancelled(err),
        };
        match enforce_root_cardinality(&pruned, placement, moving.kind) {
            Ok((placement, redirected)) => {
                self.components = tree::insert(&pruned, moving, &placement.parent, placement.index);
                DragOutcome::Moved { id, redirected }
            }
            Err(err) => DragOutcome::cancelled(err),
        }
    }
}

/// Computes the landing position for a drop target.
///
/// Dropping on the root appends at the end of the root sequence. Dropping
/// *onto* a layout container appends inside it as the last child. Dropping
/// onto anything else inserts immediately after the hovered node in its
/// owning sequence (its parent's children, or the root).
fn resolve_placement(
    components: &[Arc<Component>],
    over: &Anchor,
) -> Result<Placement, PlacementError> {
    let over_id = match over {
        Anchor::Root => {
            return Ok(Placement {
                parent: Anchor::Root,
                index: components.len(),
            });
        }
        Anchor::Node(id) => id,
    };

    let Some(location) = tree::locate(components, over_id) else {
        warn!(target = %over_id, "drop target not found in the tree");
        return Err(PlacementError::TargetVanished {
            target: over_id.clone(),
        });
    };

    let over_component = location.component;
    if over_component.kind.is_layout_container() {
        if let Some(children) = &over_component.children {
            return Ok(Placement {
                parent: Anchor::Node(over_id.clone()),
                index: children.len(),
            });
        }
    }

    match tree::find_parent(components, over_id) {
        Some(parent) => {
            let siblings = parent.child_nodes();
            let index = siblings
                .iter()
                .position(|c| c.id == *over_id)
                .map(|i| i + 1)
                .unwrap_or(siblings.len());
            Ok(Placement {
                parent: Anchor::Node(parent.id.clone()),
                index,
            })
        }
        // The hovered node sits at the canvas root.
        None => Ok(Placement {
            parent: Anchor::Root,
            index: location.index + 1,
        }),
    }
}

/// A kind that counts toward the one-layout-per-root rule: a
/// layout-category container. Spacer is layout but owns no children and is
/// exempt.
fn is_root_layout_kind(kind: ComponentKind) -> bool {
    kind.category() == Category::Layout && kind.accepts_children()
}

/// Applies the root-cardinality rule to a computed placement.
///
/// Placing a second layout container at the root is rejected. Placing a
/// non-layout component at the root while a layout container occupies it is
/// redirected into that container as its last child, with a notice.
/// Placements that do not target the root pass through untouched.
fn enforce_root_cardinality(
    root: &[Arc<Component>],
    placement: Placement,
    kind: ComponentKind,
) -> Result<(Placement, Option<RedirectNotice>), PlacementError> {
    if !placement.parent.is_root() {
        return Ok((placement, None));
    }

    let Some(root_layout) = root.iter().find(|c| is_root_layout_kind(c.kind)) else {
        return Ok((placement, None));
    };

    if is_root_layout_kind(kind) {
        return Err(PlacementError::RootLayoutExclusive {
            existing: root_layout.kind,
            attempted: kind,
        });
    }

    let index = root_layout.child_nodes().len();
    let notice = RedirectNotice {
        into: root_layout.id.clone(),
        container: root_layout.kind,
    };
    debug!(
        into = %notice.into,
        container = %notice.container,
        "root placement redirected into the existing root layout container"
    );
    Ok((
        Placement {
            parent: Anchor::Node(root_layout.id.clone()),
            index,
        },
        Some(notice),
    ))
}
