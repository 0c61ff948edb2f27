use std::sync::Arc;

use pagewright::component::{Component, ComponentId, ComponentKind};
use pagewright::editor::{DragOutcome, DragSubject, Editor};
use pagewright::registry;
use pagewright::tree::Anchor;

/// A default leaf or container node of the given kind.
pub fn node(kind: ComponentKind) -> Arc<Component> {
    Arc::new(registry::create_default(kind))
}

/// A container node of the given kind holding the given children.
pub fn container(kind: ComponentKind, children: Vec<Arc<Component>>) -> Arc<Component> {
    let mut component = registry::create_default(kind);
    assert!(
        component.children.is_some(),
        "{kind} is not a container kind"
    );
    component.children = Some(children);
    Arc::new(component)
}

/// Every id in the tree, pre-order.
pub fn all_ids(tree: &[Arc<Component>]) -> Vec<ComponentId> {
    let mut ids = Vec::new();
    pagewright::tree::walk(tree, &mut |component, _| ids.push(component.id.clone()));
    ids
}

/// Runs a full palette drag gesture against the editor.
pub fn drop_palette(editor: &mut Editor, kind: ComponentKind, over: Anchor) -> DragOutcome {
    editor.drag_start(DragSubject::Palette(kind));
    editor.drag_end(Some(over))
}

/// Runs a full node-move drag gesture against the editor.
pub fn move_node(editor: &mut Editor, id: &ComponentId, over: Anchor) -> DragOutcome {
    editor.drag_start(DragSubject::Node(id.clone()));
    editor.drag_end(Some(over))
}
