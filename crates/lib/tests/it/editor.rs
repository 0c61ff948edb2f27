//! End-to-end controller flows: gestures composed into editing sessions.

use std::sync::Arc;

use pagewright::component::ComponentKind;
use pagewright::editor::{DragOutcome, DragSubject, Editor, PlacementError};
use pagewright::tree::Anchor;

use crate::helpers::{drop_palette, move_node};

/// Builds the canonical small page: Row at the root holding Text, Button
/// and a Card with an Image inside.
fn build_page(editor: &mut Editor) {
    drop_palette(editor, ComponentKind::Row, Anchor::Root);
    let row_id = editor.components()[0].id.clone();
    drop_palette(editor, ComponentKind::Text, Anchor::Node(row_id.clone()));
    drop_palette(editor, ComponentKind::Button, Anchor::Node(row_id.clone()));
    drop_palette(editor, ComponentKind::Card, Anchor::Node(row_id.clone()));
    let card_id = editor.components()[0].child_nodes()[2].id.clone();
    drop_palette(editor, ComponentKind::Image, Anchor::Node(card_id));
}

#[test]
fn a_full_editing_session_keeps_the_tree_consistent() {
    let mut editor = Editor::new();
    build_page(&mut editor);

    let row = &editor.components()[0];
    assert_eq!(row.child_nodes().len(), 3);
    let card_id = row.child_nodes()[2].id.clone();
    let image = Arc::clone(&row.child_nodes()[2].child_nodes()[0]);

    // Pull the image out of the card and drop it onto the text, landing it
    // right after the text among the row's children.
    let text_id = row.child_nodes()[0].id.clone();
    let outcome = move_node(&mut editor, &image.id, Anchor::Node(text_id));
    assert!(matches!(outcome, DragOutcome::Moved { .. }));

    let row = &editor.components()[0];
    assert_eq!(row.child_nodes().len(), 4);
    assert!(Arc::ptr_eq(&row.child_nodes()[1], &image));
    let card = row
        .child_nodes()
        .iter()
        .find(|c| c.id == card_id)
        .unwrap();
    assert_eq!(card.child_nodes().len(), 0);
}

#[test]
fn moving_a_subtree_keeps_descendant_identity() {
    let mut editor = Editor::new();
    drop_palette(&mut editor, ComponentKind::Column, Anchor::Root);
    let column_id = editor.components()[0].id.clone();
    drop_palette(&mut editor, ComponentKind::Card, Anchor::Node(column_id.clone()));
    drop_palette(&mut editor, ComponentKind::Box, Anchor::Node(column_id));
    let card_id = editor.components()[0].child_nodes()[0].id.clone();
    drop_palette(&mut editor, ComponentKind::Text, Anchor::Node(card_id.clone()));

    let card = Arc::clone(&editor.components()[0].child_nodes()[0]);
    let box_id = editor.components()[0].child_nodes()[1].id.clone();

    // Drop the populated card into the box.
    let outcome = move_node(&mut editor, &card_id, Anchor::Node(box_id));
    assert!(matches!(outcome, DragOutcome::Moved { .. }));

    let column = &editor.components()[0];
    assert_eq!(column.child_nodes().len(), 1);
    let relocated = &column.child_nodes()[0].child_nodes()[0];
    // The whole card subtree moved by reference, text included.
    assert!(Arc::ptr_eq(relocated, &card));
}

#[test]
fn cancelled_gestures_never_change_the_tree_reference() {
    let mut editor = Editor::new();
    build_page(&mut editor);
    let before: Vec<_> = editor.components().to_vec();

    // Self-drop.
    let row_id = editor.components()[0].id.clone();
    move_node(&mut editor, &row_id, Anchor::Node(row_id.clone()));
    // Cycle.
    let card_id = editor.components()[0].child_nodes()[2].id.clone();
    let image_id = editor.components()[0].child_nodes()[2].child_nodes()[0]
        .id
        .clone();
    move_node(&mut editor, &card_id, Anchor::Node(image_id));
    // Released into nowhere.
    editor.drag_start(DragSubject::Palette(ComponentKind::Dialog));
    editor.drag_end(None);
    // Second layout at root.
    drop_palette(&mut editor, ComponentKind::Grid, Anchor::Root);

    assert_eq!(editor.components().len(), before.len());
    for (now, then) in editor.components().iter().zip(before.iter()) {
        assert!(Arc::ptr_eq(now, then));
    }
}

#[test]
fn grid_and_container_count_toward_root_cardinality() {
    let mut editor = Editor::new();
    let outcome = drop_palette(&mut editor, ComponentKind::Grid, Anchor::Root);
    assert!(outcome.is_applied());

    let outcome = drop_palette(&mut editor, ComponentKind::Container, Anchor::Root);
    assert!(matches!(
        outcome,
        DragOutcome::Cancelled {
            reason: Some(PlacementError::RootLayoutExclusive { .. })
        }
    ));
}

#[test]
fn spacer_is_layout_but_not_root_exclusive() {
    // Spacer has no children capability, so it neither blocks the root nor
    // attracts redirected placements.
    let mut editor = Editor::new();
    drop_palette(&mut editor, ComponentKind::Spacer, Anchor::Root);
    let outcome = drop_palette(&mut editor, ComponentKind::Row, Anchor::Root);
    assert!(outcome.is_applied());
    assert_eq!(editor.components().len(), 2);
}

#[test]
fn dropping_onto_non_layout_containers_inserts_beside_them() {
    // Carousel can own children, but hover-dropping onto it places the new
    // component after it, not inside it.
    let mut editor = Editor::new();
    drop_palette(&mut editor, ComponentKind::Row, Anchor::Root);
    let row_id = editor.components()[0].id.clone();
    drop_palette(&mut editor, ComponentKind::Carousel, Anchor::Node(row_id));
    let carousel_id = editor.components()[0].child_nodes()[0].id.clone();

    drop_palette(&mut editor, ComponentKind::Text, Anchor::Node(carousel_id));

    let row = &editor.components()[0];
    assert_eq!(row.child_nodes().len(), 2);
    assert_eq!(row.child_nodes()[0].kind, ComponentKind::Carousel);
    assert_eq!(row.child_nodes()[0].child_nodes().len(), 0);
    assert_eq!(row.child_nodes()[1].kind, ComponentKind::Text);
}

#[test]
fn nested_placements_are_never_redirected() {
    let mut editor = Editor::new();
    drop_palette(&mut editor, ComponentKind::Row, Anchor::Root);
    let row_id = editor.components()[0].id.clone();
    drop_palette(&mut editor, ComponentKind::Card, Anchor::Node(row_id));
    let card_id = editor.components()[0].child_nodes()[0].id.clone();

    // Dropping into the nested card targets the card, not the root, so the
    // root-cardinality machinery must stay out of the way.
    let outcome = drop_palette(&mut editor, ComponentKind::Text, Anchor::Node(card_id));
    let DragOutcome::Inserted { redirected, .. } = outcome else {
        panic!("expected insert");
    };
    assert!(redirected.is_none());
    let card = &editor.components()[0].child_nodes()[0];
    assert_eq!(card.child_nodes().len(), 1);
}

#[test]
fn drag_end_without_gesture_is_a_quiet_no_op() {
    let mut editor = Editor::new();
    let outcome = editor.drag_end(Some(Anchor::Root));
    assert!(matches!(outcome, DragOutcome::Cancelled { reason: None }));
    assert!(editor.components().is_empty());
}

#[test]
fn moving_a_vanished_node_cancels_with_not_found() {
    let mut editor = Editor::new();
    drop_palette(&mut editor, ComponentKind::Box, Anchor::Root);
    let ghost = pagewright::ComponentId::new();

    let outcome = move_node(&mut editor, &ghost, Anchor::Root);
    let DragOutcome::Cancelled { reason: Some(err) } = outcome else {
        panic!("expected a cancellation with a reason");
    };
    assert!(err.is_not_found());
}
