//! Location-engine properties over whole edit sequences.

use std::collections::HashSet;
use std::sync::Arc;

use pagewright::component::{ComponentId, ComponentKind};
use pagewright::tree::{self, Anchor};

use crate::helpers::{container, node};

#[test]
fn ids_stay_unique_across_edit_sequences() {
    let text = node(ComponentKind::Text);
    let text_id = text.id.clone();
    let card = container(ComponentKind::Card, vec![text]);
    let card_id = card.id.clone();
    let mut tree = vec![container(ComponentKind::Row, vec![card])];

    // Shuffle the card around a few times, then pull the text out next to it.
    tree = tree::remove(&tree, &card_id);
    let card = container(ComponentKind::Card, vec![node(ComponentKind::Button)]);
    let card_id = card.id.clone();
    tree = tree::insert(&tree, card, &Anchor::Node(tree[0].id.clone()), 0);
    tree = tree::insert(
        &tree,
        node(ComponentKind::Divider),
        &Anchor::Node(card_id),
        5,
    );

    let ids: Vec<ComponentId> = crate::helpers::all_ids(&tree);
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(ids.len(), unique.len());
    // The detached text is gone for good.
    assert!(tree::locate(&tree, &text_id).is_none());
}

#[test]
fn every_node_has_exactly_one_owner() {
    let tree = vec![container(
        ComponentKind::Column,
        vec![
            container(
                ComponentKind::Card,
                vec![node(ComponentKind::Text), node(ComponentKind::Button)],
            ),
            node(ComponentKind::Divider),
        ],
    )];

    // Walking the tree visits each id exactly once, and locate agrees on a
    // single owning slice for each.
    let ids = crate::helpers::all_ids(&tree);
    let unique: HashSet<_> = ids.iter().cloned().collect();
    assert_eq!(ids.len(), unique.len());
    for id in &ids {
        let location = tree::locate(&tree, id).unwrap();
        assert_eq!(location.owner[location.index].id, *id);
    }
}

#[test]
fn deep_removal_shares_every_untouched_branch() {
    let deep_leaf = node(ComponentKind::Text);
    let deep_leaf_id = deep_leaf.id.clone();
    let inner_card = container(ComponentKind::Card, vec![deep_leaf]);
    let bystander_box = container(ComponentKind::Box, vec![node(ComponentKind::Icon)]);
    let column = container(
        ComponentKind::Column,
        vec![inner_card, Arc::clone(&bystander_box)],
    );
    let other_root = node(ComponentKind::Divider);
    let tree = vec![
        container(ComponentKind::Row, vec![column]),
        Arc::clone(&other_root),
    ];

    let after = tree::remove(&tree, &deep_leaf_id);

    // Rebuilt path: root row -> column -> card. Shared: everything else.
    assert!(!Arc::ptr_eq(&after[0], &tree[0]));
    assert!(Arc::ptr_eq(&after[1], &other_root));
    let new_column = &after[0].child_nodes()[0];
    assert!(Arc::ptr_eq(&new_column.child_nodes()[1], &bystander_box));
    assert_eq!(new_column.child_nodes()[0].child_nodes().len(), 0);
}

#[test]
fn insert_clamps_past_the_end_and_keeps_order() {
    let a = node(ComponentKind::Text);
    let b = node(ComponentKind::Button);
    let a_id = a.id.clone();
    let b_id = b.id.clone();
    let mut tree = vec![a];

    tree = tree::insert(&tree, b, &Anchor::Root, usize::MAX);
    let middle = node(ComponentKind::Divider);
    let middle_id = middle.id.clone();
    tree = tree::insert(&tree, middle, &Anchor::Root, 1);

    let order: Vec<ComponentId> = tree.iter().map(|c| c.id.clone()).collect();
    assert_eq!(order, vec![a_id, middle_id, b_id]);
}

#[test]
fn remove_insert_inverse_restores_structural_equality() {
    let tree = vec![container(
        ComponentKind::Row,
        vec![
            node(ComponentKind::Text),
            container(ComponentKind::Card, vec![node(ComponentKind::Image)]),
            node(ComponentKind::Button),
        ],
    )];

    for id in crate::helpers::all_ids(&tree) {
        if id == tree[0].id {
            continue; // the root row has no parent to re-insert under
        }
        let location = tree::locate(&tree, &id).unwrap();
        let snapshot = Arc::clone(location.component);
        let index = location.index;
        let parent = pagewright::tree::find_parent(&tree, &id)
            .map(|p| Anchor::Node(p.id.clone()))
            .unwrap_or(Anchor::Root);

        let without = tree::remove(&tree, &id);
        let restored = tree::insert(&without, snapshot, &parent, index);
        assert_eq!(restored, tree, "round trip failed for {id}");
    }
}

#[test]
fn update_preserves_sibling_identity_at_every_level() {
    let target = node(ComponentKind::Text);
    let target_id = target.id.clone();
    let sibling_leaf = node(ComponentKind::Icon);
    let card = container(ComponentKind::Card, vec![target, Arc::clone(&sibling_leaf)]);
    let sibling_branch = container(ComponentKind::Box, vec![node(ComponentKind::Button)]);
    let tree = vec![container(
        ComponentKind::Row,
        vec![card, Arc::clone(&sibling_branch)],
    )];

    let after = tree::update(&tree, &target_id, |component| {
        component.props.set("fontWeight", "bold");
    });

    let row_children = after[0].child_nodes();
    assert!(Arc::ptr_eq(&row_children[1], &sibling_branch));
    assert!(Arc::ptr_eq(&row_children[0].child_nodes()[1], &sibling_leaf));
    let edited = tree::locate(&after, &target_id).unwrap();
    assert_eq!(edited.component.props.get("fontWeight").unwrap(), "bold");
    // The original tree version still shows the old value.
    let original = tree::locate(&tree, &target_id).unwrap();
    assert_eq!(original.component.props.get("fontWeight").unwrap(), "normal");
}
