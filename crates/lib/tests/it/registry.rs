//! Factory and static registry guarantees.

use std::collections::HashSet;

use pagewright::component::{Category, ComponentKind};
use pagewright::registry;

#[test]
fn children_slot_agrees_with_container_flag_for_every_kind() {
    for kind in ComponentKind::ALL {
        let component = registry::create_default(kind);
        assert_eq!(
            component.children.is_some(),
            kind.accepts_children(),
            "children slot disagrees with container flag for {kind}"
        );
        if let Some(children) = &component.children {
            assert!(children.is_empty());
        }
    }
}

#[test]
fn factory_is_deterministic_in_shape_but_not_in_id() {
    for kind in ComponentKind::ALL {
        let first = registry::create_default(kind);
        let second = registry::create_default(kind);
        assert_ne!(first.id, second.id);
        let first_keys: Vec<_> = first.props.keys().collect();
        let second_keys: Vec<_> = second.props.keys().collect();
        assert_eq!(first_keys, second_keys, "unstable shape for {kind}");
    }
}

#[test]
fn every_kind_carries_the_base_trait_group() {
    for kind in ComponentKind::ALL {
        let component = registry::create_default(kind);
        for key in ["width", "height", "padding", "margin", "visible", "style"] {
            assert!(
                component.props.contains_key(key),
                "{kind} is missing base prop {key}"
            );
        }
        for key in ["dataSource", "dataPath", "dataBind"] {
            assert!(
                component.props.contains_key(key),
                "{kind} is missing data binding prop {key}"
            );
        }
    }
}

#[test]
fn metadata_is_derived_from_the_kind() {
    for kind in ComponentKind::ALL {
        let meta = registry::metadata(kind);
        assert_eq!(meta.kind, kind);
        assert_eq!(meta.category, kind.category());
        assert_eq!(meta.accepts_children, kind.accepts_children());
        assert!(!meta.display_name.is_empty());
        assert!(!meta.description.is_empty());

        let component = registry::create_default(kind);
        assert_eq!(component.metadata.as_ref(), Some(&meta));
    }
}

#[test]
fn type_specific_defaults_match_the_published_schema() {
    let text = registry::create_default(ComponentKind::Text);
    assert_eq!(text.props.get("text").unwrap(), "New Text");
    assert_eq!(text.props.get("fontSize").unwrap(), "16px");

    let button = registry::create_default(ComponentKind::Button);
    assert_eq!(button.props.get("label").unwrap(), "Click Me");
    assert_eq!(button.props.get("variant").unwrap(), "default");

    let card = registry::create_default(ComponentKind::Card);
    assert_eq!(card.props.get("padding").unwrap(), "16px");
    assert_eq!(card.props.get("backgroundColor").unwrap(), "#ffffff");

    let row = registry::create_default(ComponentKind::Row);
    assert_eq!(row.props.get("gap").unwrap(), "8px");
    assert_eq!(row.props.get("wrap").unwrap(), "wrap");

    let select = registry::create_default(ComponentKind::Select);
    assert_eq!(select.props.get("options").unwrap().as_list().unwrap().len(), 3);
}

#[test]
fn kind_tags_round_trip_through_strings() {
    for kind in ComponentKind::ALL {
        let parsed: ComponentKind = kind.as_str().parse().unwrap();
        assert_eq!(parsed, kind);
    }
    assert!("Widget".parse::<ComponentKind>().is_err());
}

#[test]
fn palette_lists_every_kind_once_in_category_order() {
    let items = registry::palette_items();
    assert_eq!(items.len(), ComponentKind::ALL.len());

    let ids: HashSet<_> = items.iter().map(|item| item.id.clone()).collect();
    assert_eq!(ids.len(), items.len());

    // Grouped by category in display order.
    let category_rank = |category: Category| {
        Category::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap()
    };
    let ranks: Vec<_> = items
        .iter()
        .map(|item| category_rank(item.category))
        .collect();
    let mut sorted = ranks.clone();
    sorted.sort_unstable();
    assert_eq!(ranks, sorted);

    for item in &items {
        assert_eq!(item.id, item.kind.as_str().to_lowercase());
        assert_eq!(item.category, item.kind.category());
    }
}

#[test]
fn layout_container_set_is_the_minimal_four() {
    let layout_containers: Vec<_> = ComponentKind::ALL
        .iter()
        .filter(|kind| kind.is_layout_container())
        .collect();
    assert_eq!(
        layout_containers,
        vec![
            &ComponentKind::Row,
            &ComponentKind::Column,
            &ComponentKind::Box,
            &ComponentKind::Card,
        ]
    );
    // Every layout container is also a plain container.
    assert!(layout_containers.iter().all(|kind| kind.accepts_children()));
}
