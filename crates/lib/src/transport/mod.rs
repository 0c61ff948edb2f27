//! Serialization bridge between the in-memory tree and the transport DTO.
//!
//! The rendering SDK consumes a plain JSON tree: `{ id, type, props,
//! children?, metadata? }`, recursive, with `children` omitted (not an
//! empty array) for leaf kinds. [`ComponentDto`] is that shape;
//! [`to_transport`] and [`from_transport`] map between it and the typed
//! [`Component`] model without ever mutating the source tree.
//!
//! Decoding is where foreign data enters the engine, so it is the one place
//! that keeps the permissive unknown-type behavior: an unrecognized `type`
//! tag produces a flagged Text node instead of failing the whole document.
//!
//! [`sanitize_for_persistence`] is the pre-save normalization pass: the
//! document store cannot represent an absent value, so every property key
//! of a node's schema that the editor dropped is written back as an
//! explicit null. Ids, types and tree structure are never altered.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::{debug, warn};

use crate::component::{Component, ComponentId, ComponentKind, PropValue, Props};
use crate::registry;

pub mod errors;

pub use errors::TransportError;

/// Transport-safe representation of a component node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDto {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub props: JsonMap<String, JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ComponentDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,
}

impl ComponentDto {
    /// Serializes this DTO to a JSON string.
    pub fn to_json(&self) -> Result<String, TransportError> {
        serde_json::to_string(self).map_err(|e| TransportError::EncodeFailed {
            reason: e.to_string(),
        })
    }

    /// Parses a DTO from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, TransportError> {
        serde_json::from_str(json).map_err(|e| TransportError::DecodeFailed {
            reason: e.to_string(),
        })
    }
}

/// Maps a component (and its subtree) to the transport DTO.
pub fn to_transport(component: &Component) -> ComponentDto {
    ComponentDto {
        id: component.id.to_string(),
        kind: component.kind.as_str().to_string(),
        props: component
            .props
            .iter()
            .map(|(key, value)| (key.clone(), prop_to_json(value)))
            .collect(),
        children: component
            .children
            .as_ref()
            .map(|children| children.iter().map(|child| to_transport(child)).collect()),
        metadata: component.metadata.as_ref().map(metadata_to_json),
    }
}

/// Maps a whole tree to transport DTOs.
pub fn tree_to_transport(tree: &[Arc<Component>]) -> Vec<ComponentDto> {
    tree.iter().map(|component| to_transport(component)).collect()
}

/// Rebuilds a component from a transport DTO.
///
/// A missing id gets a freshly generated one. An unrecognized type tag
/// falls back to a Text node whose content names the unhandled tag; its
/// foreign props and children are dropped, since they belong to a schema
/// this engine does not know.
pub fn from_transport(dto: &ComponentDto) -> Component {
    let id = if dto.id.is_empty() {
        debug!("transport DTO without id, generating a fresh one");
        ComponentId::new()
    } else {
        ComponentId::from(dto.id.as_str())
    };

    let kind = match dto.kind.parse::<ComponentKind>() {
        Ok(kind) => kind,
        Err(unknown) => {
            warn!(tag = %unknown.0, "unhandled component type tag, substituting a Text node");
            return unhandled_fallback(id, &unknown.0);
        }
    };

    let props: Props = dto
        .props
        .iter()
        .map(|(key, value)| (key.clone(), json_to_prop(value)))
        .collect();

    let mut children = dto
        .children
        .as_ref()
        .map(|children| children.iter().map(from_transport).map(Arc::new).collect());

    // Re-establish the container agreement for documents written by other
    // tooling: containers always own a sequence, leaves never do.
    if kind.accepts_children() {
        children = children.or_else(|| Some(Vec::new()));
    } else if children.is_some() {
        warn!(%id, kind = %kind, "leaf kind carried children in transport, dropping them");
        children = None;
    }

    let metadata = match &dto.metadata {
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(metadata) => Some(metadata),
            Err(err) => {
                debug!(%id, error = %err, "malformed metadata in transport, reconstructing");
                Some(registry::metadata(kind))
            }
        },
        None => None,
    };

    Component {
        id,
        kind,
        props,
        children,
        metadata,
    }
}

/// Rebuilds a whole tree from transport DTOs.
pub fn tree_from_transport(dtos: &[ComponentDto]) -> Vec<Arc<Component>> {
    dtos.iter().map(from_transport).map(Arc::new).collect()
}

fn unhandled_fallback(id: ComponentId, tag: &str) -> Component {
    let mut node = registry::create_default(ComponentKind::Text);
    node.id = id;
    node.props.set("text", format!("Unhandled: {tag}"));
    node.props.set("fontSize", "14px");
    node.props.set("color", "#dc2626");
    node
}

/// Normalizes a tree for persistence: every key of a node's default
/// property schema that is missing from the node is written as an explicit
/// null.
///
/// Structural sharing is preserved: nodes whose props are already
/// complete and whose subtrees are untouched keep their `Arc` identity.
pub fn sanitize_for_persistence(tree: &[Arc<Component>]) -> Vec<Arc<Component>> {
    tree.iter().map(sanitize_node).collect()
}

fn sanitize_node(node: &Arc<Component>) -> Arc<Component> {
    let schema = registry::default_props(node.kind);
    let missing: Vec<&String> = schema
        .keys()
        .filter(|key| !node.props.contains_key(key))
        .collect();

    let new_children = node
        .children
        .as_ref()
        .map(|children| children.iter().map(sanitize_node).collect::<Vec<_>>());
    let children_changed = match (&new_children, &node.children) {
        (Some(new), Some(old)) => new
            .iter()
            .zip(old.iter())
            .any(|(a, b)| !Arc::ptr_eq(a, b)),
        _ => false,
    };

    if missing.is_empty() && !children_changed {
        return Arc::clone(node);
    }

    let mut copy = Component::clone(node);
    for key in missing {
        copy.props.set(key.clone(), PropValue::Null);
    }
    if let Some(children) = new_children {
        copy.children = Some(children);
    }
    Arc::new(copy)
}

fn prop_to_json(value: &PropValue) -> JsonValue {
    match value {
        PropValue::Null => JsonValue::Null,
        PropValue::Bool(b) => JsonValue::Bool(*b),
        PropValue::Int(n) => JsonValue::Number((*n).into()),
        PropValue::Float(n) => serde_json::Number::from_f64(*n)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        PropValue::Text(s) => JsonValue::String(s.clone()),
        PropValue::List(list) => JsonValue::Array(list.iter().map(prop_to_json).collect()),
        PropValue::Map(map) => JsonValue::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), prop_to_json(value)))
                .collect(),
        ),
    }
}

fn json_to_prop(value: &JsonValue) -> PropValue {
    match value {
        JsonValue::Null => PropValue::Null,
        JsonValue::Bool(b) => PropValue::Bool(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => PropValue::Int(i),
            None => PropValue::Float(n.as_f64().unwrap_or(0.0)),
        },
        JsonValue::String(s) => PropValue::Text(s.clone()),
        JsonValue::Array(list) => PropValue::List(list.iter().map(json_to_prop).collect()),
        JsonValue::Object(map) => PropValue::Map(
            map.iter()
                .map(|(key, value)| (key.clone(), json_to_prop(value)))
                .collect(),
        ),
    }
}

fn metadata_to_json(metadata: &crate::component::ComponentMetadata) -> JsonValue {
    serde_json::json!({
        "type": metadata.kind.as_str(),
        "displayName": metadata.display_name,
        "description": metadata.description,
        "category": metadata.category.as_str(),
        "acceptsChildren": metadata.accepts_children,
    })
}
