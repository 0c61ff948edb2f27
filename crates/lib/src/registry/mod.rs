//! Component factory and static type registry.
//!
//! The registry is the single authority on what each [`ComponentKind`]
//! *is*: its palette metadata (display name, description, category,
//! container flag) and its default property schema. [`create_default`]
//! instantiates a brand-new node for a kind: fresh id, baseline props
//! merged from the shared trait groups, an empty children sequence for
//! container kinds. It is deterministic in shape: the same kind always
//! yields the same set of property keys.
//!
//! Default values are layered the same way for every kind: the base
//! layout/appearance group first, then the cross-cutting groups the kind
//! participates in (data binding, animation, actions, typography), then
//! the kind's own specifics on top.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::component::{
    Category, Component, ComponentId, ComponentKind, ComponentMetadata, PropValue, Props,
};

/// A palette entry: one draggable template per registered kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub label: String,
    pub description: String,
    pub category: Category,
}

/// Static metadata for a component kind.
pub fn metadata(kind: ComponentKind) -> ComponentMetadata {
    let (display_name, description) = match kind {
        ComponentKind::Row => ("Row", "Flex container for horizontal arrangement"),
        ComponentKind::Column => ("Column", "Flex container for vertical arrangement"),
        ComponentKind::Box => ("Box", "Basic container element"),
        ComponentKind::Card => ("Card", "Content card with border and shadow"),
        ComponentKind::Container => ("Container", "Width-constrained content area"),
        ComponentKind::Grid => ("Grid", "CSS-grid based layout element"),
        ComponentKind::Spacer => ("Spacer", "Empty spacing element"),
        ComponentKind::Text => ("Text", "Text element"),
        ComponentKind::Button => ("Button", "Button element"),
        ComponentKind::Image => ("Image", "Image element"),
        ComponentKind::Icon => ("Icon", "Icon element"),
        ComponentKind::Divider => ("Divider", "Separator line"),
        ComponentKind::Link => ("Link", "Hyperlink element"),
        ComponentKind::Input => ("Input", "Single-line text input"),
        ComponentKind::Checkbox => ("Checkbox", "Checkbox element"),
        ComponentKind::RadioGroup => ("Radio Group", "Group of radio buttons"),
        ComponentKind::Select => ("Select", "Dropdown selection element"),
        ComponentKind::Slider => ("Slider", "Range slider element"),
        ComponentKind::Switch => ("Switch", "Toggle switch element"),
        ComponentKind::TextArea => ("Text Area", "Multi-line text input"),
        ComponentKind::Form => ("Form", "Form container element"),
        ComponentKind::Video => ("Video", "Video player element"),
        ComponentKind::Audio => ("Audio", "Audio player element"),
        ComponentKind::Carousel => ("Carousel", "Slideshow element"),
        ComponentKind::ImageGallery => ("Image Gallery", "Grid of images"),
        ComponentKind::Tabs => ("Tabs", "Tabbed content element"),
        ComponentKind::Accordion => ("Accordion", "Collapsible content sections"),
        ComponentKind::List => ("List", "List element"),
        ComponentKind::Table => ("Table", "Table element"),
        ComponentKind::Chart => ("Chart", "Chart element"),
        ComponentKind::Map => ("Map", "Map element"),
        ComponentKind::Dialog => ("Dialog", "Modal dialog window"),
        ComponentKind::Tooltip => ("Tooltip", "Hover hint bubble"),
        ComponentKind::ProgressBar => ("Progress Bar", "Progress indicator"),
    };
    ComponentMetadata {
        kind,
        display_name: display_name.to_string(),
        description: description.to_string(),
        category: kind.category(),
        accepts_children: kind.accepts_children(),
    }
}

/// The draggable palette listing, grouped in category order.
pub fn palette_items() -> Vec<PaletteItem> {
    ComponentKind::ALL
        .iter()
        .map(|&kind| {
            let meta = metadata(kind);
            PaletteItem {
                id: kind.as_str().to_lowercase(),
                kind,
                label: meta.display_name,
                description: meta.description,
                category: meta.category,
            }
        })
        .collect()
}

/// Creates a brand-new node of the given kind.
///
/// The returned node has a freshly generated id, the kind's full default
/// property set, denormalized metadata, and (for container kinds) an
/// empty children sequence.
pub fn create_default(kind: ComponentKind) -> Component {
    Component {
        id: ComponentId::new(),
        kind,
        props: default_props(kind),
        children: kind.accepts_children().then(Vec::new),
        metadata: Some(metadata(kind)),
    }
}

/// Convenience wrapper returning the new node ready for tree insertion.
pub fn create_default_shared(kind: ComponentKind) -> Arc<Component> {
    Arc::new(create_default(kind))
}

// Shared default trait groups. Merge order matters: later groups and
// type-specific values overwrite earlier keys (e.g. Card overrides the base
// padding).

fn base_props() -> Props {
    Props::new()
        .with("width", PropValue::Null)
        .with("height", PropValue::Null)
        .with("padding", "0px")
        .with("margin", "0px")
        .with("backgroundColor", PropValue::Null)
        .with("borderRadius", "0px")
        .with("border", PropValue::Null)
        .with("boxShadow", PropValue::Null)
        .with("opacity", PropValue::Null)
        .with("visible", true)
        .with("style", PropValue::Map(Default::default()))
}

fn data_binding_props() -> Props {
    Props::new()
        .with("dataSource", PropValue::Null)
        .with("dataPath", PropValue::Null)
        .with("dataFormat", PropValue::Null)
        .with("dataBind", PropValue::Null)
        .with("dataTransform", PropValue::Null)
}

fn animation_props() -> Props {
    Props::new()
        .with("animationType", PropValue::Null)
        .with("animationDuration", PropValue::Null)
        .with("animationDelay", PropValue::Null)
        .with("animationTiming", PropValue::Null)
}

fn action_props() -> Props {
    Props::new()
        .with("onClick", PropValue::Null)
        .with("onHover", PropValue::Null)
        .with("onFocus", PropValue::Null)
        .with("onBlur", PropValue::Null)
        .with("link", PropValue::Null)
}

fn typography_props(text: &str) -> Props {
    Props::new()
        .with("text", text)
        .with("fontSize", "16px")
        .with("fontWeight", "normal")
        .with("color", "#333333")
        .with("textAlign", "left")
        .with("letterSpacing", PropValue::Null)
        .with("lineHeight", PropValue::Null)
        .with("textDecoration", PropValue::Null)
        .with("fontFamily", PropValue::Null)
        .with("textTransform", PropValue::Null)
        .with("overflow", PropValue::Null)
}

fn merged(groups: impl IntoIterator<Item = Props>) -> Props {
    let mut props = Props::new();
    for group in groups {
        props.merge(group);
    }
    props
}

fn select_option(value: &str, label: &str) -> PropValue {
    PropValue::Map(
        [
            ("value".to_string(), PropValue::from(value)),
            ("label".to_string(), PropValue::from(label)),
        ]
        .into_iter()
        .collect(),
    )
}

fn table_column(key: &str, title: &str, width: &str) -> PropValue {
    PropValue::Map(
        [
            ("key".to_string(), PropValue::from(key)),
            ("title".to_string(), PropValue::from(title)),
            ("dataType".to_string(), PropValue::from("string")),
            ("width".to_string(), PropValue::from(width)),
        ]
        .into_iter()
        .collect(),
    )
}

/// The full default property set for a kind.
///
/// This is the kind's property *schema* as far as persistence is concerned:
/// the sanitization pass fills any of these keys that are missing from a
/// node with explicit nulls before a document is written out.
pub fn default_props(kind: ComponentKind) -> Props {
    match kind {
        ComponentKind::Box => merged([base_props(), data_binding_props(), animation_props()])
            .with("padding", "10px")
            .with("backgroundColor", "transparent"),

        ComponentKind::Row => merged([base_props(), data_binding_props()])
            .with("gap", "8px")
            .with("justify", "start")
            .with("align", "center")
            .with("padding", "5px")
            .with("wrap", "wrap"),

        ComponentKind::Column => merged([base_props(), data_binding_props()])
            .with("gap", "8px")
            .with("align", "start")
            .with("justify", "start")
            .with("padding", "5px"),

        ComponentKind::Card => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("padding", "16px")
        .with("borderRadius", "8px")
        .with("border", "1px solid #e0e0e0")
        .with("borderColor", "#e0e0e0")
        .with("backgroundColor", "#ffffff")
        .with("boxShadow", "sm")
        .with("hoverable", false)
        .with("clickable", false)
        .with("headerVisible", false)
        .with("footerVisible", false),

        ComponentKind::Container => merged([base_props(), data_binding_props(), animation_props()])
            .with("maxWidth", "1200px")
            .with("centered", true)
            .with("padding", "16px"),

        ComponentKind::Grid => merged([base_props(), data_binding_props()])
            .with("columns", "1fr 1fr 1fr")
            .with("rows", "auto")
            .with("gap", "16px")
            .with("columnGap", PropValue::Null)
            .with("rowGap", PropValue::Null)
            .with("autoFlow", PropValue::Null),

        ComponentKind::Spacer => merged([base_props(), data_binding_props()])
            .with("height", "20px")
            .with("responsive", true),

        ComponentKind::Text => merged([
            base_props(),
            typography_props("New Text"),
            data_binding_props(),
            animation_props(),
        ]),

        ComponentKind::Button => merged([
            base_props(),
            action_props(),
            data_binding_props(),
            animation_props(),
        ])
        .with("label", "Click Me")
        .with("variant", "default")
        .with("size", "default")
        .with("icon", PropValue::Null)
        .with("disabled", false)
        .with("loading", false),

        ComponentKind::Image => merged([base_props(), data_binding_props(), animation_props()])
            .with("src", "https://via.placeholder.com/300x200")
            .with("alt", "Placeholder Image")
            .with("fit", "cover")
            .with("aspectRatio", PropValue::Null)
            .with("width", "300px")
            .with("height", "200px")
            .with("lazy", true)
            .with("placeholder", PropValue::Null),

        ComponentKind::Icon => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("name", "Smile")
        .with("size", "24px")
        .with("color", "#333333")
        .with("rotate", PropValue::Null)
        .with("flip", PropValue::Null),

        ComponentKind::Divider => merged([base_props(), data_binding_props(), animation_props()])
            .with("thickness", "1px")
            .with("color", "#e0e0e0")
            .with("margin", "8px 0px")
            .with("orientation", "horizontal")
            .with("dashed", false),

        ComponentKind::Link => merged([
            base_props(),
            typography_props("Clickable Link"),
            data_binding_props(),
            animation_props(),
        ])
        .with("color", "#0000ee")
        .with("textDecoration", "underline")
        .with("href", "#")
        .with("target", "_self")
        .with("download", false)
        .with("rel", PropValue::Null),

        ComponentKind::Input => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("placeholder", "Enter text...")
        .with("label", "Label")
        .with("inputType", "text")
        .with("width", "100%")
        .with("defaultValue", PropValue::Null)
        .with("required", false)
        .with("disabled", false)
        .with("validation", PropValue::Null)
        .with("errorMessage", PropValue::Null),

        ComponentKind::Checkbox => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("label", "Checkbox Label")
        .with("checked", false)
        .with("disabled", false)
        .with("required", false)
        .with("indeterminate", false),

        ComponentKind::RadioGroup => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("label", "Radio Group")
        .with(
            "options",
            PropValue::List(vec![
                select_option("option1", "Option 1"),
                select_option("option2", "Option 2"),
            ]),
        )
        .with("defaultValue", PropValue::Null)
        .with("orientation", "vertical")
        .with("required", false)
        .with("disabled", false),

        ComponentKind::Select => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("label", "Select Label")
        .with("placeholder", "Choose an option")
        .with(
            "options",
            PropValue::List(vec![
                select_option("option1", "Option 1"),
                select_option("option2", "Option 2"),
                select_option("option3", "Option 3"),
            ]),
        )
        .with("defaultValue", PropValue::Null)
        .with("required", false)
        .with("disabled", false)
        .with("multiple", false)
        .with("searchable", false)
        .with("width", "100%"),

        ComponentKind::Slider => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("min", 0)
        .with("max", 100)
        .with("step", 1)
        .with("value", 50)
        .with("showValue", true)
        .with("disabled", false)
        .with("width", "100%"),

        ComponentKind::Switch => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("label", "Switch Label")
        .with("checked", false)
        .with("disabled", false),

        ComponentKind::TextArea => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("placeholder", "Enter text...")
        .with("label", "Label")
        .with("rows", 4)
        .with("defaultValue", PropValue::Null)
        .with("required", false)
        .with("disabled", false)
        .with("width", "100%"),

        ComponentKind::Form => merged([base_props(), data_binding_props()])
            .with("gap", "12px")
            .with("padding", "10px")
            .with("submitLabel", "Submit"),

        ComponentKind::Video => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("src", "https://www.youtube.com/embed/dQw4w9WgXcQ")
        .with("controls", true)
        .with("autoplay", false)
        .with("muted", false)
        .with("loop", false)
        .with("width", "560px")
        .with("height", "315px")
        .with("poster", PropValue::Null)
        .with("startTime", PropValue::Null),

        ComponentKind::Audio => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("src", "https://example.com/sample.mp3")
        .with("controls", true)
        .with("autoplay", false)
        .with("muted", false)
        .with("loop", false),

        ComponentKind::Carousel => merged([base_props(), data_binding_props(), animation_props()])
            .with("autoplay", true)
            .with("interval", 3000)
            .with("showDots", true)
            .with("showArrows", true)
            .with("infinite", true),

        ComponentKind::ImageGallery => {
            merged([base_props(), data_binding_props(), animation_props()])
                .with("images", PropValue::List(Vec::new()))
                .with("columns", 3)
                .with("gap", "8px")
        }

        ComponentKind::Tabs => merged([base_props(), data_binding_props(), animation_props()])
            .with("activeTab", 0)
            .with("position", "top"),

        ComponentKind::Accordion => merged([base_props(), data_binding_props(), animation_props()])
            .with("multiple", false)
            .with("collapsible", true),

        ComponentKind::List => merged([base_props(), data_binding_props()])
            .with("ordered", false)
            .with("gap", "4px"),

        ComponentKind::Table => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with(
            "columns",
            PropValue::List(vec![
                table_column("column1", "Column 1", "33%"),
                table_column("column2", "Column 2", "33%"),
                table_column("column3", "Column 3", "33%"),
            ]),
        )
        .with("pagination", true)
        .with("bordered", true)
        .with("striped", false)
        .with("sortable", true)
        .with("rowSelection", false)
        .with("width", "100%"),

        ComponentKind::Chart => merged([base_props(), data_binding_props(), animation_props()])
            .with("chartType", "bar")
            .with("showLegend", true)
            .with("showGrid", true)
            .with("height", "300px")
            .with("width", "100%"),

        ComponentKind::Map => merged([base_props(), data_binding_props()])
            .with("latitude", 0.0)
            .with("longitude", 0.0)
            .with("zoom", 10)
            .with("markers", PropValue::List(Vec::new()))
            .with("width", "100%")
            .with("height", "300px"),

        ComponentKind::Dialog => merged([
            base_props(),
            data_binding_props(),
            animation_props(),
            action_props(),
        ])
        .with("title", "Dialog Title")
        .with("open", false)
        .with("modal", true)
        .with("dismissable", true),

        ComponentKind::Tooltip => merged([base_props(), data_binding_props(), animation_props()])
            .with("text", "Tooltip text")
            .with("placement", "top")
            .with("delay", PropValue::Null),

        ComponentKind::ProgressBar => {
            merged([base_props(), data_binding_props(), animation_props()])
                .with("value", 50)
                .with("max", 100)
                .with("showLabel", true)
                .with("color", "#3b82f6")
                .with("size", "md")
                .with("shape", "rounded")
                .with("animated", true)
                .with("width", "100%")
        }
    }
}
