//! The closed set of component types the editor understands.
//!
//! `ComponentKind` is the discriminant of the whole data model: it decides
//! which property schema a node carries, whether the node may own children,
//! and which palette category it is listed under. Keeping it a closed enum
//! means every `match` over kinds is checked by the compiler, so adding a
//! kind is a compile-time-visible change across the factory, the transport
//! bridge and the placement rules.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Palette category a component kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Layout,
    Basic,
    Form,
    Media,
    Advanced,
}

impl Category {
    /// All categories in palette display order.
    pub const ALL: [Category; 5] = [
        Category::Layout,
        Category::Basic,
        Category::Form,
        Category::Media,
        Category::Advanced,
    ];

    /// Lowercase name used on the wire and in palette group headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Layout => "layout",
            Category::Basic => "basic",
            Category::Form => "form",
            Category::Media => "media",
            Category::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized component type tag.
#[derive(Debug, Clone, Error)]
#[error("unknown component type tag: {0}")]
pub struct UnknownKind(pub String);

/// Type tag of a component node.
///
/// The variant name is the wire tag (`"Row"`, `"ProgressBar"`, ...), which
/// is what the serialized document and the palette both use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    // Layout
    Row,
    Column,
    Box,
    Card,
    Container,
    Grid,
    Spacer,
    // Basic
    Text,
    Button,
    Image,
    Icon,
    Divider,
    Link,
    // Form
    Input,
    Checkbox,
    RadioGroup,
    Select,
    Slider,
    Switch,
    TextArea,
    Form,
    // Media
    Video,
    Audio,
    Carousel,
    ImageGallery,
    // Advanced
    Tabs,
    Accordion,
    List,
    Table,
    Chart,
    Map,
    Dialog,
    Tooltip,
    ProgressBar,
}

impl ComponentKind {
    /// Every kind, grouped in palette category order.
    pub const ALL: [ComponentKind; 34] = [
        ComponentKind::Row,
        ComponentKind::Column,
        ComponentKind::Box,
        ComponentKind::Card,
        ComponentKind::Container,
        ComponentKind::Grid,
        ComponentKind::Spacer,
        ComponentKind::Text,
        ComponentKind::Button,
        ComponentKind::Image,
        ComponentKind::Icon,
        ComponentKind::Divider,
        ComponentKind::Link,
        ComponentKind::Input,
        ComponentKind::Checkbox,
        ComponentKind::RadioGroup,
        ComponentKind::Select,
        ComponentKind::Slider,
        ComponentKind::Switch,
        ComponentKind::TextArea,
        ComponentKind::Form,
        ComponentKind::Video,
        ComponentKind::Audio,
        ComponentKind::Carousel,
        ComponentKind::ImageGallery,
        ComponentKind::Tabs,
        ComponentKind::Accordion,
        ComponentKind::List,
        ComponentKind::Table,
        ComponentKind::Chart,
        ComponentKind::Map,
        ComponentKind::Dialog,
        ComponentKind::Tooltip,
        ComponentKind::ProgressBar,
    ];

    /// The wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Row => "Row",
            ComponentKind::Column => "Column",
            ComponentKind::Box => "Box",
            ComponentKind::Card => "Card",
            ComponentKind::Container => "Container",
            ComponentKind::Grid => "Grid",
            ComponentKind::Spacer => "Spacer",
            ComponentKind::Text => "Text",
            ComponentKind::Button => "Button",
            ComponentKind::Image => "Image",
            ComponentKind::Icon => "Icon",
            ComponentKind::Divider => "Divider",
            ComponentKind::Link => "Link",
            ComponentKind::Input => "Input",
            ComponentKind::Checkbox => "Checkbox",
            ComponentKind::RadioGroup => "RadioGroup",
            ComponentKind::Select => "Select",
            ComponentKind::Slider => "Slider",
            ComponentKind::Switch => "Switch",
            ComponentKind::TextArea => "TextArea",
            ComponentKind::Form => "Form",
            ComponentKind::Video => "Video",
            ComponentKind::Audio => "Audio",
            ComponentKind::Carousel => "Carousel",
            ComponentKind::ImageGallery => "ImageGallery",
            ComponentKind::Tabs => "Tabs",
            ComponentKind::Accordion => "Accordion",
            ComponentKind::List => "List",
            ComponentKind::Table => "Table",
            ComponentKind::Chart => "Chart",
            ComponentKind::Map => "Map",
            ComponentKind::Dialog => "Dialog",
            ComponentKind::Tooltip => "Tooltip",
            ComponentKind::ProgressBar => "ProgressBar",
        }
    }

    /// Palette category this kind is listed under.
    pub fn category(&self) -> Category {
        match self {
            ComponentKind::Row
            | ComponentKind::Column
            | ComponentKind::Box
            | ComponentKind::Card
            | ComponentKind::Container
            | ComponentKind::Grid
            | ComponentKind::Spacer => Category::Layout,
            ComponentKind::Text
            | ComponentKind::Button
            | ComponentKind::Image
            | ComponentKind::Icon
            | ComponentKind::Divider
            | ComponentKind::Link => Category::Basic,
            ComponentKind::Input
            | ComponentKind::Checkbox
            | ComponentKind::RadioGroup
            | ComponentKind::Select
            | ComponentKind::Slider
            | ComponentKind::Switch
            | ComponentKind::TextArea
            | ComponentKind::Form => Category::Form,
            ComponentKind::Video
            | ComponentKind::Audio
            | ComponentKind::Carousel
            | ComponentKind::ImageGallery => Category::Media,
            ComponentKind::Tabs
            | ComponentKind::Accordion
            | ComponentKind::List
            | ComponentKind::Table
            | ComponentKind::Chart
            | ComponentKind::Map
            | ComponentKind::Dialog
            | ComponentKind::Tooltip
            | ComponentKind::ProgressBar => Category::Advanced,
        }
    }

    /// Whether nodes of this kind own a `children` sequence.
    ///
    /// This is the registry-level container flag: it governs whether the
    /// factory attaches an empty `children` array and whether the transport
    /// bridge accepts nested content for the kind.
    pub fn accepts_children(&self) -> bool {
        matches!(
            self,
            ComponentKind::Row
                | ComponentKind::Column
                | ComponentKind::Box
                | ComponentKind::Card
                | ComponentKind::Container
                | ComponentKind::Grid
                | ComponentKind::Form
                | ComponentKind::Carousel
                | ComponentKind::Tabs
                | ComponentKind::Accordion
                | ComponentKind::List
                | ComponentKind::Dialog
                | ComponentKind::Tooltip
        )
    }

    /// Whether dropping *onto* a node of this kind places the dragged
    /// component inside it rather than beside it.
    ///
    /// This is deliberately narrower than [`accepts_children`]: only the
    /// core layout containers swallow drops. Other children-capable kinds
    /// (Carousel, Tabs, ...) receive content through explicit placement,
    /// not hover-and-release.
    ///
    /// [`accepts_children`]: ComponentKind::accepts_children
    pub fn is_layout_container(&self) -> bool {
        matches!(
            self,
            ComponentKind::Row | ComponentKind::Column | ComponentKind::Box | ComponentKind::Card
        )
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
