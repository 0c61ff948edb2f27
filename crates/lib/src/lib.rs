//!
//! Pagewright: the component-tree editing engine behind a no-code visual UI
//! builder. Users drag components onto a canvas, arrange them into a tree,
//! edit their properties, and persist the result as a JSON document that a
//! separate rendering SDK interprets.
//!
//! ## Core Concepts
//!
//! * **Components (`component::Component`)**: typed nodes forming an ordered
//!   tree. Each carries an opaque id, a kind drawn from a closed registry, an
//!   open property map, and (for container kinds) an ordered children
//!   sequence. Subtrees are `Arc`-shared between tree versions.
//! * **Location engine (`tree`)**: pure find/remove/insert/update algorithms
//!   with copy-on-write path rebuilding and structural sharing, plus the
//!   flattened outline projection.
//! * **Registry (`registry`)**: the static table of component kinds (palette
//!   metadata and default property schemas) and the factory that
//!   instantiates default nodes.
//! * **Editor (`editor::Editor`)**: the drag-and-drop reconciliation
//!   controller. Owns the tree and the selection, interprets drag gestures,
//!   enforces the structural rules (single root layout, container-only
//!   nesting, no cycles) and is the single mutation entry point.
//! * **Transport (`transport`)**: the bidirectional bridge between the typed
//!   tree and the JSON DTO consumed by the rendering SDK, including the
//!   pre-persistence null normalization pass.
//! * **Store (`store::PageStore`)**: the asynchronous page persistence
//!   boundary; the core itself never suspends and never performs I/O.

pub mod component;
pub mod editor;
pub mod registry;
pub mod store;
pub mod transport;
pub mod tree;

/// Re-exports of the types most callers need.
pub use component::{Component, ComponentId, ComponentKind, Props};
pub use editor::Editor;
pub use tree::Anchor;

/// Result type used throughout the Pagewright library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Pagewright library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured placement errors from the editor module
    #[error(transparent)]
    Placement(editor::PlacementError),

    /// Structured transport errors from the transport module
    #[error(transparent)]
    Transport(transport::TransportError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
            Error::Placement(_) => "editor",
            Error::Transport(_) => "transport",
            Error::Store(_) => "store",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Placement(err) => err.is_not_found(),
            Error::Store(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a placement-rule violation.
    pub fn is_placement_error(&self) -> bool {
        matches!(self, Error::Placement(_))
    }

    /// Check if this error is transport-related.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if this error is store-related.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
