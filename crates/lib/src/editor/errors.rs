//! Error types for drag-and-drop placement.
//!
//! Placement errors are non-fatal: a violated rule cancels the gesture and
//! surfaces as a short user-facing notice, never as a panic or a corrupted
//! tree. Callers match on the rule that was broken to phrase the notice.

use thiserror::Error;

use crate::component::{ComponentId, ComponentKind};

/// Reasons a drag gesture was cancelled instead of applied.
#[non_exhaustive]
#[derive(Debug, Clone, Error)]
pub enum PlacementError {
    /// A layout container was dropped at the canvas root while another
    /// layout container already occupies it.
    #[error("only one top-level layout container is allowed at the canvas root")]
    RootLayoutExclusive {
        existing: ComponentKind,
        attempted: ComponentKind,
    },

    /// A component was dropped onto itself or into its own subtree.
    #[error("cannot move a component into its own subtree")]
    CycleDetected {
        id: ComponentId,
        target: ComponentId,
    },

    /// The drop target id does not exist in the tree.
    #[error("drop target {target} no longer exists")]
    TargetVanished { target: ComponentId },

    /// The dragged component id does not exist in the tree.
    #[error("dragged component {id} no longer exists")]
    SubjectVanished { id: ComponentId },
}

impl PlacementError {
    /// Check if this error is the root-cardinality rule
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, PlacementError::RootLayoutExclusive { .. })
    }

    /// Check if this error is a cycle rejection
    pub fn is_cycle(&self) -> bool {
        matches!(self, PlacementError::CycleDetected { .. })
    }

    /// Check if this error is a missing subject or target
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PlacementError::TargetVanished { .. } | PlacementError::SubjectVanished { .. }
        )
    }
}

// Conversion from PlacementError to the main Error type
impl From<PlacementError> for crate::Error {
    fn from(err: PlacementError) -> Self {
        crate::Error::Placement(err)
    }
}
