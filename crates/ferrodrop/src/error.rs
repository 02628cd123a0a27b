//! Error type shared by every drag-and-drop operation.

use std::fmt;

use crate::session::DragPhase;
use crate::types::{ItemId, ZoneId};

/// Errors returned by registry, session and reorder operations.
///
/// All of these are local and recoverable: the operation that failed has
/// not changed any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    /// A drop zone with this id is already registered.
    DuplicateZone(ZoneId),
    /// No drop zone with this id is registered.
    ZoneNotFound(ZoneId),
    /// A list or grid index is outside `[0, len)` (or `[0, len]` for insertions).
    IndexOutOfRange { index: usize, len: usize },
    /// A tree move referenced a node that does not exist.
    NodeNotFound(ItemId),
    /// A tree move would place a node under itself or one of its descendants.
    Cycle { node: ItemId, new_parent: ItemId },
    /// The operation is not valid in the current session phase.
    InvalidState {
        operation: &'static str,
        phase: DragPhase,
    },
    /// An id appears more than once in a collection or tree.
    DuplicateId(ItemId),
    /// A sibling placement was requested relative to the tree root.
    NoParent(ItemId),
    /// A reorder operation was applied to the wrong kind of structure.
    OperationMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragError::DuplicateZone(id) => write!(f, "Drop zone '{}' is already registered", id),
            DragError::ZoneNotFound(id) => write!(f, "Drop zone '{}' is not registered", id),
            DragError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}", index, len)
            }
            DragError::NodeNotFound(id) => write!(f, "Node '{}' not found", id),
            DragError::Cycle { node, new_parent } => write!(
                f,
                "Cannot move '{}' under '{}': target is the node itself or one of its descendants",
                node, new_parent
            ),
            DragError::InvalidState { operation, phase } => {
                write!(f, "Cannot {} while {:?}", operation, phase)
            }
            DragError::DuplicateId(id) => write!(f, "Id '{}' appears more than once", id),
            DragError::NoParent(id) => write!(f, "Node '{}' has no parent", id),
            DragError::OperationMismatch { expected, found } => {
                write!(f, "Expected a {} operation, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for DragError {}

/// Result type for drag-and-drop operations.
pub type DragResult<T> = Result<T, DragError>;
