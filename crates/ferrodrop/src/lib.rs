//! Ferrodrop
//!
//! A drag-and-drop coordination core. It owns no rendering and no input
//! handling: hosts feed it pointer positions and element geometry, and it
//! answers with hover state, drop outcomes and reorder operations.
//!
//! # Overview
//!
//! - [`DragRegistry`] - drop zones keyed by id, with acceptance rules
//! - [`SessionState`] - the `Idle -> Pending -> Dragging` state machine
//! - [`HoverResolver`] - zone hit-testing and insertion index with hysteresis
//! - [`reorder`] - list, grid and tree reorder engines
//! - [`DragCoordinator`] - ties it all together and emits [`DragEvent`]s
//!
//! # Example
//!
//! ```rust
//! use ferrodrop::{DragCoordinator, DragStart, DropZoneDescriptor, ItemRef, Vec2};
//!
//! let mut dnd = DragCoordinator::headless();
//! dnd.register_zone(DropZoneDescriptor::new("A").accepts("card")).unwrap();
//!
//! dnd.begin_drag(DragStart::new(ItemRef::new("x", "card"), Vec2::ZERO)).unwrap();
//! let outcome = dnd.end_drag(Some("A")).unwrap();
//!
//! assert!(outcome.is_dropped());
//! assert!(!dnd.is_dragging());
//! ```

pub mod config;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod hover;
pub mod measure;
pub mod preview;
pub mod registry;
pub mod reorder;
pub mod session;
pub mod snapshot;
pub mod types;

pub use config::{DragConfig, DuplicateZonePolicy};
pub use coordinator::DragCoordinator;
pub use error::{DragError, DragResult};
pub use event::{
    CancelReason, DragCommand, DragCommands, DragEvent, DragListener, DropOutcome, SessionChange,
};
pub use hover::{HoverIntent, HoverResolver, HoverState};
pub use measure::{BoundingBox, Measure, MeasureTable, NoMeasure};
pub use preview::PreviewDescription;
pub use registry::{
    CommitReport, DragRegistry, DropRejection, DropZoneDescriptor, RegistrationBatch, ZoneLayout,
};
pub use reorder::{OrderedCollection, ReorderOp, TreeDropPosition, TreeDropTarget, TreeNode};
pub use session::{DragPhase, DragSession, SessionState};
pub use snapshot::{DragSnapshot, ZoneSnapshot};
pub use types::{DragSource, DragStart, ItemId, ItemRef, Orientation, Payload, ZoneId};

pub use ferrodrop_core::geometry::Rect;
pub use ferrodrop_core::{logging, profiling};
pub use ferrodrop_core::math::{Axis, Vec2, vec2};
