//! Outbound events and the listener interface.

use bitflags::bitflags;

use crate::hover::HoverState;
use crate::registry::{DropRejection, DropZoneDescriptor};
use crate::reorder::{ReorderOp, TreeDropTarget};
use crate::types::{DragStart, ItemRef, ZoneId};

/// Why a drag ended without a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelReason {
    /// The host called `cancel`.
    Explicit,
    Escape,
    /// The dragged element unmounted mid-drag.
    SourceUnmounted,
    /// Released before the activation threshold.
    NotActivated,
    /// Released over no zone.
    NoTarget,
    /// Released over a zone that refused the item.
    Rejected { zone: ZoneId, reason: DropRejection },
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped {
        zone: ZoneId,
        insertion_index: Option<usize>,
        tree_target: Option<TreeDropTarget>,
        /// Move to apply for list/grid zones, computed at release.
        reorder: Option<ReorderOp>,
    },
    Cancelled(CancelReason),
}

impl DropOutcome {
    pub fn is_dropped(&self) -> bool {
        matches!(self, DropOutcome::Dropped { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, DropOutcome::Cancelled(_))
    }

    pub fn zone(&self) -> Option<&ZoneId> {
        match self {
            DropOutcome::Dropped { zone, .. } => Some(zone),
            DropOutcome::Cancelled(_) => None,
        }
    }

    pub fn reorder(&self) -> Option<&ReorderOp> {
        match self {
            DropOutcome::Dropped { reorder, .. } => reorder.as_ref(),
            DropOutcome::Cancelled(_) => None,
        }
    }
}

/// Notifications sent to [`DragListener`]s.
///
/// `DragStart` and `DragEnd` always come in pairs. A successful drop sends
/// `Drop` immediately before `DragEnd`.
#[derive(Debug, Clone)]
pub enum DragEvent {
    DragStart {
        item: ItemRef,
    },
    HoverChanged {
        item: ItemRef,
        hover: HoverState,
    },
    Drop {
        item: ItemRef,
        zone: ZoneId,
        insertion_index: Option<usize>,
        tree_target: Option<TreeDropTarget>,
        reorder: Option<ReorderOp>,
    },
    DragEnd {
        item: ItemRef,
        outcome: DropOutcome,
    },
}

impl DragEvent {
    pub fn item(&self) -> &ItemRef {
        match self {
            DragEvent::DragStart { item }
            | DragEvent::HoverChanged { item, .. }
            | DragEvent::Drop { item, .. }
            | DragEvent::DragEnd { item, .. } => item,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DragEvent::DragStart { .. } => "drag_start",
            DragEvent::HoverChanged { .. } => "hover_changed",
            DragEvent::Drop { .. } => "drop",
            DragEvent::DragEnd { .. } => "drag_end",
        }
    }
}

bitflags! {
    /// What a pointer update changed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SessionChange: u8 {
        /// Pointer position moved.
        const POINTER = 1 << 0;
        /// The drag passed its activation threshold.
        const ACTIVATED = 1 << 1;
        /// Hovered zone, insertion index, tree target or acceptance changed.
        const HOVER = 1 << 2;
    }
}

/// A request queued by a listener, run once the current dispatch finishes.
#[derive(Debug, Clone)]
pub enum DragCommand {
    Begin(DragStart),
    Cancel,
    Register(DropZoneDescriptor),
    Unregister(ZoneId),
}

/// Queue handed to listeners for follow-up work.
///
/// Listeners never call back into the coordinator directly; anything they
/// queue here runs after every listener has seen the current events and
/// the session has settled.
#[derive(Debug, Default)]
pub struct DragCommands {
    queue: Vec<DragCommand>,
}

impl DragCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_drag(&mut self, start: DragStart) {
        self.queue.push(DragCommand::Begin(start));
    }

    pub fn cancel(&mut self) {
        self.queue.push(DragCommand::Cancel);
    }

    pub fn register(&mut self, descriptor: DropZoneDescriptor) {
        self.queue.push(DragCommand::Register(descriptor));
    }

    pub fn unregister(&mut self, id: impl Into<ZoneId>) {
        self.queue.push(DragCommand::Unregister(id.into()));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn take(&mut self) -> Vec<DragCommand> {
        std::mem::take(&mut self.queue)
    }
}

/// Receives drag events.
///
/// Implemented for closures taking `(&DragEvent, &mut DragCommands)`.
pub trait DragListener {
    fn on_event(&mut self, event: &DragEvent, commands: &mut DragCommands);
}

impl<F> DragListener for F
where
    F: FnMut(&DragEvent, &mut DragCommands),
{
    fn on_event(&mut self, event: &DragEvent, commands: &mut DragCommands) {
        self(event, commands)
    }
}
