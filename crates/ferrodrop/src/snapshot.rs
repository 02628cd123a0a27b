//! Read-only view of coordinator state for debugging UIs.

use ferrodrop_core::math::Vec2;

use crate::hover::HoverState;
use crate::registry::{DragRegistry, DropZoneDescriptor};
use crate::session::DragPhase;
use crate::types::{ItemRef, ZoneId};

/// Summary of one registered zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSnapshot {
    pub id: ZoneId,
    /// Accepted types, sorted. Empty means any.
    pub accepted_types: Vec<String>,
    pub capacity: Option<usize>,
    pub item_count: usize,
    pub disabled: bool,
    pub layout: Option<&'static str>,
    pub has_predicate: bool,
}

impl From<&DropZoneDescriptor> for ZoneSnapshot {
    fn from(zone: &DropZoneDescriptor) -> Self {
        let mut accepted_types: Vec<String> = zone.accepted_types.iter().cloned().collect();
        accepted_types.sort_unstable();
        Self {
            id: zone.id.clone(),
            accepted_types,
            capacity: zone.capacity,
            item_count: zone.item_count,
            disabled: zone.disabled,
            layout: zone.layout.as_ref().map(|layout| layout.kind()),
            has_predicate: zone.has_predicate(),
        }
    }
}

/// Point-in-time copy of the drag state.
#[derive(Debug, Clone)]
pub struct DragSnapshot {
    pub phase: DragPhase,
    pub is_dragging: bool,
    pub dragged_item: Option<ItemRef>,
    pub pointer: Option<Vec2>,
    pub hover: HoverState,
    /// Registered zones, sorted by id.
    pub drop_zones: Vec<ZoneSnapshot>,
}

impl DragSnapshot {
    pub(crate) fn zones(registry: &DragRegistry) -> Vec<ZoneSnapshot> {
        let mut zones: Vec<ZoneSnapshot> = registry.iter().map(ZoneSnapshot::from).collect();
        zones.sort_by(|a, b| a.id.cmp(&b.id));
        zones
    }

    pub fn zone(&self, id: &str) -> Option<&ZoneSnapshot> {
        self.drop_zones.iter().find(|zone| zone.id == id)
    }
}
