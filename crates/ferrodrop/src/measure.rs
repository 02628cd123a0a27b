//! Geometry provider injected by the host.
//!
//! The core never queries a rendering surface itself. Hosts answer
//! [`Measure`] from whatever layout data they have (DOM rects, a layout
//! engine, a test fixture).

use ferrodrop_core::alloc::HashMap;
use ferrodrop_core::geometry::Rect;

use crate::types::{ItemId, ZoneId};

/// Bounding box of an item or zone, in the same space as pointer positions.
pub type BoundingBox = Rect;

/// Supplies bounding boxes for items and drop zones.
pub trait Measure {
    /// Bounding box of an item, or `None` if it is not currently laid out.
    fn measure_item(&self, id: &ItemId) -> Option<BoundingBox>;

    /// Bounding box of a drop zone. Zones without bounds are never hovered.
    fn measure_zone(&self, _id: &ZoneId) -> Option<BoundingBox> {
        None
    }
}

/// Measure nothing. Hover resolution is disabled; drops must name a zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMeasure;

impl Measure for NoMeasure {
    fn measure_item(&self, _id: &ItemId) -> Option<BoundingBox> {
        None
    }
}

/// Plain lookup tables, useful for hosts that cache layout once per frame.
#[derive(Debug, Clone, Default)]
pub struct MeasureTable {
    pub items: HashMap<ItemId, BoundingBox>,
    pub zones: HashMap<ZoneId, BoundingBox>,
}

impl MeasureTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, id: impl Into<ItemId>, bounds: BoundingBox) -> Self {
        self.items.insert(id.into(), bounds);
        self
    }

    pub fn zone(mut self, id: impl Into<ZoneId>, bounds: BoundingBox) -> Self {
        self.zones.insert(id.into(), bounds);
        self
    }

    pub fn set_item(&mut self, id: impl Into<ItemId>, bounds: BoundingBox) {
        self.items.insert(id.into(), bounds);
    }

    pub fn set_zone(&mut self, id: impl Into<ZoneId>, bounds: BoundingBox) {
        self.zones.insert(id.into(), bounds);
    }
}

impl Measure for MeasureTable {
    fn measure_item(&self, id: &ItemId) -> Option<BoundingBox> {
        self.items.get(id).copied()
    }

    fn measure_zone(&self, id: &ZoneId) -> Option<BoundingBox> {
        self.zones.get(id).copied()
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn measure_item(&self, id: &ItemId) -> Option<BoundingBox> {
        (**self).measure_item(id)
    }

    fn measure_zone(&self, id: &ZoneId) -> Option<BoundingBox> {
        (**self).measure_zone(id)
    }
}

impl<M: Measure + ?Sized> Measure for Box<M> {
    fn measure_item(&self, id: &ItemId) -> Option<BoundingBox> {
        (**self).measure_item(id)
    }

    fn measure_zone(&self, id: &ZoneId) -> Option<BoundingBox> {
        (**self).measure_zone(id)
    }
}
