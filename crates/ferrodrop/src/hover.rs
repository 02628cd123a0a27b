//! Hover and insertion-intent resolution.
//!
//! Everything here is a pure function of the pointer, the registered zones
//! and the geometry reported by a [`Measure`]. Sortable lists use a
//! midpoint hysteresis so the proposed index does not flip back and forth
//! while the pointer sits near a boundary.

use ferrodrop_core::math::{Axis, Vec2};
use ferrodrop_core::profiling::profile_function;

use crate::config::DEFAULT_TREE_EDGE_FRACTION;
use crate::measure::Measure;
use crate::registry::{DragRegistry, DropZoneDescriptor, ZoneLayout};
use crate::reorder::{TreeDropPosition, TreeDropTarget};
use crate::session::DragSession;
use crate::types::{ItemId, Orientation, ZoneId};

/// Result of one insertion-intent evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverIntent {
    /// Propose this index.
    Move(usize),
    /// Keep whatever index was proposed last.
    Hold,
}

/// Where the pointer is and what dropping there would do.
///
/// Derived on every pointer move; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    pub over_zone: Option<ZoneId>,
    /// Proposed index in the hovered list or grid.
    ///
    /// Inside the item's own zone this is the target index of a move.
    /// In any other zone it is an insertion point in `[0, len]`.
    pub insertion_index: Option<usize>,
    /// Hovered row of a tree zone.
    pub tree_target: Option<TreeDropTarget>,
    /// Whether the hovered zone would accept the dragged item.
    pub accepts: bool,
}

impl HoverState {
    pub fn is_over(&self, zone: &str) -> bool {
        self.over_zone.as_ref().is_some_and(|z| *z == zone)
    }
}

/// Resolve the target index inside a sortable list.
///
/// `dragged_index` is the dragged item's index when it belongs to this list.
/// In that case the candidate is the item whose box spans the pointer on the
/// list axis, and the move is held until the pointer crosses the candidate's
/// midpoint in the direction of travel. For items coming from elsewhere
/// (`None`) the result is an insertion point: the number of items whose
/// midpoint lies before the pointer.
pub fn resolve_list<M: Measure + ?Sized>(
    items: &[ItemId],
    dragged_index: Option<usize>,
    orientation: Orientation,
    pointer: Vec2,
    measure: &M,
) -> HoverIntent {
    let axis = orientation.axis();
    let p = axis.of(pointer);

    let Some(from) = dragged_index else {
        let index = items
            .iter()
            .position(|id| measure.measure_item(id).is_some_and(|b| p < b.midpoint(axis)))
            .unwrap_or(items.len());
        return HoverIntent::Move(index);
    };

    let candidate = items.iter().enumerate().find_map(|(index, id)| {
        measure
            .measure_item(id)
            .filter(|bounds| bounds.spans(axis, p))
            .map(|bounds| (index, bounds.midpoint(axis)))
    });
    let Some((candidate, midpoint)) = candidate else {
        return HoverIntent::Hold;
    };

    // Moving forward: wait until past the candidate's midpoint.
    if from < candidate && p < midpoint {
        return HoverIntent::Hold;
    }
    // Moving backward: symmetric.
    if from > candidate && p > midpoint {
        return HoverIntent::Hold;
    }
    HoverIntent::Move(candidate)
}

/// Resolve the target index inside a grid by nearest cell centre.
///
/// For items coming from elsewhere the nearest cell's index is bumped by one
/// when the pointer is right of that cell's centre (row-major reading order).
pub fn resolve_grid<M: Measure + ?Sized>(
    items: &[ItemId],
    dragged_index: Option<usize>,
    pointer: Vec2,
    measure: &M,
) -> HoverIntent {
    let nearest = items
        .iter()
        .enumerate()
        .filter_map(|(index, id)| {
            measure
                .measure_item(id)
                .map(|bounds| (index, bounds.center(), bounds.center().distance_squared(pointer)))
        })
        .min_by(|a, b| a.2.total_cmp(&b.2));

    let Some((index, center, _)) = nearest else {
        return match dragged_index {
            Some(_) => HoverIntent::Hold,
            None => HoverIntent::Move(items.len()),
        };
    };

    match dragged_index {
        Some(_) => HoverIntent::Move(index),
        None if pointer.x > center.x => HoverIntent::Move(index + 1),
        None => HoverIntent::Move(index),
    }
}

/// Resolve which tree row, and which band of it, the pointer is over.
///
/// The top and bottom `edge_fraction` of a row mean before/after; the rest
/// means inside.
pub fn resolve_tree<M: Measure + ?Sized>(
    rows: &[ItemId],
    pointer: Vec2,
    measure: &M,
    edge_fraction: f32,
) -> Option<TreeDropTarget> {
    rows.iter().find_map(|id| {
        let bounds = measure.measure_item(id)?;
        if !bounds.spans(Axis::Y, pointer.y) {
            return None;
        }
        let fraction = bounds.fraction(Axis::Y, pointer.y)?;
        let position = if fraction < edge_fraction {
            TreeDropPosition::Before
        } else if fraction > 1.0 - edge_fraction {
            TreeDropPosition::After
        } else {
            TreeDropPosition::Inside
        };
        Some(TreeDropTarget::new(id.clone(), position))
    })
}

/// Find the zone under the pointer.
///
/// Among zones whose bounds contain the pointer the smallest wins, so nested
/// zones take precedence over their containers. Equal areas go to the most
/// recently registered zone.
pub fn hit_test_zone<'a, M: Measure + ?Sized>(
    registry: &'a DragRegistry,
    pointer: Vec2,
    measure: &M,
) -> Option<&'a DropZoneDescriptor> {
    let mut best: Option<(&DropZoneDescriptor, f32)> = None;
    for zone in registry.iter() {
        let Some(bounds) = measure.measure_zone(&zone.id) else {
            continue;
        };
        if bounds.is_empty() || !bounds.contains(pointer) {
            continue;
        }
        let area = bounds.area();
        if best.is_none_or(|(_, best_area)| area <= best_area) {
            best = Some((zone, area));
        }
    }
    best.map(|(zone, _)| zone)
}

/// Combines zone hit-testing with per-layout intent resolution.
#[derive(Debug, Clone, Copy)]
pub struct HoverResolver {
    pub tree_edge_fraction: f32,
}

impl Default for HoverResolver {
    fn default() -> Self {
        Self {
            tree_edge_fraction: DEFAULT_TREE_EDGE_FRACTION,
        }
    }
}

impl HoverResolver {
    pub fn new(tree_edge_fraction: f32) -> Self {
        Self { tree_edge_fraction }
    }

    /// Compute the hover state for the session's current pointer.
    ///
    /// `previous` supplies the index kept when a list resolves to
    /// [`HoverIntent::Hold`].
    pub fn resolve<M: Measure + ?Sized>(
        &self,
        registry: &DragRegistry,
        session: &DragSession,
        previous: &HoverState,
        measure: &M,
    ) -> HoverState {
        profile_function!();

        let pointer = session.pointer;
        let Some(zone) = hit_test_zone(registry, pointer, measure) else {
            return HoverState::default();
        };

        let source_zone = session.source.as_ref().map(|s| &s.zone);
        let mut hover = HoverState {
            over_zone: Some(zone.id.clone()),
            accepts: zone.can_accept(&session.item, source_zone),
            ..HoverState::default()
        };

        let Some(layout) = &zone.layout else {
            return hover;
        };

        let dragged_index = session
            .source
            .as_ref()
            .filter(|source| source.zone == zone.id)
            .map(|source| {
                layout
                    .items()
                    .iter()
                    .position(|id| *id == session.item.id)
                    .unwrap_or(source.index)
            });

        let intent = match layout {
            ZoneLayout::List { orientation, items } => {
                Some(resolve_list(items, dragged_index, *orientation, pointer, measure))
            }
            ZoneLayout::Grid { items } => Some(resolve_grid(items, dragged_index, pointer, measure)),
            ZoneLayout::Tree { rows } => {
                hover.tree_target = resolve_tree(rows, pointer, measure, self.tree_edge_fraction)
                    .filter(|target| target.node != session.item.id);
                None
            }
        };

        hover.insertion_index = match intent {
            Some(HoverIntent::Move(index)) => Some(index),
            Some(HoverIntent::Hold) if previous.over_zone.as_ref() == Some(&zone.id) => {
                previous.insertion_index.or(dragged_index)
            }
            Some(HoverIntent::Hold) => dragged_index,
            None => None,
        };

        hover
    }
}
