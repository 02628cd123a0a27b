//! Drop zone registry.
//!
//! Zones are registered when their host component mounts and unregistered
//! when it unmounts. Registration is two-phase: a [`DropZoneDescriptor`] is
//! built as a plain value (safe to do during a render pass), then handed to
//! [`DragRegistry::register`] or staged in a [`RegistrationBatch`] and
//! committed once the pass is over.

use std::fmt;
use std::sync::Arc;

use ferrodrop_core::alloc::{HashMap, HashSet, IndexMap, index_map};

use crate::config::DuplicateZonePolicy;
use crate::error::{DragError, DragResult};
use crate::types::{ItemId, ItemRef, Orientation, ZoneId};

/// Caller-supplied acceptance test, run on every drop attempt.
pub type AcceptPredicate = Arc<dyn Fn(&ItemRef) -> bool + Send + Sync>;

/// How a zone lays out its items, used to resolve insertion intent.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneLayout {
    /// One-dimensional sortable list.
    List {
        orientation: Orientation,
        items: Vec<ItemId>,
    },
    /// Row-major grid; column wrapping is purely visual.
    Grid { items: Vec<ItemId> },
    /// Visible rows of a tree, in display order.
    Tree { rows: Vec<ItemId> },
}

impl ZoneLayout {
    /// Items (or rows) in display order.
    pub fn items(&self) -> &[ItemId] {
        match self {
            ZoneLayout::List { items, .. } | ZoneLayout::Grid { items } => items,
            ZoneLayout::Tree { rows } => rows,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ZoneLayout::List { .. } => "list",
            ZoneLayout::Grid { .. } => "grid",
            ZoneLayout::Tree { .. } => "tree",
        }
    }
}

/// Why a zone refused an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropRejection {
    /// The named zone is not registered.
    UnknownZone,
    Disabled,
    /// The item's type is not in the zone's accepted set.
    TypeNotAccepted,
    /// The zone's accept predicate returned false.
    PredicateRejected,
    /// The zone already holds `capacity` items.
    AtCapacity,
}

/// A registered drop target.
#[derive(Clone)]
pub struct DropZoneDescriptor {
    pub id: ZoneId,
    /// Item types this zone takes. Empty means any type.
    pub accepted_types: HashSet<String>,
    /// Maximum number of items, if bounded.
    pub capacity: Option<usize>,
    /// Items currently held, checked against `capacity`.
    pub item_count: usize,
    pub disabled: bool,
    pub layout: Option<ZoneLayout>,
    accept: Option<AcceptPredicate>,
}

impl DropZoneDescriptor {
    pub fn new(id: impl Into<ZoneId>) -> Self {
        Self {
            id: id.into(),
            accepted_types: HashSet::new(),
            capacity: None,
            item_count: 0,
            disabled: false,
            layout: None,
            accept: None,
        }
    }

    /// Add an accepted item type.
    pub fn accepts(mut self, item_type: impl Into<String>) -> Self {
        self.accepted_types.insert(item_type.into());
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn item_count(mut self, count: usize) -> Self {
        self.item_count = count;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Install an acceptance predicate, replacing any previous one.
    pub fn accept_if(mut self, predicate: impl Fn(&ItemRef) -> bool + Send + Sync + 'static) -> Self {
        self.accept = Some(Arc::new(predicate));
        self
    }

    /// Lay the zone out as a sortable list. Sets `item_count` to the list length.
    pub fn list<I>(mut self, orientation: Orientation, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
    {
        self.set_layout(ZoneLayout::List {
            orientation,
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Lay the zone out as a sortable grid. Sets `item_count` to the item count.
    pub fn grid<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
    {
        self.set_layout(ZoneLayout::Grid {
            items: items.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Lay the zone out as a tree with the given visible rows.
    pub fn tree<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
    {
        self.set_layout(ZoneLayout::Tree {
            rows: rows.into_iter().map(Into::into).collect(),
        });
        self
    }

    fn set_layout(&mut self, layout: ZoneLayout) {
        if !matches!(layout, ZoneLayout::Tree { .. }) {
            self.item_count = layout.items().len();
        }
        self.layout = Some(layout);
    }

    pub fn has_predicate(&self) -> bool {
        self.accept.is_some()
    }

    /// Decide whether `item` may be dropped here.
    ///
    /// `source_zone` is the zone the item was picked up from; moving an item
    /// within its own zone does not change occupancy, so capacity is skipped.
    pub fn evaluate(&self, item: &ItemRef, source_zone: Option<&ZoneId>) -> Result<(), DropRejection> {
        if self.disabled {
            return Err(DropRejection::Disabled);
        }
        if !self.accepted_types.is_empty() && !self.accepted_types.contains(&item.item_type) {
            return Err(DropRejection::TypeNotAccepted);
        }
        if let Some(accept) = &self.accept
            && !accept(item)
        {
            return Err(DropRejection::PredicateRejected);
        }
        let same_zone = source_zone.is_some_and(|zone| *zone == self.id);
        if let Some(capacity) = self.capacity
            && !same_zone
            && self.item_count >= capacity
        {
            return Err(DropRejection::AtCapacity);
        }
        Ok(())
    }

    pub fn can_accept(&self, item: &ItemRef, source_zone: Option<&ZoneId>) -> bool {
        self.evaluate(item, source_zone).is_ok()
    }
}

impl fmt::Debug for DropZoneDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropZoneDescriptor")
            .field("id", &self.id)
            .field("accepted_types", &self.accepted_types)
            .field("capacity", &self.capacity)
            .field("item_count", &self.item_count)
            .field("disabled", &self.disabled)
            .field("layout", &self.layout)
            .field("accept", &self.accept.as_ref().map(|_| "Fn(&ItemRef) -> bool"))
            .finish()
    }
}

/// Registry of drop zones keyed by id.
///
/// Iteration follows registration order. Replacing a zone under
/// [`DuplicateZonePolicy::Replace`] keeps its original position.
pub struct DragRegistry {
    zones: IndexMap<ZoneId, DropZoneDescriptor>,
    policy: DuplicateZonePolicy,
}

impl DragRegistry {
    /// Create an empty registry that rejects duplicate ids.
    pub fn new() -> Self {
        Self::with_policy(DuplicateZonePolicy::Reject)
    }

    pub fn with_policy(policy: DuplicateZonePolicy) -> Self {
        Self {
            zones: index_map(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicateZonePolicy {
        self.policy
    }

    /// Register a zone under its descriptor id.
    pub fn register(&mut self, descriptor: DropZoneDescriptor) -> DragResult<()> {
        match self.zones.get_mut(&descriptor.id) {
            Some(existing) => match self.policy {
                DuplicateZonePolicy::Reject => Err(DragError::DuplicateZone(descriptor.id)),
                DuplicateZonePolicy::Replace => {
                    tracing::debug!("Replacing drop zone '{}'", descriptor.id);
                    *existing = descriptor;
                    Ok(())
                }
            },
            None => {
                tracing::debug!("Registered drop zone '{}'", descriptor.id);
                self.zones.insert(descriptor.id.clone(), descriptor);
                Ok(())
            }
        }
    }

    /// Remove a zone. Returns the removed descriptor; absent ids are a no-op.
    pub fn unregister(&mut self, id: &str) -> Option<DropZoneDescriptor> {
        let removed = self.zones.shift_remove(id);
        if removed.is_some() {
            tracing::debug!("Unregistered drop zone '{}'", id);
        }
        removed
    }

    pub fn lookup(&self, id: &str) -> Option<&DropZoneDescriptor> {
        self.zones.get(id)
    }

    /// Snapshot of every registered zone.
    pub fn all(&self) -> HashMap<ZoneId, DropZoneDescriptor> {
        self.zones
            .iter()
            .map(|(id, zone)| (id.clone(), zone.clone()))
            .collect()
    }

    /// Iterate zones in registration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DropZoneDescriptor> + '_ {
        self.zones.values()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.zones.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    fn zone_mut(&mut self, id: &str) -> DragResult<&mut DropZoneDescriptor> {
        self.zones
            .get_mut(id)
            .ok_or_else(|| DragError::ZoneNotFound(ZoneId::from(id)))
    }

    pub fn set_disabled(&mut self, id: &str, disabled: bool) -> DragResult<()> {
        self.zone_mut(id)?.disabled = disabled;
        Ok(())
    }

    pub fn set_item_count(&mut self, id: &str, count: usize) -> DragResult<()> {
        self.zone_mut(id)?.item_count = count;
        Ok(())
    }

    /// Replace a zone's layout after its items changed.
    pub fn set_layout(&mut self, id: &str, layout: ZoneLayout) -> DragResult<()> {
        self.zone_mut(id)?.set_layout(layout);
        Ok(())
    }

    /// Remove every zone, returning their ids in registration order.
    pub fn teardown(&mut self) -> Vec<ZoneId> {
        let ids: Vec<ZoneId> = self.zones.drain(..).map(|(id, _)| id).collect();
        if !ids.is_empty() {
            tracing::debug!("Registry teardown removed {} zones", ids.len());
        }
        ids
    }
}

impl Default for DragRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DragRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragRegistry")
            .field("zones", &self.zones.keys().collect::<Vec<_>>())
            .field("policy", &self.policy)
            .finish()
    }
}

static_assertions::assert_impl_all!(DragRegistry: Send, Sync);
static_assertions::assert_impl_all!(DropZoneDescriptor: Send, Sync, Clone);

#[derive(Debug, Clone)]
enum StagedChange {
    Register(DropZoneDescriptor),
    Unregister(ZoneId),
}

/// Summary of a committed [`RegistrationBatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    pub registered: Vec<ZoneId>,
    /// Ids that were actually present when unregistered.
    pub unregistered: Vec<ZoneId>,
}

/// Registry changes collected during a traversal and applied in one step.
///
/// Staging never touches the registry. [`commit`](Self::commit) checks the
/// whole batch first and applies nothing if any registration would fail.
/// Changes apply in staging order, so unregister-then-register of the same
/// id within one batch is a remount.
#[derive(Debug, Clone, Default)]
pub struct RegistrationBatch {
    changes: Vec<StagedChange>,
}

impl RegistrationBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage_register(&mut self, descriptor: DropZoneDescriptor) -> &mut Self {
        self.changes.push(StagedChange::Register(descriptor));
        self
    }

    pub fn stage_unregister(&mut self, id: impl Into<ZoneId>) -> &mut Self {
        self.changes.push(StagedChange::Unregister(id.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Validate and apply every staged change.
    pub fn commit(self, registry: &mut DragRegistry) -> DragResult<CommitReport> {
        if registry.policy() == DuplicateZonePolicy::Reject {
            let mut present: HashSet<ZoneId> = registry.zones.keys().cloned().collect();
            for change in &self.changes {
                match change {
                    StagedChange::Register(descriptor) => {
                        if !present.insert(descriptor.id.clone()) {
                            return Err(DragError::DuplicateZone(descriptor.id.clone()));
                        }
                    }
                    StagedChange::Unregister(id) => {
                        present.remove(id);
                    }
                }
            }
        }

        let mut report = CommitReport::default();
        for change in self.changes {
            match change {
                StagedChange::Register(descriptor) => {
                    let id = descriptor.id.clone();
                    registry.register(descriptor)?;
                    report.registered.push(id);
                }
                StagedChange::Unregister(id) => {
                    if registry.unregister(id.as_str()).is_some() {
                        report.unregistered.push(id);
                    }
                }
            }
        }
        Ok(report)
    }
}
