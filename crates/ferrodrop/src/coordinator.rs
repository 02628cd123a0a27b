//! The drag-and-drop coordinator.
//!
//! Ties the registry, the session state machine and the hover resolver
//! together, and turns host input (pointer moves, releases, escape,
//! unmounts) into [`DragEvent`]s.
//!
//! # Event delivery
//!
//! Every operation first settles its own state, then hands the events it
//! produced to the listeners. Listeners receive a [`DragCommands`] queue
//! instead of a handle to the coordinator; queued commands run after the
//! dispatch round, so a drop handler that starts a new drag always sees an
//! `Idle` session.

use ferrodrop_core::math::Vec2;
use ferrodrop_core::profiling::profile_function;

use crate::config::DragConfig;
use crate::error::{DragError, DragResult};
use crate::event::{
    CancelReason, DragCommand, DragCommands, DragEvent, DragListener, DropOutcome, SessionChange,
};
use crate::hover::{HoverResolver, HoverState};
use crate::measure::{Measure, NoMeasure};
use crate::preview::{self, PreviewDescription};
use crate::registry::{
    CommitReport, DragRegistry, DropRejection, DropZoneDescriptor, RegistrationBatch, ZoneLayout,
};
use crate::reorder::ReorderOp;
use crate::session::{DragPhase, DragSession, SessionState};
use crate::snapshot::DragSnapshot;
use crate::types::{DragStart, ItemId, ItemRef, ZoneId};

/// Coordinates drag sessions against a registry of drop zones.
pub struct DragCoordinator<M: Measure = NoMeasure> {
    registry: DragRegistry,
    session: SessionState,
    hover: HoverState,
    resolver: HoverResolver,
    config: DragConfig,
    measure: M,
    listeners: Vec<Box<dyn DragListener>>,
    pending: Vec<DragEvent>,
    deferred_errors: Vec<DragError>,
}

impl DragCoordinator<NoMeasure> {
    /// Coordinator without geometry: drops must name their zone.
    pub fn headless() -> Self {
        Self::new(NoMeasure)
    }
}

impl<M: Measure> DragCoordinator<M> {
    pub fn new(measure: M) -> Self {
        Self::with_config(DragConfig::default(), measure)
    }

    pub fn with_config(config: DragConfig, measure: M) -> Self {
        let registry = DragRegistry::with_policy(config.duplicate_policy);
        Self::with_registry(registry, config, measure)
    }

    /// Use an existing registry. Its own duplicate policy stays in force.
    pub fn with_registry(registry: DragRegistry, config: DragConfig, measure: M) -> Self {
        Self {
            registry,
            session: SessionState::new(config.activation_distance),
            hover: HoverState::default(),
            resolver: HoverResolver::new(config.tree_edge_fraction),
            config,
            measure,
            listeners: Vec::new(),
            pending: Vec::new(),
            deferred_errors: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: impl DragListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn registry(&self) -> &DragRegistry {
        &self.registry
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Mutable geometry access. Changes are picked up on the next pointer move.
    pub fn measure_mut(&mut self) -> &mut M {
        &mut self.measure
    }

    pub fn phase(&self) -> DragPhase {
        self.session.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.session()
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Errors raised by listener-queued commands since the last call.
    pub fn take_deferred_errors(&mut self) -> Vec<DragError> {
        std::mem::take(&mut self.deferred_errors)
    }

    // ---------------------------------------------------------------------
    // Registry
    // ---------------------------------------------------------------------

    pub fn register_zone(&mut self, descriptor: DropZoneDescriptor) -> DragResult<()> {
        self.register_inner(descriptor)?;
        self.flush();
        Ok(())
    }

    /// Remove a zone; a no-op for unknown ids. Clears the hover if the
    /// pointer was over it.
    pub fn unregister_zone(&mut self, id: &str) -> Option<DropZoneDescriptor> {
        let removed = self.unregister_inner(id);
        self.flush();
        removed
    }

    /// Commit a batch of staged registry changes.
    pub fn commit(&mut self, batch: RegistrationBatch) -> DragResult<CommitReport> {
        let report = batch.commit(&mut self.registry)?;
        self.refresh_hover();
        self.flush();
        Ok(report)
    }

    pub fn set_zone_disabled(&mut self, id: &str, disabled: bool) -> DragResult<()> {
        self.registry.set_disabled(id, disabled)?;
        self.refresh_hover();
        self.flush();
        Ok(())
    }

    pub fn set_zone_item_count(&mut self, id: &str, count: usize) -> DragResult<()> {
        self.registry.set_item_count(id, count)?;
        self.refresh_hover();
        self.flush();
        Ok(())
    }

    pub fn set_zone_layout(&mut self, id: &str, layout: ZoneLayout) -> DragResult<()> {
        self.registry.set_layout(id, layout)?;
        self.refresh_hover();
        self.flush();
        Ok(())
    }

    /// Cancel any drag and remove every zone.
    pub fn teardown(&mut self) -> Vec<ZoneId> {
        if !self.session.is_idle() {
            let _ = self.cancel_inner(CancelReason::Explicit);
        }
        let removed = self.registry.teardown();
        self.hover = HoverState::default();
        self.flush();
        removed
    }

    // ---------------------------------------------------------------------
    // Session
    // ---------------------------------------------------------------------

    /// Start a drag.
    ///
    /// Fails with [`DragError::InvalidState`] and changes nothing if a
    /// session is already in progress.
    pub fn begin_drag(&mut self, start: DragStart) -> DragResult<()> {
        self.begin_inner(start)?;
        self.flush();
        Ok(())
    }

    /// Feed a pointer move.
    pub fn update_pointer(&mut self, pointer: Vec2) -> DragResult<SessionChange> {
        profile_function!();
        let change = self.update_inner(pointer)?;
        self.flush();
        Ok(change)
    }

    /// Release over `zone` (or over nothing).
    ///
    /// The session is `Idle` afterwards whatever the outcome.
    pub fn end_drag(&mut self, zone: Option<&str>) -> DragResult<DropOutcome> {
        let outcome = self.end_inner(zone)?;
        self.flush();
        Ok(outcome)
    }

    /// Release over whichever zone the pointer is currently hovering.
    pub fn release(&mut self) -> DragResult<DropOutcome> {
        let zone = self.hover.over_zone.clone();
        self.end_drag(zone.as_ref().map(ZoneId::as_str))
    }

    /// Abort the drag.
    pub fn cancel(&mut self) -> DragResult<DropOutcome> {
        let outcome = self.cancel_inner(CancelReason::Explicit)?;
        self.flush();
        Ok(outcome)
    }

    /// Escape key pressed. Cancels when a session exists and
    /// `cancel_on_escape` is set.
    pub fn on_escape(&mut self) -> Option<DropOutcome> {
        if !self.config.cancel_on_escape || self.session.is_idle() {
            return None;
        }
        let outcome = self.cancel_inner(CancelReason::Escape).ok();
        self.flush();
        outcome
    }

    /// An item's element unmounted. Cancels the drag if it was that item.
    pub fn item_unmounted(&mut self, id: &str) -> Option<DropOutcome> {
        let dragging_it = self.session.session().is_some_and(|s| s.item.id == id);
        if !dragging_it {
            return None;
        }
        let outcome = self.cancel_inner(CancelReason::SourceUnmounted).ok();
        self.flush();
        outcome
    }

    // ---------------------------------------------------------------------
    // Introspection and preview
    // ---------------------------------------------------------------------

    pub fn snapshot(&self) -> DragSnapshot {
        let session = self.session.session();
        DragSnapshot {
            phase: self.session.phase(),
            is_dragging: self.session.is_dragging(),
            dragged_item: session.map(|s| s.item.clone()),
            pointer: session.map(|s| s.pointer),
            hover: self.hover.clone(),
            drop_zones: DragSnapshot::zones(&self.registry),
        }
    }

    /// Floating preview for the active drag, if any.
    pub fn preview<C>(&self, render: impl FnOnce(&ItemRef, bool) -> C) -> Option<PreviewDescription<C>> {
        preview::describe(self.session.session(), render)
    }

    /// Render an in-place item with its dragging flag.
    pub fn render_item<C>(&self, item: &ItemRef, render: impl FnOnce(&ItemRef, bool) -> C) -> C {
        preview::render_item(self.session.session(), item, render)
    }

    // ---------------------------------------------------------------------
    // Internals: these update state and queue events without dispatching.
    // ---------------------------------------------------------------------

    fn register_inner(&mut self, descriptor: DropZoneDescriptor) -> DragResult<()> {
        self.registry.register(descriptor)?;
        self.refresh_hover();
        Ok(())
    }

    fn unregister_inner(&mut self, id: &str) -> Option<DropZoneDescriptor> {
        let removed = self.registry.unregister(id)?;
        if self.hover.is_over(id) {
            self.refresh_hover();
        }
        Some(removed)
    }

    fn begin_inner(&mut self, start: DragStart) -> DragResult<()> {
        let item = start.item.clone();
        let activated = self.session.begin(start)?;
        self.hover = HoverState::default();
        if activated {
            self.activate(item);
        } else {
            tracing::trace!("Drag pending for '{}'", item.id);
        }
        Ok(())
    }

    /// Queue `DragStart` and resolve the initial hover.
    fn activate(&mut self, item: ItemRef) -> bool {
        tracing::debug!("Drag started for '{}' ({})", item.id, item.item_type);
        self.pending.push(DragEvent::DragStart { item });
        self.refresh_hover()
    }

    fn update_inner(&mut self, pointer: Vec2) -> DragResult<SessionChange> {
        let activated = self.session.update(pointer)?;
        let mut change = SessionChange::POINTER;
        let activated_item = activated
            .then(|| self.session.session().map(|s| s.item.clone()))
            .flatten();
        if let Some(item) = activated_item {
            change |= SessionChange::ACTIVATED;
            if self.activate(item) {
                change |= SessionChange::HOVER;
            }
        } else if self.refresh_hover() {
            change |= SessionChange::HOVER;
        }
        Ok(change)
    }

    /// Recompute the hover state. Returns `true` and queues a
    /// `HoverChanged` event if it changed.
    fn refresh_hover(&mut self) -> bool {
        let Some(session) = self.session.session().filter(|s| s.is_activated()) else {
            return false;
        };
        let next = self
            .resolver
            .resolve(&self.registry, session, &self.hover, &self.measure);
        if next == self.hover {
            return false;
        }
        tracing::trace!(
            "Hover changed: zone={:?} index={:?} accepts={}",
            next.over_zone,
            next.insertion_index,
            next.accepts
        );
        self.pending.push(DragEvent::HoverChanged {
            item: session.item.clone(),
            hover: next.clone(),
        });
        self.hover = next;
        true
    }

    fn end_inner(&mut self, zone: Option<&str>) -> DragResult<DropOutcome> {
        let session = self.session.finish()?;
        let hover = std::mem::take(&mut self.hover);

        if !session.is_activated() {
            tracing::trace!("Drag for '{}' released before activation", session.item.id);
            return Ok(DropOutcome::Cancelled(CancelReason::NotActivated));
        }

        let outcome = self.resolve_drop(&session, zone, hover);
        match &outcome {
            DropOutcome::Dropped {
                zone,
                insertion_index,
                tree_target,
                reorder,
            } => {
                tracing::debug!("Dropped '{}' on '{}'", session.item.id, zone);
                self.pending.push(DragEvent::Drop {
                    item: session.item.clone(),
                    zone: zone.clone(),
                    insertion_index: *insertion_index,
                    tree_target: tree_target.clone(),
                    reorder: reorder.clone(),
                });
            }
            DropOutcome::Cancelled(reason) => {
                tracing::debug!("Drag for '{}' cancelled: {:?}", session.item.id, reason);
            }
        }
        self.pending.push(DragEvent::DragEnd {
            item: session.item,
            outcome: outcome.clone(),
        });
        Ok(outcome)
    }

    fn resolve_drop(&self, session: &DragSession, zone: Option<&str>, hover: HoverState) -> DropOutcome {
        let Some(zone_id) = zone else {
            return DropOutcome::Cancelled(CancelReason::NoTarget);
        };
        let Some(descriptor) = self.registry.lookup(zone_id) else {
            return DropOutcome::Cancelled(CancelReason::Rejected {
                zone: zone_id.into(),
                reason: DropRejection::UnknownZone,
            });
        };
        let source_zone = session.source.as_ref().map(|s| &s.zone);
        if let Err(reason) = descriptor.evaluate(&session.item, source_zone) {
            return DropOutcome::Cancelled(CancelReason::Rejected {
                zone: descriptor.id.clone(),
                reason,
            });
        }

        let (insertion_index, tree_target) = if hover.is_over(zone_id) {
            (hover.insertion_index, hover.tree_target)
        } else {
            (None, None)
        };
        DropOutcome::Dropped {
            zone: descriptor.id.clone(),
            insertion_index,
            reorder: reorder_for(session, descriptor, insertion_index),
            tree_target,
        }
    }

    fn cancel_inner(&mut self, reason: CancelReason) -> DragResult<DropOutcome> {
        let session = self.session.cancel()?;
        self.hover = HoverState::default();
        let outcome = DropOutcome::Cancelled(reason);
        if session.is_activated() {
            tracing::debug!("Drag for '{}' cancelled: {:?}", session.item.id, outcome);
            self.pending.push(DragEvent::DragEnd {
                item: session.item,
                outcome: outcome.clone(),
            });
        }
        Ok(outcome)
    }

    fn apply_command(&mut self, command: DragCommand) {
        let result = match command {
            DragCommand::Begin(start) => self.begin_inner(start),
            DragCommand::Cancel => self.cancel_inner(CancelReason::Explicit).map(|_| ()),
            DragCommand::Register(descriptor) => self.register_inner(descriptor),
            DragCommand::Unregister(id) => {
                self.unregister_inner(id.as_str());
                Ok(())
            }
        };
        if let Err(err) = result {
            self.deferred_errors.push(err);
        }
    }

    /// Deliver queued events, then run listener commands, repeating until
    /// quiet or `max_command_rounds` is reached.
    fn flush(&mut self) {
        let mut rounds = 0;
        while !self.pending.is_empty() {
            let events = std::mem::take(&mut self.pending);
            let mut commands = DragCommands::new();
            for event in &events {
                for listener in &mut self.listeners {
                    listener.on_event(event, &mut commands);
                }
            }

            let commands = commands.take();
            if commands.is_empty() {
                break;
            }
            rounds += 1;
            if rounds > self.config.max_command_rounds {
                tracing::warn!(
                    "Dropping {} drag commands after {} rounds",
                    commands.len(),
                    self.config.max_command_rounds
                );
                break;
            }
            for command in commands {
                self.apply_command(command);
            }
        }
    }
}

/// The move implied by dropping `session`'s item into `zone` at `index`.
fn reorder_for(session: &DragSession, zone: &DropZoneDescriptor, index: Option<usize>) -> Option<ReorderOp> {
    let to = index?;
    let source = session.source.as_ref()?;
    let items: &[ItemId] = match zone.layout.as_ref()? {
        ZoneLayout::List { items, .. } | ZoneLayout::Grid { items } => items,
        ZoneLayout::Tree { .. } => return None,
    };

    if source.zone != zone.id {
        return Some(ReorderOp::Transfer {
            from_zone: source.zone.clone(),
            from: source.index,
            to_zone: zone.id.clone(),
            to,
        });
    }

    let from = items
        .iter()
        .position(|id| *id == session.item.id)
        .unwrap_or(source.index);
    match zone.layout.as_ref()? {
        ZoneLayout::Grid { .. } => Some(ReorderOp::Grid { from, to }),
        _ => Some(ReorderOp::List { from, to }),
    }
}

impl<M: Measure + Default> Default for DragCoordinator<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}
