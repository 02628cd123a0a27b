//! Drag session state machine.
//!
//! ```text
//! Idle --begin--> Pending --threshold--> Dragging --end/cancel--> Idle
//!                    \____________________end/cancel_____________/
//! ```
//!
//! With an activation distance of zero, `begin` goes straight to
//! `Dragging`. `Dropped` and `Cancelled` are not resting states: ending a
//! session returns it by value and the machine is `Idle` again.

use ferrodrop_core::math::Vec2;

use crate::error::{DragError, DragResult};
use crate::types::{DragSource, DragStart, ItemRef};

/// Phase of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is down on an item but has not travelled far enough.
    Pending,
    Dragging,
}

/// State of one drag operation, from pointer-down to release.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub item: ItemRef,
    /// Pointer position when the drag began.
    pub start_pointer: Vec2,
    /// Latest pointer position.
    pub pointer: Vec2,
    /// Pointer offset from the item's top-left corner at grab time.
    pub origin_offset: Vec2,
    pub source: Option<DragSource>,
    activated: bool,
}

impl DragSession {
    fn new(start: DragStart) -> Self {
        Self {
            item: start.item,
            start_pointer: start.pointer,
            pointer: start.pointer,
            origin_offset: start.origin_offset,
            source: start.source,
            activated: false,
        }
    }

    /// Whether the activation threshold has been passed.
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Pointer travel since the drag began.
    pub fn delta(&self) -> Vec2 {
        self.pointer - self.start_pointer
    }

    /// Top-left corner of the dragged item if it followed the pointer.
    pub fn item_position(&self) -> Vec2 {
        self.pointer - self.origin_offset
    }
}

/// Holder of the single active session.
///
/// At most one session exists at a time; every transition checks the
/// current phase and refuses with [`DragError::InvalidState`] without
/// touching anything when called out of order.
#[derive(Debug, Default)]
pub struct SessionState {
    session: Option<DragSession>,
    activation_distance: f32,
}

impl SessionState {
    pub fn new(activation_distance: f32) -> Self {
        Self {
            session: None,
            activation_distance: activation_distance.max(0.0),
        }
    }

    pub fn phase(&self) -> DragPhase {
        match &self.session {
            None => DragPhase::Idle,
            Some(session) if session.activated => DragPhase::Dragging,
            Some(_) => DragPhase::Pending,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.activated)
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    fn invalid(&self, operation: &'static str) -> DragError {
        DragError::InvalidState {
            operation,
            phase: self.phase(),
        }
    }

    /// Start a session. Returns `true` if it activated immediately.
    pub fn begin(&mut self, start: DragStart) -> DragResult<bool> {
        if self.session.is_some() {
            return Err(self.invalid("begin drag"));
        }
        let mut session = DragSession::new(start);
        session.activated = self.activation_distance <= 0.0;
        let activated = session.activated;
        self.session = Some(session);
        Ok(activated)
    }

    /// Record a pointer move. Returns `true` if this move activated the drag.
    pub fn update(&mut self, pointer: Vec2) -> DragResult<bool> {
        let threshold = self.activation_distance;
        let Some(session) = self.session.as_mut() else {
            return Err(self.invalid("update pointer"));
        };
        session.pointer = pointer;
        if !session.activated && session.delta().length() >= threshold {
            session.activated = true;
            return Ok(true);
        }
        Ok(false)
    }

    /// End the session, returning it. The machine is `Idle` afterwards.
    pub fn finish(&mut self) -> DragResult<DragSession> {
        self.session.take().ok_or_else(|| self.invalid("end drag"))
    }

    /// Abort the session, returning it. The machine is `Idle` afterwards.
    pub fn cancel(&mut self) -> DragResult<DragSession> {
        self.session.take().ok_or_else(|| self.invalid("cancel drag"))
    }
}
