//! Event recording for assertions.

use std::sync::Arc;

use ferrodrop::{DragCommands, DragEvent, DragListener, DropOutcome};
use parking_lot::Mutex;

/// A listener that stores every event it receives.
///
/// Clones share the same log, so keep one clone for assertions and hand
/// the other to the coordinator.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<DragEvent>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DragEvent> {
        self.events.lock().clone()
    }

    /// Event names in delivery order.
    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(DragEvent::name).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.events.lock().iter().filter(|e| e.name() == name).count()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn last(&self) -> Option<DragEvent> {
        self.events.lock().last().cloned()
    }

    /// Outcomes carried by `DragEnd` events.
    pub fn outcomes(&self) -> Vec<DropOutcome> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                DragEvent::DragEnd { outcome, .. } => Some(outcome.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl DragListener for RecordingListener {
    fn on_event(&mut self, event: &DragEvent, _commands: &mut DragCommands) {
        self.events.lock().push(event.clone());
    }
}
