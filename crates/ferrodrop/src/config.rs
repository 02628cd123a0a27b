//! Coordinator configuration.

/// What happens when a zone id is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateZonePolicy {
    /// Fail with [`DragError::DuplicateZone`](crate::DragError::DuplicateZone)
    /// and keep the existing descriptor.
    #[default]
    Reject,
    /// Replace the existing descriptor (last write wins). The zone keeps its
    /// original registration order.
    Replace,
}

/// Default fraction of a tree row treated as the before/after band.
pub const DEFAULT_TREE_EDGE_FRACTION: f32 = 0.25;

/// Default bound on deferred command rounds per operation.
pub const DEFAULT_MAX_COMMAND_ROUNDS: usize = 8;

/// Tunables for a [`DragCoordinator`](crate::DragCoordinator).
#[derive(Debug, Clone)]
pub struct DragConfig {
    /// Pointer travel in pixels before a pending drag activates.
    ///
    /// `0.0` activates on `begin_drag`.
    pub activation_distance: f32,
    pub duplicate_policy: DuplicateZonePolicy,
    /// Whether [`on_escape`](crate::DragCoordinator::on_escape) cancels the drag.
    pub cancel_on_escape: bool,
    /// Height fraction of a tree row, at each edge, that means "before" or
    /// "after" rather than "inside".
    pub tree_edge_fraction: f32,
    /// How many rounds of listener-queued commands run before the rest are
    /// dropped.
    pub max_command_rounds: usize,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: 0.0,
            duplicate_policy: DuplicateZonePolicy::Reject,
            cancel_on_escape: true,
            tree_edge_fraction: DEFAULT_TREE_EDGE_FRACTION,
            max_command_rounds: DEFAULT_MAX_COMMAND_ROUNDS,
        }
    }
}

impl DragConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the activation distance. Negative values are treated as zero.
    pub fn activation_distance(mut self, distance: f32) -> Self {
        self.activation_distance = distance.max(0.0);
        self
    }

    pub fn duplicate_policy(mut self, policy: DuplicateZonePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn cancel_on_escape(mut self, cancel: bool) -> Self {
        self.cancel_on_escape = cancel;
        self
    }

    /// Set the tree edge band, clamped to `[0.05, 0.5]`.
    pub fn tree_edge_fraction(mut self, fraction: f32) -> Self {
        self.tree_edge_fraction = fraction.clamp(0.05, 0.5);
        self
    }

    pub fn max_command_rounds(mut self, rounds: usize) -> Self {
        self.max_command_rounds = rounds;
        self
    }
}
