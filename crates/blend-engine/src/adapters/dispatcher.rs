//! Dispatcher adapters for deferred external actions.

use crate::ports::outbound::{Action, ActionDispatcher};

/// Discards every action. For wiring the engine without a host ledger.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDispatcher;

impl ActionDispatcher for NoOpDispatcher {
    fn dispatch(&mut self, _action: Action) {}
}

/// Records every dispatched action in order.
///
/// The real dispatch mechanism is fire-and-forget with no feedback channel,
/// so the recorded stream is the only way tests can observe the engine's
/// external effects.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    actions: Vec<Action>,
}

impl RecordingDispatcher {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All actions dispatched so far, in issue order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of recorded actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl ActionDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, action: Action) {
        self.actions.push(action);
    }
}
