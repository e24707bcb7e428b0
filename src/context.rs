//! Action Context
//!
//! Busy state of the three request-issuing actions, held in Leptos signals
//! so the DOM bindings can mirror it onto the triggering controls.

use leptos::prelude::*;

use crate::models::{ActionKind, ActionState};

#[derive(Clone, Copy)]
pub struct ActionSignals {
    add: RwSignal<ActionState>,
    edit: RwSignal<ActionState>,
    delete: RwSignal<ActionState>,
}

impl Default for ActionSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionSignals {
    pub fn new() -> Self {
        Self {
            add: RwSignal::new(ActionState::Idle),
            edit: RwSignal::new(ActionState::Idle),
            delete: RwSignal::new(ActionState::Idle),
        }
    }

    fn signal(&self, kind: ActionKind) -> RwSignal<ActionState> {
        match kind {
            ActionKind::Add => self.add,
            ActionKind::Edit => self.edit,
            ActionKind::Delete => self.delete,
        }
    }

    /// Current state without subscribing
    pub fn state(&self, kind: ActionKind) -> ActionState {
        self.signal(kind).get_untracked()
    }

    /// Tracked read, for effects
    pub fn is_busy(&self, kind: ActionKind) -> bool {
        self.signal(kind).get() == ActionState::Submitting
    }

    /// Enter `Submitting`. Returns false if a request is already in flight.
    pub fn try_begin(&self, kind: ActionKind) -> bool {
        let signal = self.signal(kind);
        if signal.get_untracked() == ActionState::Submitting {
            return false;
        }
        signal.set(ActionState::Submitting);
        true
    }

    /// Back to `Idle`
    pub fn finish(&self, kind: ActionKind) {
        self.signal(kind).set(ActionState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_is_exclusive_per_action() {
        let owner = Owner::new();
        let actions = owner.with(ActionSignals::new);
        assert!(actions.try_begin(ActionKind::Add));
        assert!(!actions.try_begin(ActionKind::Add));
        // other actions are independent
        assert!(actions.try_begin(ActionKind::Delete));
        assert_eq!(actions.state(ActionKind::Edit), ActionState::Idle);

        actions.finish(ActionKind::Add);
        assert_eq!(actions.state(ActionKind::Add), ActionState::Idle);
        assert!(actions.try_begin(ActionKind::Add));
    }
}
