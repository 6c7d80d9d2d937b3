//! Push-model observer plumbing for UI decoupling.
//!
//! Players know nothing about concrete UIs at compile time; they push action
//! lists and turn outcomes to whoever registered. Observers are owned by the
//! caller; the registry holds weak references only and must tolerate an
//! observer disappearing between attach and notify.

use std::sync::{Arc, Weak};

use game_core::BoxedAction;

use crate::events::TurnOutcome;

/// External collaborator notified of selectable actions and turn outcomes.
pub trait PlayerObserver: Send + Sync {
    /// Called after the legal-action set for a turn has been computed.
    fn note_possible_actions(&self, player: &str, actions: &[BoxedAction]);

    /// Called after the turn resolved, with the outcome that was produced.
    fn note_turn_outcome(&self, player: &str, outcome: &TurnOutcome);
}

/// Ordered set of weakly-held observers.
///
/// Notification happens in attachment order. Dead observers are skipped
/// silently and pruned on the way through.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Weak<dyn PlayerObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: Arc<dyn PlayerObserver>) {
        self.observers.push(Arc::downgrade(&observer));
    }

    /// Removes a previously attached observer. Unknown observers are ignored.
    pub fn detach(&mut self, observer: Arc<dyn PlayerObserver>) {
        self.observers.retain(|weak| {
            weak.upgrade()
                .is_some_and(|live| !same_observer(&live, &observer))
        });
    }

    pub fn notify_possible_actions(&mut self, player: &str, actions: &[BoxedAction]) {
        self.for_each_live(|observer| observer.note_possible_actions(player, actions));
    }

    pub fn notify_turn_outcome(&mut self, player: &str, outcome: &TurnOutcome) {
        self.for_each_live(|observer| observer.note_turn_outcome(player, outcome));
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    fn for_each_live<F>(&mut self, notify: F)
    where
        F: Fn(&dyn PlayerObserver),
    {
        self.observers.retain(|weak| match weak.upgrade() {
            Some(observer) => {
                notify(observer.as_ref());
                true
            }
            None => false,
        });
    }
}

fn same_observer(a: &Arc<dyn PlayerObserver>, b: &Arc<dyn PlayerObserver>) -> bool {
    // Compare allocation addresses; vtable pointers are not reliable for
    // identity across codegen units.
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
