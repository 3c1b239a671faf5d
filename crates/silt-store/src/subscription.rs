//! Listener types and the RAII [`Subscription`] guard.

use std::rc::{Rc, Weak};

use silt_core::State;

use crate::store::StoreInner;

/// A store listener.
///
/// Invoked after each committed mutation whose data fields differ from the
/// previous state, with `(new, previous)` in that order.
pub type ListenerFn = Rc<dyn Fn(&State, &State)>;

/// RAII guard for a registered listener.
///
/// Dropping the guard unregisters the listener before the next notification
/// pass. Guards hold only a weak handle to the store, so a guard outliving
/// its store is inert.
#[derive(Debug)]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: u64,
}

impl Subscription {
    pub(crate) fn new(store: Weak<StoreInner>, id: u64) -> Self {
        Self { store, id }
    }

    /// Whether the listener is still registered on a live store.
    ///
    /// Returns `false` once the store has been dropped or the listener was
    /// removed by [`Store::clear_subscribers`](crate::Store::clear_subscribers).
    pub fn is_active(&self) -> bool {
        match self.store.upgrade() {
            Some(inner) => inner
                .subscribers
                .borrow()
                .iter()
                .any(|(id, _)| *id == self.id),
            None => false,
        }
    }

    /// Explicitly unregister the listener.
    ///
    /// Equivalent to dropping the guard; provided for call sites where the
    /// intent should be visible.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
