//! Test utilities and spy types for Silt development.
//!
//! Provides the call-counting wrappers used across the workspace's tests:
//! [`ProviderSpy`] counts provider invocations, [`ListenerSpy`] counts
//! store notifications and records the last observed state pair.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use silt_core::{FieldMap, State};
use silt_store::{Store, Subscription};

/// Call-counting wrapper around a provider function.
///
/// Wrap the real provider with [`wrap`](ProviderSpy::wrap), register the
/// wrapper, and assert on [`calls`](ProviderSpy::calls) afterwards.
#[derive(Clone, Default)]
pub struct ProviderSpy {
    calls: Rc<Cell<usize>>,
}

impl ProviderSpy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a provider so each invocation is counted before delegating.
    pub fn wrap(
        &self,
        f: impl Fn(&FieldMap) -> FieldMap + 'static,
    ) -> impl Fn(&FieldMap) -> FieldMap + 'static {
        let calls = Rc::clone(&self.calls);
        move |fields| {
            calls.set(calls.get() + 1);
            f(fields)
        }
    }

    /// Number of times the wrapped provider has run.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

struct ListenerSpyInner {
    notifications: Cell<usize>,
    last: RefCell<Option<(State, State)>>,
}

/// Notification-counting store listener.
///
/// Attach to a store with [`attach`](ListenerSpy::attach) and keep the
/// returned guard alive for as long as the spy should keep counting.
pub struct ListenerSpy {
    inner: Rc<ListenerSpyInner>,
}

impl ListenerSpy {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ListenerSpyInner {
                notifications: Cell::new(0),
                last: RefCell::new(None),
            }),
        }
    }

    #[must_use]
    pub fn attach(&self, store: &Store) -> Subscription {
        let inner = Rc::clone(&self.inner);
        store.subscribe(move |new, previous| {
            inner.notifications.set(inner.notifications.get() + 1);
            *inner.last.borrow_mut() = Some((new.clone(), previous.clone()));
        })
    }

    /// Number of notifications observed.
    pub fn notifications(&self) -> usize {
        self.inner.notifications.get()
    }

    /// The new state from the most recent notification.
    pub fn last_new(&self) -> Option<State> {
        self.inner
            .last
            .borrow()
            .as_ref()
            .map(|(new, _)| new.clone())
    }

    /// The previous state from the most recent notification.
    pub fn last_previous(&self) -> Option<State> {
        self.inner
            .last
            .borrow()
            .as_ref()
            .map(|(_, previous)| previous.clone())
    }
}

impl Default for ListenerSpy {
    fn default() -> Self {
        Self::new()
    }
}
