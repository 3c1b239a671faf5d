//! The [`Store`]: factory construction, mutation, and notification.
//!
//! A store is a shared handle over single-threaded interior state. Public
//! mutations route through an installable set-state slot so that middleware
//! can intercept every external mutation; the raw commit path is reachable
//! only through the handles given to the construction factory.
//!
//! # Invariants
//!
//! 1. The factory runs exactly once; reads during the factory observe the
//!    empty state, and the factory's product is assigned without notifying.
//! 2. Listeners fire in registration order, after the state swap, once per
//!    committed mutation whose data fields differ from the previous state.
//! 3. A commit producing identical data fields is silent: provider-only
//!    changes commit without a notification.
//! 4. The listener list is snapshotted before a notification pass, so a
//!    listener may subscribe, unsubscribe, or mutate the store mid-pass.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use silt_core::{GetFn, SetFn, State, Update};

use crate::subscription::{ListenerFn, Subscription};

/// Shared interior of a [`Store`].
pub(crate) struct StoreInner {
    state: RefCell<State>,
    /// The public set-state slot. Starts as the raw commit entry point;
    /// middleware overwrites it via [`Store::install_set_state`].
    dispatch: RefCell<SetFn>,
    pub(crate) subscribers: RefCell<Vec<(u64, ListenerFn)>>,
    next_listener: Cell<u64>,
}

impl StoreInner {
    fn commit(&self, update: Update, replace: bool) {
        // Resolve against a clone so updaters can read the store reentrantly.
        let current = self.state.borrow().clone();
        let fragment = update.resolve(&current);
        let next = if replace {
            fragment
        } else {
            current.clone().merged(fragment)
        };
        let changed = next.fields != current.fields;
        *self.state.borrow_mut() = next.clone();
        if changed {
            self.notify(&next, &current);
        }
    }

    fn notify(&self, new: &State, previous: &State) {
        let listeners: Vec<ListenerFn> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(new, previous);
        }
    }
}

/// An observable state container.
///
/// Cloning a `Store` clones the handle, not the state: all clones share one
/// interior. Stores are single-threaded; handles are neither `Send` nor
/// `Sync`.
///
/// # Examples
///
/// ```
/// use silt_core::{State, Update};
/// use silt_store::Store;
///
/// // Factories receive the mutation and read handles; application actions
/// // are closures capturing them.
/// let mut increment: Option<Box<dyn Fn()>> = None;
/// let store = Store::create(|set, _get, _api| {
///     increment = Some(Box::new(move || {
///         set(
///             Update::with(|state: &State| {
///                 State::new().field("count", state.fields.int("count").unwrap_or(0) + 1)
///             }),
///             false,
///         );
///     }));
///     State::new().field("count", 0)
/// });
///
/// increment.as_ref().unwrap()();
/// assert_eq!(store.get_state().fields.int("count"), Some(1));
/// ```
#[derive(Clone)]
pub struct Store {
    inner: Rc<StoreInner>,
}

impl Store {
    /// Construct a store by running `factory` exactly once.
    ///
    /// The factory receives the raw mutation handle, a read handle, and the
    /// store itself as the api object. Its returned state becomes the
    /// initial state without notifying listeners. Reads during the factory
    /// observe the empty state.
    ///
    /// Both handles hold only a weak reference to the store: once every
    /// `Store` clone is dropped, surviving handles become inert (mutations
    /// are dropped, reads return the empty state).
    pub fn create(factory: impl FnOnce(SetFn, GetFn, &Store) -> State) -> Store {
        let inner = Rc::new_cyclic(|weak: &Weak<StoreInner>| {
            let weak = weak.clone();
            let raw: SetFn = Rc::new(move |update, replace| {
                if let Some(inner) = weak.upgrade() {
                    inner.commit(update, replace);
                }
            });
            StoreInner {
                state: RefCell::new(State::new()),
                dispatch: RefCell::new(raw),
                subscribers: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }
        });
        let store = Store { inner };

        let set = store.inner.dispatch.borrow().clone();
        let get: GetFn = {
            let weak = Rc::downgrade(&store.inner);
            Rc::new(move || match weak.upgrade() {
                Some(inner) => inner.state.borrow().clone(),
                None => State::new(),
            })
        };

        let initial = factory(set, get, &store);
        *store.inner.state.borrow_mut() = initial;
        store
    }

    /// Submit a mutation through the public set-state slot.
    ///
    /// With `replace == false` the resolved fragment merges into the current
    /// state; with `replace == true` it substitutes the state wholesale,
    /// provider registrations included.
    pub fn set_state(&self, update: impl Into<Update>, replace: bool) {
        let dispatch = self.inner.dispatch.borrow().clone();
        dispatch(update.into(), replace);
    }

    /// Overwrite the public set-state slot.
    ///
    /// All subsequent [`set_state`](Self::set_state) calls route through
    /// `set`. Handles captured before the overwrite keep their original
    /// target, which is how middleware retains the raw commit path for
    /// itself.
    pub fn install_set_state(&self, set: SetFn) {
        *self.inner.dispatch.borrow_mut() = set;
    }

    /// A clone of the current state.
    pub fn get_state(&self) -> State {
        self.inner.state.borrow().clone()
    }

    /// Run `f` with borrowed read access to the current state.
    ///
    /// Cheaper than [`get_state`](Self::get_state) when a clone is not
    /// needed. `f` must not mutate the store; doing so panics on the
    /// interior borrow.
    pub fn with_state<R>(&self, f: impl FnOnce(&State) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Register a listener, returning its RAII guard.
    ///
    /// The listener receives `(new, previous)` after each committed
    /// mutation that changed the data fields. Dropping the guard
    /// unregisters the listener.
    #[must_use]
    pub fn subscribe(&self, listener: impl Fn(&State, &State) + 'static) -> Subscription {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription::new(Rc::downgrade(&self.inner), id)
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Unregister every listener at once.
    ///
    /// Outstanding [`Subscription`] guards become inactive but remain safe
    /// to drop.
    pub fn clear_subscribers(&self) {
        self.inner.subscribers.borrow_mut().clear();
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Store")
            .field("fields", &state.fields)
            .field("providers", &state.providers)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
