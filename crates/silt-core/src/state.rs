//! The [`State`] value and the [`Update`] mutation contract.

use std::fmt;
use std::rc::Rc;

use crate::fields::FieldMap;
use crate::provider::{ProviderEntry, Providers};
use crate::value::Value;

/// A complete state value: data fields plus provider registrations.
///
/// Data fields and provider entries travel together so that a slice
/// function can return both its fields and its derived-field registrations
/// as one fragment, and composing slices is a single merge. The two live in
/// separate collections, which makes name collisions between data fields
/// and registry slots impossible by construction.
///
/// # Examples
///
/// ```
/// use silt_core::State;
///
/// let base = State::new().field("count", 1).field("label", "counter");
/// let patch = State::new().field("count", 2);
///
/// let merged = base.merged(patch);
/// assert_eq!(merged.fields.int("count"), Some(2));
/// assert_eq!(merged.fields.text("label"), Some("counter"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct State {
    /// Ordinary data fields, in first-insertion order.
    pub fields: FieldMap,
    /// Derived-field providers, in registration order.
    pub providers: Providers,
}

impl State {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the state has no fields and no providers.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.providers.is_empty()
    }

    /// Fluent insert of a data field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// Fluent registration of a provider entry.
    #[must_use]
    pub fn provider(mut self, entry: ProviderEntry) -> Self {
        self.providers.register(entry);
        self
    }

    /// Look up a data field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Merge `other` into `self`.
    ///
    /// Fields merge last-write-wins with stable positions
    /// ([`FieldMap::merge`]); providers merge per key with
    /// replace-or-append semantics ([`Providers::merge`]).
    pub fn merge(&mut self, other: State) {
        self.fields.merge(other.fields);
        self.providers.merge(other.providers);
    }

    /// Consuming form of [`merge`](Self::merge).
    #[must_use]
    pub fn merged(mut self, other: State) -> State {
        self.merge(other);
        self
    }
}

impl From<FieldMap> for State {
    fn from(fields: FieldMap) -> Self {
        Self {
            fields,
            providers: Providers::new(),
        }
    }
}

/// A mutation submitted to a store's set entry point.
///
/// Mirrors the two shapes the mutation contract accepts: a ready fragment,
/// or a function of the current state producing a fragment. Both resolve to
/// a [`State`] fragment that the store then merges into (or, with the
/// replace flag, substitutes for) the current state.
///
/// # Examples
///
/// ```
/// use silt_core::{State, Update};
///
/// let current = State::new().field("count", 2);
///
/// let patch = Update::from(State::new().field("count", 5));
/// assert_eq!(patch.resolve(&current).fields.int("count"), Some(5));
///
/// let bump = Update::with(|state: &State| {
///     State::new().field("count", state.fields.int("count").unwrap_or(0) + 1)
/// });
/// assert_eq!(bump.resolve(&current).fields.int("count"), Some(3));
/// ```
pub enum Update {
    /// A ready state fragment.
    Patch(State),
    /// A function of the current state producing a fragment.
    With(Box<dyn FnOnce(&State) -> State>),
}

impl Update {
    /// Wrap a functional update.
    pub fn with(f: impl FnOnce(&State) -> State + 'static) -> Self {
        Self::With(Box::new(f))
    }

    /// Resolve to a plain fragment against the current state.
    pub fn resolve(self, current: &State) -> State {
        match self {
            Self::Patch(state) => state,
            Self::With(f) => f(current),
        }
    }
}

impl From<State> for Update {
    fn from(state: State) -> Self {
        Self::Patch(state)
    }
}

impl From<FieldMap> for Update {
    fn from(fields: FieldMap) -> Self {
        Self::Patch(State::from(fields))
    }
}

impl fmt::Debug for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Patch(state) => f.debug_tuple("Patch").field(state).finish(),
            Self::With(_) => f.write_str("With(..)"),
        }
    }
}

/// Shared handle to a store's mutation entry point.
///
/// The boolean is the replace flag: `false` merges the resolved fragment
/// into the current state, `true` substitutes it wholesale.
pub type SetFn = Rc<dyn Fn(Update, bool)>;

/// Shared handle reading a snapshot of a store's current state.
pub type GetFn = Rc<dyn Fn() -> State>;
