//! Getter objects: declaration-time replacement for accessor introspection.
//!
//! A [`GetterObject`] declares data fields alongside named getter closures
//! and an optional `base` object chain. Converting it into a registration
//! fragment extracts the getters (own declarations shadow the chain),
//! freezes them into one synthetic provider, and carries the object's own
//! data fields only. Each getter is invoked with the current candidate
//! fields on every recompute, never with the object it was declared on.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use silt_core::{FieldMap, ProviderEntry, ProviderKey, State, Value};

/// A getter closure: computes one derived value from the candidate fields.
pub type GetterFn = Rc<dyn Fn(&FieldMap) -> Value>;

/// A getter-bearing object declaration.
///
/// # Examples
///
/// ```
/// use silt_core::{FieldMap, Value};
/// use silt_computed::{recompute, GetterObject};
///
/// let slice = GetterObject::new()
///     .field("y", 1)
///     .getter("y_sq", |fields| {
///         let y = fields.int("y").unwrap();
///         Value::from(y * y)
///     })
///     .into_computed_as("y");
///
/// // The synthetic provider computes against whatever fields it is given.
/// let mut live = slice.fields.clone();
/// live.insert("y", 4);
/// assert_eq!(recompute(&slice.merged(live.into())).int("y_sq"), Some(16));
/// ```
#[derive(Clone, Default)]
pub struct GetterObject {
    fields: FieldMap,
    getters: IndexMap<String, GetterFn>,
    base: Option<Box<GetterObject>>,
}

impl GetterObject {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a data field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key, value);
        self
    }

    /// Declare a named getter.
    ///
    /// Redeclaring a name replaces the closure in place, keeping the
    /// original declaration position.
    #[must_use]
    pub fn getter(mut self, name: impl Into<String>, f: impl Fn(&FieldMap) -> Value + 'static) -> Self {
        self.getters.insert(name.into(), Rc::new(f));
        self
    }

    /// Append `base` to the end of this object's base chain.
    ///
    /// Getters on `self` shadow getters of the same name anywhere in the
    /// chain; a nearer chain level shadows a farther one.
    #[must_use]
    pub fn extend(mut self, base: GetterObject) -> Self {
        self.attach(base);
        self
    }

    fn attach(&mut self, base: GetterObject) {
        match &mut self.base {
            Some(existing) => existing.attach(base),
            None => self.base = Some(Box::new(base)),
        }
    }

    /// Collect every reachable getter, own declarations first, then each
    /// base level outward.
    ///
    /// A name already captured at an inner level is never overwritten by an
    /// outer level. No getter is invoked during extraction.
    pub fn extract_getters(&self) -> IndexMap<String, GetterFn> {
        let mut captured = IndexMap::new();
        let mut level = Some(self);
        while let Some(object) = level {
            for (name, getter) in &object.getters {
                if !captured.contains_key(name) {
                    captured.insert(name.clone(), Rc::clone(getter));
                }
            }
            level = object.base.as_deref();
        }
        captured
    }

    /// Convert into a registration fragment under the default slot.
    ///
    /// The fragment carries this object's own data fields (base-chain
    /// fields are not copied) plus one synthetic provider over the getter
    /// set frozen at this call.
    pub fn into_computed(self) -> State {
        self.into_registered(ProviderKey::Default)
    }

    /// Convert into a registration fragment under an identifier slot.
    pub fn into_computed_as(self, id: impl Into<String>) -> State {
        self.into_registered(ProviderKey::named(id))
    }

    fn into_registered(self, key: ProviderKey) -> State {
        let getters = self.extract_getters();
        let provider = move |fields: &FieldMap| {
            let mut out = FieldMap::new();
            for (name, getter) in &getters {
                out.insert(name.clone(), getter(fields));
            }
            out
        };
        State::from(self.fields).provider(ProviderEntry::from_fn(key, provider))
    }
}

impl fmt::Debug for GetterObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetterObject")
            .field("fields", &self.fields)
            .field("getters", &self.getters.keys().collect::<Vec<_>>())
            .field("base", &self.base)
            .finish()
    }
}
