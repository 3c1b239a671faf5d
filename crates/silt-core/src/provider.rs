//! Provider registry types: keys, entries, and the ordered collection.
//!
//! Providers are pure functions from the full data fields to a fragment of
//! derived fields. They are carried inside [`State`](crate::State) values so
//! that registrations travel with whichever slice defines them and survive
//! arbitrary merging of independently authored slices.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::fields::FieldMap;

/// A derived-field provider function.
///
/// Receives the full candidate data fields and returns the fragment of
/// derived fields to merge back in. Providers must be pure: no interior
/// mutation, same output for the same input.
pub type ProviderFn = Rc<dyn Fn(&FieldMap) -> FieldMap>;

/// Addresses a provider registration slot.
///
/// The default key backs the unnamed registration shape; registering it
/// twice replaces the earlier function. Named keys give independently
/// authored slices collision-free slots of their own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProviderKey {
    /// The single unnamed slot.
    Default,
    /// A slot addressed by an explicit slice identifier.
    Named(String),
}

impl ProviderKey {
    /// Key for an identifier-addressed slot.
    pub fn named(id: impl Into<String>) -> Self {
        Self::Named(id.into())
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "computed"),
            Self::Named(id) => write!(f, "computed:{id}"),
        }
    }
}

/// A keyed provider registration.
#[derive(Clone)]
pub struct ProviderEntry {
    key: ProviderKey,
    func: ProviderFn,
}

impl ProviderEntry {
    /// Create an entry from a shared provider function.
    pub fn new(key: ProviderKey, func: ProviderFn) -> Self {
        Self { key, func }
    }

    /// Create an entry from a plain closure.
    pub fn from_fn(key: ProviderKey, f: impl Fn(&FieldMap) -> FieldMap + 'static) -> Self {
        Self::new(key, Rc::new(f))
    }

    /// The slot this entry occupies.
    pub fn key(&self) -> &ProviderKey {
        &self.key
    }

    /// Invoke the provider against candidate data fields.
    pub fn run(&self, fields: &FieldMap) -> FieldMap {
        (self.func)(fields)
    }
}

impl fmt::Debug for ProviderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// The ordered collection of provider registrations carried by a state.
///
/// Entries keep registration order; re-registering an occupied key replaces
/// the function in place without moving the entry. Recomputation iterates
/// this collection front to back, so later registrations win field-name
/// collisions in provider output.
///
/// Stored inline up to two entries, which covers the common single-provider
/// and two-slice cases without a heap allocation.
#[derive(Clone, Default)]
pub struct Providers {
    entries: SmallVec<[ProviderEntry; 2]>,
}

impl Providers {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register an entry.
    ///
    /// If the entry's key is already occupied, the existing slot keeps its
    /// position and takes the new function; otherwise the entry is appended.
    pub fn register(&mut self, entry: ProviderEntry) {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => existing.func = entry.func,
            None => self.entries.push(entry),
        }
    }

    /// Look up the entry occupying a key.
    pub fn get(&self, key: &ProviderKey) -> Option<&ProviderEntry> {
        self.entries.iter().find(|e| &e.key == key)
    }

    /// Whether a key is occupied.
    pub fn contains(&self, key: &ProviderKey) -> bool {
        self.get(key).is_some()
    }

    /// Merge `other`'s registrations into `self`, key by key, in order.
    pub fn merge(&mut self, other: Providers) {
        for entry in other {
            self.register(entry);
        }
    }

    /// Iterate over entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProviderEntry> {
        self.entries.iter()
    }

    /// Iterate over occupied keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &ProviderKey> {
        self.entries.iter().map(|e| &e.key)
    }
}

impl IntoIterator for Providers {
    type Item = ProviderEntry;
    type IntoIter = smallvec::IntoIter<[ProviderEntry; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Providers {
    type Item = &'a ProviderEntry;
    type IntoIter = std::slice::Iter<'a, ProviderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Providers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}
