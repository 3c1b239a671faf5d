//! Registration constructors returning provider-carrying state fragments.
//!
//! The constructors here are the function-shaped registration forms; see
//! [`GetterObject`](crate::GetterObject) for the declaration-time getter
//! form. Every form returns a [`State`] fragment meant to be merged into a
//! slice's returned state, so registrations travel with the slice that
//! defines them.

use silt_core::{FieldMap, ProviderEntry, ProviderKey, State};

/// Register a provider under the default slot.
///
/// Only one default registration can usefully exist per store: merging a
/// second one replaces the first. Slices that must compose use
/// [`computed_as`].
///
/// # Examples
///
/// ```
/// use silt_core::{FieldMap, State};
/// use silt_computed::{computed, recompute};
///
/// let state = State::new().field("count", 3).merged(computed(|fields| {
///     let count = fields.int("count").unwrap();
///     FieldMap::from([("count_sq", count * count)])
/// }));
///
/// assert_eq!(recompute(&state).int("count_sq"), Some(9));
/// ```
pub fn computed(f: impl Fn(&FieldMap) -> FieldMap + 'static) -> State {
    fragment(ProviderKey::Default, f)
}

/// Register a provider under an identifier-addressed slot.
///
/// Independently authored slices each pass their own identifier, so any
/// number of registrations compose without clobbering one another.
pub fn computed_as(id: impl Into<String>, f: impl Fn(&FieldMap) -> FieldMap + 'static) -> State {
    fragment(ProviderKey::named(id), f)
}

fn fragment(key: ProviderKey, f: impl Fn(&FieldMap) -> FieldMap + 'static) -> State {
    State::new().provider(ProviderEntry::from_fn(key, f))
}
