//! The mutation interceptor and initialization hook.
//!
//! [`with_computed`] wraps a store factory. The wrapped factory installs an
//! intercepting set-state function on the store before running the user
//! factory, hands that same function to the user factory for its action
//! closures, and recomputes derived fields over the factory's product so
//! they exist before the first read.
//!
//! Every intercepted mutation follows one synchronous sequence: resolve the
//! update against the current state, merge the fragment in, run every
//! registered provider over the merged candidate, and commit candidate plus
//! derived fields as one state. A read performed after any mutation call
//! returns therefore always observes derived fields consistent with the
//! just-applied update.

use std::rc::Rc;

use silt_core::{GetFn, SetFn, State, Update};
use silt_store::Store;

use crate::recompute::recompute;

/// Wrap a store factory so the produced store recomputes derived fields on
/// every mutation.
///
/// The user factory receives the intercepting set handle, so action
/// closures defined inside it route through the recompute pass, as do all
/// later [`Store::set_state`] calls. The replace flag is forwarded
/// unchanged; because the interceptor commits the fully merged candidate,
/// replace mutations keep unmentioned fields and provider registrations
/// alive.
///
/// # Examples
///
/// ```
/// use silt_core::{FieldMap, State};
/// use silt_computed::{computed, with_computed};
/// use silt_store::Store;
///
/// let store = Store::create(with_computed(|_set, _get, _api| {
///     State::new().field("count", 3).merged(computed(|fields| {
///         let count = fields.int("count").unwrap();
///         FieldMap::from([("count_sq", count * count)])
///     }))
/// }));
///
/// // Present from the very first read, and consistent after every mutation.
/// assert_eq!(store.get_state().fields.int("count_sq"), Some(9));
/// store.set_state(State::new().field("count", 4), false);
/// assert_eq!(store.get_state().fields.int("count_sq"), Some(16));
/// ```
pub fn with_computed<F>(factory: F) -> impl FnOnce(SetFn, GetFn, &Store) -> State
where
    F: FnOnce(SetFn, GetFn, &Store) -> State,
{
    move |set, get, api| {
        let wrapped = set_with_computed(set);
        api.install_set_state(Rc::clone(&wrapped));

        let mut state = factory(wrapped, get, api);
        let derived = recompute(&state);
        state.fields.merge(derived);
        state
    }
}

/// Build the intercepting set-state function over a raw commit handle.
fn set_with_computed(raw: SetFn) -> SetFn {
    Rc::new(move |update, replace| {
        raw(
            Update::with(move |current: &State| {
                let fragment = update.resolve(current);
                let mut next = current.clone().merged(fragment);
                let derived = recompute(&next);
                next.fields.merge(derived);
                next
            }),
            replace,
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::computed;
    use silt_core::{FieldMap, ProviderKey};

    fn squaring_store() -> Store {
        Store::create(with_computed(|_set, _get, _api| {
            State::new()
                .field("count", 1)
                .field("label", "counter")
                .merged(computed(|fields| {
                    let count = fields.int("count").unwrap();
                    FieldMap::from([("count_sq", count * count)])
                }))
        }))
    }

    #[test]
    fn initialization_recomputes_before_the_first_read() {
        let store = squaring_store();
        let state = store.get_state();
        assert_eq!(state.fields.int("count"), Some(1));
        assert_eq!(state.fields.int("count_sq"), Some(1));
    }

    #[test]
    fn public_mutations_route_through_the_interceptor() {
        let store = squaring_store();
        store.set_state(State::new().field("count", 4), false);

        let state = store.get_state();
        assert_eq!(state.fields.int("count"), Some(4));
        assert_eq!(state.fields.int("count_sq"), Some(16));
    }

    #[test]
    fn functional_updates_resolve_before_recompute() {
        let store = squaring_store();
        store.set_state(
            Update::with(|state: &State| {
                State::new().field("count", state.fields.int("count").unwrap() + 2)
            }),
            false,
        );
        assert_eq!(store.get_state().fields.int("count_sq"), Some(9));
    }

    #[test]
    fn replace_keeps_registrations_and_unmentioned_fields() {
        let store = squaring_store();
        store.set_state(State::new().field("count", 4), true);

        let state = store.get_state();
        assert_eq!(state.fields.int("count"), Some(4));
        assert_eq!(state.fields.int("count_sq"), Some(16));
        assert_eq!(state.fields.text("label"), Some("counter"));
        assert!(state.providers.contains(&ProviderKey::Default));
    }
}
