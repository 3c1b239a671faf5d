//! Benchmark profiles for the Silt state container.
//!
//! Provides pre-built store shapes shared by the criterion benches:
//!
//! - [`wide_state`]: a state with `n` integer data fields
//! - [`fan_out_state`]: one data field feeding `n` named providers
//! - [`computed_counter_store`]: the canonical squaring-counter store

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use silt_computed::{computed, computed_as, with_computed};
use silt_core::{FieldMap, State};
use silt_store::Store;

/// Build a state with `n` integer data fields `f0..f{n-1}`.
pub fn wide_state(n: usize) -> State {
    let mut state = State::new();
    for i in 0..n {
        state = state.field(format!("f{i}"), i as i64);
    }
    state
}

/// Build a state with one `base` field and `n` named providers, each
/// deriving its own output field from `base`.
pub fn fan_out_state(n: usize) -> State {
    let mut state = State::new().field("base", 1);
    for i in 0..n {
        let out = format!("derived{i}");
        state = state.merged(computed_as(format!("p{i}"), move |fields| {
            let base = fields.int("base").unwrap_or(0);
            FieldMap::from([(out.clone(), base + i as i64)])
        }));
    }
    state
}

/// Build the canonical computed-counter store: `count` plus a default
/// provider deriving `count_sq`.
pub fn computed_counter_store(initial: i64) -> Store {
    Store::create(with_computed(move |_set, _get, _api| {
        State::new().field("count", initial).merged(computed(|fields| {
            let count = fields.int("count").unwrap_or(0);
            FieldMap::from([("count_sq", count * count)])
        }))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use silt_computed::recompute;

    #[test]
    fn wide_state_has_n_fields() {
        let state = wide_state(32);
        assert_eq!(state.fields.len(), 32);
        assert_eq!(state.fields.int("f31"), Some(31));
    }

    #[test]
    fn fan_out_state_derives_n_fields() {
        let state = fan_out_state(8);
        assert_eq!(state.providers.len(), 8);
        let derived = recompute(&state);
        assert_eq!(derived.len(), 8);
        assert_eq!(derived.int("derived7"), Some(8));
    }

    #[test]
    fn computed_counter_store_is_consistent() {
        let store = computed_counter_store(3);
        assert_eq!(store.get_state().fields.int("count_sq"), Some(9));
    }
}
