//! The recompute pass: run every registered provider over a candidate state.

use silt_core::{FieldMap, State};

/// Compute the derived-field fragment for a candidate state.
///
/// Providers run in registration order. Each one receives the candidate's
/// data fields; outputs never feed into one another within a pass, they
/// meet only in the accumulator, where a later provider's field wins a name
/// collision. The candidate itself is not modified.
///
/// Recomputation is unconditional: every registered provider runs on every
/// call, whether or not the fields it reads have changed.
pub fn recompute(state: &State) -> FieldMap {
    let mut derived = FieldMap::new();
    for entry in state.providers.iter() {
        derived.merge(entry.run(&state.fields));
    }
    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use silt_core::{ProviderEntry, ProviderKey, Value};

    #[test]
    fn providers_run_in_registration_order_with_last_write_wins() {
        let state = State::new()
            .provider(ProviderEntry::from_fn(ProviderKey::named("first"), |_| {
                FieldMap::from([("shared", 1), ("a", 1)])
            }))
            .provider(ProviderEntry::from_fn(ProviderKey::named("second"), |_| {
                FieldMap::from([("shared", 2), ("b", 2)])
            }));

        let derived = recompute(&state);
        assert_eq!(derived.int("shared"), Some(2));
        assert_eq!(derived.int("a"), Some(1));
        assert_eq!(derived.int("b"), Some(2));
        let keys: Vec<&str> = derived.keys().collect();
        assert_eq!(keys, ["shared", "a", "b"]);
    }

    #[test]
    fn every_provider_sees_the_candidate_not_other_outputs() {
        let state = State::new()
            .field("base", 1)
            .provider(ProviderEntry::from_fn(ProviderKey::named("first"), |fields| {
                FieldMap::from([("first_out", fields.int("base").unwrap() + 10)])
            }))
            .provider(ProviderEntry::from_fn(
                ProviderKey::named("second"),
                |fields| {
                    let mut out = FieldMap::new();
                    out.insert("saw_first", fields.contains_key("first_out"));
                    out
                },
            ));

        let derived = recompute(&state);
        assert_eq!(derived.int("first_out"), Some(11));
        assert_eq!(
            derived.get("saw_first").and_then(Value::as_bool),
            Some(false)
        );
    }

    #[test]
    fn no_providers_yield_an_empty_fragment() {
        let state = State::new().field("a", 1);
        assert!(recompute(&state).is_empty());
    }

    #[test]
    fn derived_values_follow_the_candidate_fields() {
        let square = |fields: &FieldMap| {
            let count = fields.int("count").unwrap();
            FieldMap::from([("count_sq", count * count)])
        };
        let state = State::new()
            .field("count", 3)
            .provider(ProviderEntry::from_fn(ProviderKey::Default, square));

        assert_eq!(recompute(&state).int("count_sq"), Some(9));
    }
}
