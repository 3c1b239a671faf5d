//! The insertion-ordered [`FieldMap`] and its merge semantics.

use std::fmt;

use indexmap::IndexMap;

use crate::value::Value;

/// An insertion-ordered mapping from field name to [`Value`].
///
/// Iteration yields fields in first-insertion order, which stays stable
/// across merges: merging keeps an existing key in its original position
/// while taking the incoming value, and appends keys it has not seen.
/// This is the ordering contract the whole container relies on when
/// independently authored slices are composed into one state.
///
/// # Examples
///
/// ```
/// use silt_core::FieldMap;
///
/// let mut a = FieldMap::new();
/// a.insert("count", 1);
/// a.insert("label", "one");
///
/// let mut b = FieldMap::new();
/// b.insert("count", 2);
/// b.insert("extra", true);
///
/// a.merge(b);
/// assert_eq!(a.int("count"), Some(2));
/// assert_eq!(a.text("label"), Some("one"));
/// let keys: Vec<&str> = a.keys().collect();
/// assert_eq!(keys, ["count", "label", "extra"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldMap {
    entries: IndexMap<String, Value>,
}

impl FieldMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Number of fields in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a field, converting the value via [`Into<Value>`].
    ///
    /// An existing key keeps its position and takes the new value; a new
    /// key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether a field with this name exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The integer payload of a field, if present and [`Value::Int`].
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_int()
    }

    /// The float payload of a field, if present and [`Value::Float`].
    pub fn float(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_float()
    }

    /// The string payload of a field, if present and [`Value::Str`].
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Merge `other` into `self` with last-write-wins semantics.
    ///
    /// Keys already present keep their position and take `other`'s value;
    /// keys new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: FieldMap) {
        for (key, value) in other.entries {
            self.entries.insert(key, value);
        }
    }

    /// Consuming form of [`merge`](Self::merge).
    #[must_use]
    pub fn merged(mut self, other: FieldMap) -> FieldMap {
        self.merge(other);
        self
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for FieldMap {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn merge_overwrites_in_place_and_appends_new_keys() {
        let mut map = FieldMap::from([("a", 1), ("b", 2)]);
        map.merge(FieldMap::from([("c", 3), ("a", 10)]));

        assert_eq!(map.int("a"), Some(10));
        assert_eq!(map.int("b"), Some(2));
        assert_eq!(map.int("c"), Some(3));
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn reinserting_keeps_position() {
        let mut map = FieldMap::new();
        map.insert("x", 1);
        map.insert("y", 2);
        map.insert("x", 3);

        let pairs: Vec<(&str, i64)> = map
            .iter()
            .map(|(k, v)| (k, v.as_int().unwrap()))
            .collect();
        assert_eq!(pairs, [("x", 3), ("y", 2)]);
    }

    #[test]
    fn typed_lookups_miss_on_absent_or_mismatched_fields() {
        let map = FieldMap::from([("n", Value::Int(4)), ("s", Value::Str("hi".into()))]);
        assert_eq!(map.int("n"), Some(4));
        assert_eq!(map.int("s"), None);
        assert_eq!(map.int("missing"), None);
        assert_eq!(map.text("s"), Some("hi"));
        assert_eq!(map.float("n"), None);
    }

    fn arb_field_map() -> impl Strategy<Value = FieldMap> {
        prop::collection::vec(("[a-h]", -100i64..100), 0..8).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(k, v)| (k, Value::Int(v)))
                .collect::<FieldMap>()
        })
    }

    proptest! {
        #[test]
        fn merge_associative(
            a in arb_field_map(),
            b in arb_field_map(),
            c in arb_field_map(),
        ) {
            let left = a.clone().merged(b.clone()).merged(c.clone());
            let right = a.merged(b.merged(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn merge_identity(a in arb_field_map()) {
            prop_assert_eq!(a.clone().merged(FieldMap::new()), a.clone());
            prop_assert_eq!(FieldMap::new().merged(a.clone()), a);
        }

        #[test]
        fn merge_idempotent(a in arb_field_map()) {
            prop_assert_eq!(a.clone().merged(a.clone()), a);
        }

        #[test]
        fn merge_is_right_biased(a in arb_field_map(), b in arb_field_map()) {
            let merged = a.merged(b.clone());
            for (key, value) in b.iter() {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }

        #[test]
        fn merge_preserves_left_only_keys(a in arb_field_map(), b in arb_field_map()) {
            let merged = a.clone().merged(b.clone());
            for (key, value) in a.iter() {
                if !b.contains_key(key) {
                    prop_assert_eq!(merged.get(key), Some(value));
                }
            }
        }
    }
}
