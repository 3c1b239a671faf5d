//! The dynamic [`Value`] model for state fields.

use std::fmt;

use crate::fields::FieldMap;

/// A dynamically typed field value.
///
/// Composed states have an open field set, so a field slot must be able to
/// hold whatever a slice author puts in it: scalars, text, lists, or nested
/// maps. Derived-field providers read and produce `Value`s like any other
/// field data.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absent or explicitly cleared.
    Null,
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// An owned string.
    Str(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A nested field mapping.
    Map(FieldMap),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The boolean payload, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float payload, if this is a [`Value::Float`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The string payload, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The list payload, if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// The nested map payload, if this is a [`Value::Map`].
    pub fn as_map(&self) -> Option<&FieldMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl From<FieldMap> for Value {
    fn from(v: FieldMap) -> Self {
        Self::Map(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(map) => write!(f, "{map}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_matching_variant() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(3), Value::Int(3));
        assert_eq!(Value::from(3i64), Value::Int(3));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from("hi"), Value::Str("hi".to_string()));
    }

    #[test]
    fn accessors_are_strict_about_variants() {
        let v = Value::Int(7);
        assert_eq!(v.as_int(), Some(7));
        assert_eq!(v.as_float(), None);
        assert_eq!(v.as_str(), None);
        assert!(!v.is_null());
        assert!(Value::Null.is_null());
    }

    #[test]
    fn list_accessor_exposes_the_items() {
        let items = vec![Value::Int(1), Value::Str("two".into())];
        let list = Value::List(items.clone());
        assert_eq!(list.as_list(), Some(items.as_slice()));
        assert_eq!(list.as_map(), None);
        assert_eq!(Value::Int(1).as_list(), None);
    }

    #[test]
    fn display_renders_lists_and_nested_maps() {
        let list = Value::List(vec![Value::Int(1), Value::Str("two".into())]);
        assert_eq!(list.to_string(), "[1, two]");

        let mut map = FieldMap::new();
        map.insert("a", 1);
        map.insert("b", "x");
        assert_eq!(Value::Map(map).to_string(), "{a: 1, b: x}");
    }
}
