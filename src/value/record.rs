//! Property access by name.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::Value;

/// Types whose elements can be read by property name.
///
/// A missing property is reported as `None` rather than an error; this is
/// what lets [`pluck`](crate::collection::pluck) yield "undefined" for
/// records lacking the property.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::value::Record;
///
/// let mut row = HashMap::new();
/// row.insert("id".to_string(), 7);
///
/// assert_eq!(row.property("id"), Some(&7));
/// assert_eq!(row.property("missing"), None);
/// ```
pub trait Record {
    /// The type of the properties.
    type Field;

    /// Returns the property called `name`, if present.
    fn property(&self, name: &str) -> Option<&Self::Field>;
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Field = V;

    #[inline]
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Record for BTreeMap<String, V> {
    type Field = V;

    #[inline]
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

/// Objects expose their properties; arrays expose their elements under
/// canonical decimal index names (`"0"`, `"1"`, ...), so `"01"` and `"+1"`
/// name nothing. Every other variant has no properties.
impl Record for Value {
    type Field = Self;

    fn property(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Object(properties) => properties.get(name),
            Self::Array(items) => name
                .parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == name)
                .and_then(|index| items.get(index)),
            _ => None,
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    type Field = R::Field;

    #[inline]
    fn property(&self, name: &str) -> Option<&Self::Field> {
        (**self).property(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_index_properties() {
        let array = Value::array(["a", "b"]);
        assert_eq!(array.property("1"), Some(&Value::from("b")));
        assert_eq!(array.property("2"), None);
        assert_eq!(array.property("first"), None);
    }

    #[test]
    fn test_array_index_names_are_canonical() {
        let array = Value::array(["a", "b"]);
        assert_eq!(array.property("0"), Some(&Value::from("a")));
        assert_eq!(array.property("+1"), None);
        assert_eq!(array.property("01"), None);
        assert_eq!(array.property("00"), None);
    }

    #[test]
    fn test_scalars_have_no_properties() {
        assert_eq!(Value::from("text").property("length"), None);
        assert_eq!(Value::Null.property("anything"), None);
    }

    #[test]
    fn test_btree_map_record() {
        let mut row = BTreeMap::new();
        row.insert("name".to_string(), "moe");
        assert_eq!(row.property("name"), Some(&"moe"));
    }
}
