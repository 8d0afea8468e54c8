//! Traversal primitives built directly on [`Collection::entries`].
//!
//! - [`each`]: visit every element for its side effects
//! - [`index_of`]: position of the first equal element of a sequence
//! - [`contains`]: membership test over either shape

use super::{Collection, Key};

/// Calls `iterator(value, key, collection)` once for every element.
///
/// Sequences are visited in ascending index order, mappings in their
/// enumeration order. An empty collection results in zero calls.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
/// use underbar::collection::{each, Key};
///
/// let items = collection![10, 20];
/// let mut visited = Vec::new();
/// each(&items, |value, key, _| visited.push((*value, key)));
/// assert_eq!(visited, vec![(10, Key::Index(0)), (20, Key::Index(1))]);
/// ```
pub fn each<'a, T, S, F>(collection: &'a Collection<T, S>, mut iterator: F)
where
    F: FnMut(&'a T, Key<'a>, &'a Collection<T, S>),
{
    for (value, key) in collection.entries() {
        iterator(value, key, collection);
    }
}

/// Returns the index of the first element equal to `target`.
///
/// `None` plays the role of the `-1` "not found" sentinel.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// assert_eq!(index_of(&[3, 5, 5], &5), Some(1));
/// assert_eq!(index_of(&[3, 5, 5], &9), None);
/// ```
#[inline]
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.iter().position(|element| element == target)
}

/// Returns `true` if any element of the collection equals `target`.
///
/// Works for both shapes; for mappings only values are compared, never keys.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
/// use underbar::collection::contains;
///
/// assert!(contains(&collection![1, 2, 3], &2));
/// assert!(contains(&collection! { "a" => "x" }, &"x"));
/// assert!(!contains(&collection! { "a" => "x" }, &"a"));
/// ```
#[inline]
pub fn contains<T: PartialEq, S>(collection: &Collection<T, S>, target: &T) -> bool {
    collection.values().any(|value| value == target)
}
