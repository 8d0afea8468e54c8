//! Collections that are either ordered sequences or key-value mappings.
//!
//! Every traversal operation in this crate accepts a [`Collection`], a sum type
//! with one variant per container shape:
//!
//! - [`Collection::Sequence`]: an ordered list, enumerated in ascending index order
//! - [`Collection::Mapping`]: string keys mapped to values, enumerated in hash-map order
//!
//! The only place that looks at the shape is [`Collection::entries`], which yields
//! uniform `(value, key)` pairs. The operations in [`traversal`] and
//! [`combinators`] consume that enumeration and never branch on the shape
//! themselves.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection;
//! use underbar::collection::{Key, Shape};
//!
//! let numbers = collection![1, 2, 3];
//! assert_eq!(numbers.shape(), Shape::Sequence);
//!
//! let ages = collection! { "alice" => 31, "bob" => 27 };
//! assert_eq!(ages.shape(), Shape::Mapping);
//! assert_eq!(ages.get(Key::Name("bob")), Some(&27));
//! ```

pub mod combinators;
pub mod traversal;

pub use combinators::{
    every, every_truthy, filter, invoke_method, invoke_sort, map, map_collection, partition,
    pluck, reduce, reduce_seeded, reject, some, some_truthy, truthy, uniq,
};
pub use traversal::{contains, each, index_of};

use std::collections::HashMap;
use std::collections::hash_map::{self, RandomState};
use std::fmt;
use std::hash::BuildHasher;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two container shapes a [`Collection`] can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Ordered, indexable `0..len`.
    Sequence,
    /// Unordered, keyed by unique strings.
    Mapping,
}

/// The position of an element within its collection.
///
/// Sequences report [`Key::Index`], mappings report [`Key::Name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key<'a> {
    /// Zero-based position in a sequence.
    Index(usize),
    /// Key of a mapping entry.
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Returns the index if this key belongs to a sequence.
    #[inline]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the name if this key belongs to a mapping.
    #[inline]
    pub const fn as_name(&self) -> Option<&'a str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(*name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

/// An ordered sequence or a string-keyed mapping.
///
/// The hasher parameter `S` only affects the [`Collection::Mapping`] variant.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::Collection;
///
/// let from_vec = Collection::from(vec!["a", "b"]);
/// assert_eq!(from_vec.len(), 2);
///
/// let mut scores = HashMap::new();
/// scores.insert("left".to_string(), 3);
/// let from_map = Collection::from(scores);
/// assert!(from_map.is_mapping());
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        untagged,
        bound(
            serialize = "T: Serialize, S: BuildHasher",
            deserialize = "T: Deserialize<'de>, S: BuildHasher + Default"
        )
    )
)]
pub enum Collection<T, S = RandomState> {
    /// Ordered elements.
    Sequence(Vec<T>),
    /// Keyed elements.
    Mapping(HashMap<String, T, S>),
}

impl<T> Collection<T> {
    /// Builds a sequence from any iterable, keeping its order.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::Sequence(items.into_iter().collect())
    }

    /// Builds a mapping from `(key, value)` pairs. Later duplicates overwrite earlier ones.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

impl<T, S> Collection<T, S> {
    /// Classifies the collection by its shape.
    #[inline]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Sequence(_) => Shape::Sequence,
            Self::Mapping(_) => Shape::Mapping,
        }
    }

    /// Returns `true` for the sequence shape.
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns `true` for the mapping shape.
    #[inline]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Enumerates every element together with its key.
    ///
    /// Sequences yield ascending indices; mappings yield their entries in
    /// unspecified order. Each call starts a fresh, independent pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::collection;
    /// use underbar::collection::Key;
    ///
    /// let letters = collection!['x', 'y'];
    /// let pairs: Vec<_> = letters.entries().collect();
    /// assert_eq!(pairs, vec![(&'x', Key::Index(0)), (&'y', Key::Index(1))]);
    /// ```
    #[inline]
    pub fn entries(&self) -> Entries<'_, T> {
        let inner = match self {
            Self::Sequence(items) => EntriesInner::Sequence(items.iter().enumerate()),
            Self::Mapping(entries) => EntriesInner::Mapping(entries.iter()),
        };
        Entries { inner }
    }

    /// Enumerates the elements without their keys.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries().map(|(value, _)| value)
    }

    /// Number of elements (sequence length or key count).
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(entries) => entries.len(),
        }
    }

    /// Returns `true` if the collection has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the elements as a slice if this is a sequence.
    #[inline]
    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            Self::Sequence(items) => Some(items),
            Self::Mapping(_) => None,
        }
    }

    /// Returns the underlying map if this is a mapping.
    #[inline]
    pub const fn as_mapping(&self) -> Option<&HashMap<String, T, S>> {
        match self {
            Self::Sequence(_) => None,
            Self::Mapping(entries) => Some(entries),
        }
    }

    /// Consumes the collection and returns its elements, dropping mapping keys.
    pub fn into_values(self) -> Vec<T> {
        match self {
            Self::Sequence(items) => items,
            Self::Mapping(entries) => entries.into_values().collect(),
        }
    }
}

impl<T, S: BuildHasher> Collection<T, S> {
    /// Looks up an element by key. A key of the wrong shape finds nothing.
    pub fn get(&self, key: Key<'_>) -> Option<&T> {
        match (self, key) {
            (Self::Sequence(items), Key::Index(index)) => items.get(index),
            (Self::Mapping(entries), Key::Name(name)) => entries.get(name),
            _ => None,
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items)
    }
}

impl<T: Clone> From<&[T]> for Collection<T> {
    fn from(items: &[T]) -> Self {
        Self::Sequence(items.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    fn from(items: [T; N]) -> Self {
        Self::Sequence(Vec::from(items))
    }
}

impl<T, S> From<HashMap<String, T, S>> for Collection<T, S> {
    fn from(entries: HashMap<String, T, S>) -> Self {
        Self::Mapping(entries)
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Collection<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(items) => formatter.debug_tuple("Sequence").field(items).finish(),
            Self::Mapping(entries) => formatter.debug_tuple("Mapping").field(entries).finish(),
        }
    }
}

impl<T: PartialEq, S: BuildHasher> PartialEq for Collection<T, S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Sequence(left), Self::Sequence(right)) => left == right,
            (Self::Mapping(left), Self::Mapping(right)) => left == right,
            _ => false,
        }
    }
}

impl<T: Eq, S: BuildHasher> Eq for Collection<T, S> {}

impl<'a, T, S> IntoIterator for &'a Collection<T, S> {
    type Item = (&'a T, Key<'a>);
    type IntoIter = Entries<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Iterator over the `(value, key)` pairs of a [`Collection`].
///
/// Created by [`Collection::entries`].
#[derive(Clone)]
pub struct Entries<'a, T> {
    inner: EntriesInner<'a, T>,
}

#[derive(Clone)]
enum EntriesInner<'a, T> {
    Sequence(Enumerate<slice::Iter<'a, T>>),
    Mapping(hash_map::Iter<'a, String, T>),
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (&'a T, Key<'a>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Sequence(items) => {
                items.next().map(|(index, value)| (value, Key::Index(index)))
            }
            EntriesInner::Mapping(entries) => entries
                .next()
                .map(|(name, value)| (value, Key::Name(name.as_str()))),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Sequence(items) => items.size_hint(),
            EntriesInner::Mapping(entries) => entries.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Entries<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Entries")
            .field("remaining", &self.len())
            .finish()
    }
}

/// Builds a [`Collection`].
///
/// A comma-separated list builds a sequence, `key => value` pairs build a
/// mapping, and an empty invocation builds an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
///
/// let empty: underbar::collection::Collection<i32> = collection![];
/// assert!(empty.is_empty());
///
/// let sequence = collection![1, 2, 3];
/// assert!(sequence.is_sequence());
///
/// let mapping = collection! { "a" => 1, "b" => 2 };
/// assert!(mapping.is_mapping());
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::collection::Collection::sequence(::std::vec::Vec::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::collection::Collection::mapping([$(($key, $value)),+])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::collection::Collection::sequence([$($value),+])
    };
}
