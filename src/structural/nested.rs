//! Arbitrarily nested arrays.

/// An element of a nested array: either a leaf value or another array.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::Nested;
///
/// // [1, [2], [3, [[[4]]]]]
/// let nested = Nested::list([
///     Nested::Item(1),
///     Nested::list([Nested::Item(2)]),
///     Nested::list([
///         Nested::Item(3),
///         Nested::list([Nested::list([Nested::list([Nested::Item(4)])])]),
///     ]),
/// ]);
/// assert_eq!(nested.depth(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A leaf value.
    Item(T),
    /// A nested array.
    List(Vec<Self>),
}

impl<T> Nested<T> {
    /// Builds a [`Nested::List`] from any iterator of nested elements.
    pub fn list<I: IntoIterator<Item = Self>>(items: I) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Number of list levels above the deepest leaf; a bare item has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((node, level)) = pending.pop() {
            if let Self::List(children) = node {
                deepest = deepest.max(level + 1);
                pending.extend(children.iter().map(|child| (child, level + 1)));
            }
        }
        deepest
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Item(value)
    }
}

/// Collects every leaf of `nested` into a flat vector, depth-first and
/// left-to-right.
///
/// Depth is unbounded: the traversal keeps its own stack instead of
/// recursing.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::{Nested, flatten};
///
/// let nested = Nested::list([
///     Nested::Item(1),
///     Nested::list([Nested::Item(2), Nested::list([Nested::Item(3)])]),
///     Nested::list([]),
///     Nested::Item(4),
/// ]);
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(nested: &Nested<T>) -> Vec<T> {
    let mut result = Vec::new();
    flatten_into(nested, &mut result);
    result
}

/// Appends every leaf of `nested` to `result`, in the order of [`flatten`].
pub fn flatten_into<T: Clone>(nested: &Nested<T>, result: &mut Vec<T>) {
    let mut pending = vec![nested];
    while let Some(node) = pending.pop() {
        match node {
            Nested::Item(value) => result.push(value.clone()),
            Nested::List(children) => pending.extend(children.iter().rev()),
        }
    }
}
