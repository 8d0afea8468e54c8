//! Derived combinators: filtering, transformation, reduction and predicates.
//!
//! Every operation here is a fold over [`Collection::entries`] (or a plain
//! slice for the sequence-only operations) and builds a fresh result. None of
//! them modifies its input.
//!
//! Predicates may return any [`Truthy`] type, so `|x: &i32| *x % 2` works as
//! well as `|x: &i32| *x % 2 == 1`.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection;
//! use underbar::collection::{filter, reduce_seeded, reject};
//!
//! let numbers = collection![1, 2, 3, 4, 5, 6];
//!
//! assert_eq!(filter(&numbers, |n: &i32| n % 2 == 0), vec![2, 4, 6]);
//! assert_eq!(reject(&numbers, |n: &i32| n % 2 == 0), vec![1, 3, 5]);
//! assert_eq!(reduce_seeded(&numbers, |sum, n, _| sum + n, 0), 21);
//! ```

use std::cmp::Ordering;
use std::hash::BuildHasher;

use super::{Collection, Key};
use crate::error::Error;
use crate::value::{Invoke, Record, Truthy, Value};

/// The default predicate: `value.is_truthy()`.
///
/// [`every_truthy`] and [`some_truthy`] both use this function, so the two
/// agree on what counts as true.
#[inline]
pub fn truthy<T: Truthy + ?Sized>(value: &T) -> bool {
    value.is_truthy()
}

/// Returns the elements whose predicate result is truthy, in encounter order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
/// use underbar::collection::filter;
///
/// let words = collection!["", "a", "", "b"];
/// // The predicate may return the element itself; empty strings are falsy.
/// assert_eq!(filter(&words, |word: &&str| *word), vec!["a", "b"]);
/// ```
pub fn filter<T, S, P, R>(collection: &Collection<T, S>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> R,
    R: Truthy,
{
    collection
        .values()
        .filter(|value| predicate(*value).is_truthy())
        .cloned()
        .collect()
}

/// Returns the elements whose predicate result is falsy: the complement of
/// [`filter`].
pub fn reject<T, S, P, R>(collection: &Collection<T, S>, mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> R,
    R: Truthy,
{
    filter(collection, |value| !predicate(value).is_truthy())
}

/// Splits the elements into `(filter, reject)` with a single predicate call
/// per element.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
/// use underbar::collection::partition;
///
/// let (small, large) = partition(&collection![1, 10, 2, 20], |n: &i32| *n < 5);
/// assert_eq!(small, vec![1, 2]);
/// assert_eq!(large, vec![10, 20]);
/// ```
pub fn partition<T, S, P, R>(collection: &Collection<T, S>, mut predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> R,
    R: Truthy,
{
    collection
        .values()
        .cloned()
        .partition(|value| predicate(value).is_truthy())
}

/// Returns a copy of `array` without repeated elements.
///
/// The first occurrence of each element is kept, in its original position.
/// Elements are compared with `==`, so no `Hash` or `Ord` bound is required.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(&[1, 1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// assert_eq!(uniq::<i32>(&[]), Vec::<i32>::new());
/// ```
pub fn uniq<T: PartialEq + Clone>(array: &[T]) -> Vec<T> {
    array.iter().fold(Vec::new(), |mut unique, element| {
        if !unique.contains(element) {
            unique.push(element.clone());
        }
        unique
    })
}

/// Returns `transform(element)` for every element of `array`, in order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |n| n * 10), vec![10, 20, 30]);
/// ```
pub fn map<T, U, F>(array: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    array.iter().map(transform).collect()
}

/// Applies `transform(value, key)` to every element and keeps the shape:
/// a sequence maps to a sequence, a mapping to a mapping with the same keys.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
/// use underbar::collection::{map_collection, Key};
///
/// let prices = collection! { "tea" => 3, "cake" => 5 };
/// let doubled = map_collection(&prices, |price, _| price * 2);
/// assert_eq!(doubled.get(Key::Name("cake")), Some(&10));
/// ```
pub fn map_collection<T, U, S, F>(collection: &Collection<T, S>, mut transform: F) -> Collection<U, S>
where
    S: BuildHasher + Clone,
    F: FnMut(&T, Key<'_>) -> U,
{
    match collection {
        Collection::Sequence(items) => Collection::Sequence(
            items
                .iter()
                .enumerate()
                .map(|(index, value)| transform(value, Key::Index(index)))
                .collect(),
        ),
        Collection::Mapping(entries) => {
            let mut mapped = std::collections::HashMap::with_capacity_and_hasher(
                entries.len(),
                entries.hasher().clone(),
            );
            for (name, value) in entries {
                mapped.insert(name.clone(), transform(value, Key::Name(name)));
            }
            Collection::Mapping(mapped)
        }
    }
}

/// Reads the property `name` of every record.
///
/// Records lacking the property yield `None` instead of failing.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::pluck;
/// use underbar::value::Value;
///
/// let people = [
///     Value::object([("name", Value::from("moe")), ("age", Value::from(30))]),
///     Value::object([("name", Value::from("curly"))]),
/// ];
///
/// assert_eq!(pluck(&people, "age"), vec![Some(Value::from(30)), None]);
/// ```
pub fn pluck<R>(array: &[R], name: &str) -> Vec<Option<R::Field>>
where
    R: Record,
    R::Field: Clone,
{
    map(array, |record| record.property(name).cloned())
}

/// Calls the method `method` on every element and collects the results.
///
/// # Errors
///
/// Stops at the first element that rejects the call and returns its error
/// ([`Error::UnknownMethod`] or [`Error::InvalidArguments`]).
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke_method;
/// use underbar::value::Value;
///
/// let shouted = invoke_method(&["dog", "cat"], "toUpperCase", &[]).unwrap();
/// assert_eq!(shouted, vec![Value::from("DOG"), Value::from("CAT")]);
/// ```
pub fn invoke_method<E: Invoke>(
    list: &[E],
    method: &str,
    arguments: &[Value],
) -> Result<Vec<E::Output>, Error> {
    list.iter()
        .map(|element| element.invoke(method, arguments))
        .collect()
}

/// Sorts a copy of every element of `list` with `comparator`.
///
/// Each element is itself a sequence; the input is left untouched.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke_sort;
///
/// let rows = vec![vec![5, 1, 7], vec![3, 2, 1]];
/// let descending = invoke_sort(&rows, |left, right| right.cmp(left));
/// assert_eq!(descending, vec![vec![7, 5, 1], vec![3, 2, 1]]);
/// ```
pub fn invoke_sort<E, F>(list: &[Vec<E>], mut comparator: F) -> Vec<Vec<E>>
where
    E: Clone,
    F: FnMut(&E, &E) -> Ordering,
{
    map(list, |element| {
        let mut sorted = element.clone();
        sorted.sort_by(&mut comparator);
        sorted
    })
}

/// Folds the collection, seeding the accumulator with its first element.
///
/// `iterator(accumulator, value, key)` is called for the second element
/// onwards; with a single element it is never called.
///
/// # Errors
///
/// Returns [`Error::EmptyReduction`] for an empty collection, since there is
/// no element to seed the accumulator with.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
/// use underbar::collection::reduce;
/// use underbar::Error;
///
/// assert_eq!(reduce(&collection![1, 2, 3, 4], |sum, n, _| sum + n), Ok(10));
///
/// let empty: underbar::collection::Collection<i32> = collection![];
/// assert_eq!(reduce(&empty, |sum, n, _| sum + n), Err(Error::EmptyReduction));
/// ```
pub fn reduce<T, S, F>(collection: &Collection<T, S>, mut iterator: F) -> Result<T, Error>
where
    T: Clone,
    F: FnMut(T, &T, Key<'_>) -> T,
{
    let mut entries = collection.entries();
    let (first, _) = entries.next().ok_or(Error::EmptyReduction)?;
    Ok(entries.fold(first.clone(), |accumulator, (value, key)| {
        iterator(accumulator, value, key)
    }))
}

/// Folds the collection starting from `initial`.
///
/// The accumulator may be of any type; nothing assumes numeric elements.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
/// use underbar::collection::reduce_seeded;
///
/// let words = collection!["a", "bb", "ccc"];
/// let total = reduce_seeded(&words, |length, word, _| length + word.len(), 0);
/// assert_eq!(total, 6);
/// ```
pub fn reduce_seeded<T, A, S, F>(collection: &Collection<T, S>, mut iterator: F, initial: A) -> A
where
    F: FnMut(A, &T, Key<'_>) -> A,
{
    collection
        .entries()
        .fold(initial, |accumulator, (value, key)| {
            iterator(accumulator, value, key)
        })
}

/// Returns `true` if the predicate result is truthy for every element.
///
/// Vacuously `true` for an empty collection. Stops at the first falsy result.
pub fn every<T, S, P, R>(collection: &Collection<T, S>, mut predicate: P) -> bool
where
    P: FnMut(&T) -> R,
    R: Truthy,
{
    collection.values().all(|value| predicate(value).is_truthy())
}

/// [`every`] with the default [`truthy`] predicate.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
/// use underbar::collection::every_truthy;
///
/// assert!(every_truthy(&collection![1, 2, 3]));
/// assert!(!every_truthy(&collection![1, 0, 3]));
/// ```
pub fn every_truthy<T: Truthy, S>(collection: &Collection<T, S>) -> bool {
    every(collection, truthy::<T>)
}

/// Returns `true` if the predicate result is truthy for at least one element.
///
/// `false` for an empty collection. Stops at the first truthy result.
pub fn some<T, S, P, R>(collection: &Collection<T, S>, mut predicate: P) -> bool
where
    P: FnMut(&T) -> R,
    R: Truthy,
{
    collection.values().any(|value| predicate(value).is_truthy())
}

/// [`some`] with the default [`truthy`] predicate.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
/// use underbar::collection::some_truthy;
///
/// assert!(some_truthy(&collection!["", "x"]));
/// assert!(!some_truthy(&collection![0, 0]));
/// ```
pub fn some_truthy<T: Truthy, S>(collection: &Collection<T, S>) -> bool {
    some(collection, truthy::<T>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_every_short_circuits() {
        let calls = Cell::new(0);
        let numbers = Collection::from(vec![1, 0, 1, 1]);
        let result = every(&numbers, |n: &i32| {
            calls.set(calls.get() + 1);
            *n
        });

        assert!(!result);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_some_short_circuits() {
        let calls = Cell::new(0);
        let numbers = Collection::from(vec![0, 5, 0]);
        let result = some(&numbers, |n: &i32| {
            calls.set(calls.get() + 1);
            *n
        });

        assert!(result);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_reduce_single_element_never_calls_iterator() {
        let single = Collection::from(vec![7]);
        let result = reduce(&single, |_, _, _| unreachable!("no second element"));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_reduce_passes_keys() {
        let letters = Collection::from(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        let labelled = reduce(&letters, |accumulator, letter, key| {
            format!("{accumulator}|{key}:{letter}")
        });
        assert_eq!(labelled, Ok("a|1:b|2:c".to_string()));
    }

    #[test]
    fn test_map_collection_keeps_mapping_keys() {
        let mapping = Collection::mapping([("a", 1), ("b", 2)]);
        let labels = map_collection(&mapping, |value, key| format!("{key}={value}"));
        assert_eq!(labels.get(Key::Name("a")), Some(&"a=1".to_string()));
        assert_eq!(labels.get(Key::Name("b")), Some(&"b=2".to_string()));
    }

    #[test]
    fn test_uniq_single_element() {
        assert_eq!(uniq(&["only"]), vec!["only"]);
    }
}
