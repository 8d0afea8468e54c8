//! Slicing and set-like helpers over sequences.

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns the first element, if any.
#[inline]
pub fn first<T>(array: &[T]) -> Option<&T> {
    array.first()
}

/// Returns a copy of the first `count` elements (all of them when `count`
/// exceeds the length). The input is never modified.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::first_n;
///
/// let numbers = vec![1, 2, 3];
/// assert_eq!(first_n(&numbers, 2), vec![1, 2]);
/// assert_eq!(first_n(&numbers, 10), vec![1, 2, 3]);
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
pub fn first_n<T: Clone>(array: &[T], count: usize) -> Vec<T> {
    array[..count.min(array.len())].to_vec()
}

/// Returns the last element, if any.
#[inline]
pub fn last<T>(array: &[T]) -> Option<&T> {
    array.last()
}

/// Returns a copy of the last `count` elements (all of them when `count`
/// exceeds the length). The input is never modified.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn last_n<T: Clone>(array: &[T], count: usize) -> Vec<T> {
    array[array.len().saturating_sub(count)..].to_vec()
}

/// Groups the elements of several arrays by position.
///
/// The result has one row per position of the longest array; shorter arrays
/// contribute `None` past their end.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::zip;
///
/// let letters = ["a", "b", "c"];
/// let numbers = ["1", "2"];
/// assert_eq!(
///     zip(&[&letters[..], &numbers[..]]),
///     vec![
///         vec![Some("a"), Some("1")],
///         vec![Some("b"), Some("2")],
///         vec![Some("c"), None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(arrays: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = arrays.iter().map(|array| array.len()).max().unwrap_or(0);
    (0..longest)
        .map(|position| {
            arrays
                .iter()
                .map(|array| array.get(position).cloned())
                .collect()
        })
        .collect()
}

/// Returns the distinct elements of the first array that appear in every
/// other array, in first-array order.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::intersection;
///
/// let shared = intersection(&[&["moe", "curly", "larry", "moe"][..], &["moe", "groucho"][..]]);
/// assert_eq!(shared, vec!["moe"]);
/// ```
pub fn intersection<T: PartialEq + Clone>(arrays: &[&[T]]) -> Vec<T> {
    let Some((head, rest)) = arrays.split_first() else {
        return Vec::new();
    };
    head.iter().fold(Vec::new(), |mut shared, element| {
        if !shared.contains(element) && rest.iter().all(|other| other.contains(element)) {
            shared.push(element.clone());
        }
        shared
    })
}

/// Returns the elements of `array` that appear in none of `others`.
///
/// Duplicates within `array` are kept.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10][..]]), vec![1, 3, 4]);
/// ```
pub fn difference<T: PartialEq + Clone>(array: &[T], others: &[&[T]]) -> Vec<T> {
    array
        .iter()
        .filter(|element| !others.iter().any(|other| other.contains(element)))
        .cloned()
        .collect()
}

/// Returns a randomly permuted copy of `array`, using the thread-local RNG.
pub fn shuffle<T: Clone>(array: &[T]) -> Vec<T> {
    shuffle_with(array, &mut rand::thread_rng())
}

/// Returns a randomly permuted copy of `array`, drawing from `rng`.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::structural::shuffle_with;
///
/// let deck = [1, 2, 3, 4, 5];
/// let first = shuffle_with(&deck, &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&deck, &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(array: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = array.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
