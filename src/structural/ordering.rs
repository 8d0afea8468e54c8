//! Sorting by a derived criterion.

use std::cmp::Ordering;

use crate::collection::Collection;
use crate::value::Record;

/// Returns the values of `collection` sorted by the key `criterion` computes
/// for each of them.
///
/// The sort is stable: values with equal keys keep their enumeration order.
/// Keys that do not compare with themselves (such as `f64::NAN`) sort after
/// all others, in enumeration order. `criterion` runs exactly once per value.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
/// use underbar::structural::sort_by;
///
/// let words = collection!["banana", "fig", "apple", "kiwi"];
/// assert_eq!(
///     sort_by(&words, |word| word.len()),
///     vec!["fig", "kiwi", "apple", "banana"]
/// );
/// ```
pub fn sort_by<T, S, K, F>(collection: &Collection<T, S>, mut criterion: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut keyed: Vec<(K, &T)> = collection
        .values()
        .map(|value| (criterion(value), value))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| compare_keys(left, right));
    keyed.into_iter().map(|(_, value)| value.clone()).collect()
}

/// Returns the records of `collection` sorted by their property `name`.
///
/// Records lacking the property sort before all others and unordered
/// properties sort after them. Like [`sort_by`], the sort is stable.
///
/// # Examples
///
/// ```rust
/// use underbar::collection;
/// use underbar::structural::sort_by_property;
/// use underbar::value::Value;
///
/// let people = collection![
///     Value::object([("name", Value::from("curly")), ("age", Value::from(50))]),
///     Value::object([("name", Value::from("moe")), ("age", Value::from(30))]),
///     Value::object([("name", Value::from("shemp"))]),
/// ];
///
/// let names: Vec<String> = sort_by_property(&people, "age")
///     .iter()
///     .map(|person| person.as_object().unwrap()["name"].to_string())
///     .collect();
/// assert_eq!(names, vec!["shemp", "moe", "curly"]);
/// ```
pub fn sort_by_property<R, S>(collection: &Collection<R, S>, name: &str) -> Vec<R>
where
    R: Record + Clone,
    R::Field: PartialOrd,
{
    let mut records: Vec<&R> = collection.values().collect();
    records.sort_by(|left, right| compare_keys(&left.property(name), &right.property(name)));
    records.into_iter().cloned().collect()
}

/// Orders keys totally: keys that are unordered even against themselves go
/// last and tie with each other.
fn compare_keys<K: PartialOrd>(left: &K, right: &K) -> Ordering {
    match (is_ordered(left), is_ordered(right)) {
        (true, true) => left.partial_cmp(right).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

fn is_ordered<K: PartialOrd>(key: &K) -> bool {
    key.partial_cmp(key).is_some()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_sort_by_is_stable() {
        let pairs = Collection::sequence([(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
        assert_eq!(
            sort_by(&pairs, |(rank, _)| *rank),
            vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]
        );
    }

    #[test]
    fn test_sort_by_computes_each_key_once() {
        let calls = Cell::new(0);
        let numbers = Collection::sequence([3, 1, 2]);
        let sorted = sort_by(&numbers, |number| {
            calls.set(calls.get() + 1);
            *number
        });
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_sort_by_float_keys() {
        let numbers = Collection::sequence([2.5_f64, -1.0, 0.5]);
        assert_eq!(sort_by(&numbers, |number| *number), vec![-1.0, 0.5, 2.5]);
    }

    #[test]
    fn test_sort_by_places_nan_keys_last() {
        let numbers = Collection::sequence([f64::NAN, 2.0, f64::NAN, -1.0, 0.5]);
        let sorted = sort_by(&numbers, |number| *number);
        assert_eq!(&sorted[..3], &[-1.0, 0.5, 2.0]);
        assert!(sorted[3..].iter().all(|number| number.is_nan()));
    }

    #[test]
    fn test_sort_by_property_places_nan_after_numbers() {
        use crate::value::Value;

        let rows = Collection::sequence([
            Value::object([("score", Value::from(f64::NAN))]),
            Value::object([("score", Value::from(3))]),
            Value::object([("other", Value::Null)]),
            Value::object([("score", Value::from(1))]),
        ]);
        let scores: Vec<Option<Value>> = sort_by_property(&rows, "score")
            .iter()
            .map(|row| row.property("score").cloned())
            .collect();
        assert_eq!(scores[..3], [None, Some(Value::from(1)), Some(Value::from(3))]);
        assert!(scores[3].as_ref().and_then(Value::as_f64).is_some_and(f64::is_nan));
    }

    #[test]
    fn test_sort_by_leaves_input_untouched() {
        let numbers = Collection::sequence([3, 1, 2]);
        let _ = sort_by(&numbers, |number| *number);
        assert_eq!(numbers.as_slice(), Some(&[3, 1, 2][..]));
    }
}
