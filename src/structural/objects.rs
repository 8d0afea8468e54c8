//! Merging keyed records.
//!
//! These are the only helpers in [`structural`](super) that mutate their
//! input: they update `target` in place and hand it back for chaining.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Copies every entry of each source into `target`.
///
/// Sources are applied in order, so a key present in several sources ends up
/// with the value from the last one.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::structural::extend;
///
/// let mut target = HashMap::from([("a".to_string(), 1)]);
/// let first = HashMap::from([("a".to_string(), 2), ("b".to_string(), 2)]);
/// let second = HashMap::from([("b".to_string(), 3)]);
///
/// extend(&mut target, &[&first, &second]);
///
/// assert_eq!(target["a"], 2);
/// assert_eq!(target["b"], 3);
/// ```
pub fn extend<'t, K, V, S, T>(
    target: &'t mut HashMap<K, V, S>,
    sources: &[&HashMap<K, V, T>],
) -> &'t mut HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    for source in sources {
        target.extend(
            source
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }
    target
}

/// Fills in keys of `target` that are missing, taking values from the sources.
///
/// Existing keys are never overwritten, including keys added by an earlier
/// source: the first source to provide a key wins.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::structural::defaults;
///
/// let mut options = HashMap::from([("flavor".to_string(), "chocolate")]);
/// let fallback = HashMap::from([
///     ("flavor".to_string(), "vanilla"),
///     ("sprinkles".to_string(), "lots"),
/// ]);
///
/// defaults(&mut options, &[&fallback]);
///
/// assert_eq!(options["flavor"], "chocolate");
/// assert_eq!(options["sprinkles"], "lots");
/// ```
pub fn defaults<'t, K, V, S, T>(
    target: &'t mut HashMap<K, V, S>,
    sources: &[&HashMap<K, V, T>],
) -> &'t mut HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    for source in sources {
        for (key, value) in *source {
            if !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    target
}
