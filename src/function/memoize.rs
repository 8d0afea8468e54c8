//! Argument-keyed memoization.
//!
//! [`Memoize`] wraps a function of one hashable argument and remembers the
//! result for every argument it has seen. A repeated argument returns the
//! cached result without invoking the function again.
//!
//! The cache hasher is chosen at compile time: `std`'s `RandomState` by
//! default, `FxBuildHasher` with the `fxhash` feature, or `ahash::RandomState`
//! with the `ahash` feature.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::function::memoize;
//!
//! let calls = Cell::new(0);
//! let square = memoize(|n: u64| {
//!     calls.set(calls.get() + 1);
//!     n * n
//! });
//!
//! assert_eq!(square.call(5), 25);
//! assert_eq!(square.call(5), 25);
//! assert_eq!(calls.get(), 1);
//!
//! assert_eq!(square.call(7), 49);
//! assert_eq!(calls.get(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;
use tracing::trace;

/// Hasher of the memoization caches.
#[cfg(feature = "fxhash")]
pub type CacheHasher = rustc_hash::FxBuildHasher;

/// Hasher of the memoization caches.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type CacheHasher = ahash::RandomState;

/// Hasher of the memoization caches.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type CacheHasher = std::collections::hash_map::RandomState;

/// A single-argument function with a private result cache.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `K` - The argument type, used as the cache key
/// * `R` - The result type; cached results are returned as clones
///
/// # Thread Safety
///
/// This type is NOT thread-safe. For concurrent callers use
/// [`ConcurrentMemoize`].
pub struct Memoize<F, K, R> {
    function: F,
    cache: RefCell<HashMap<K, R, CacheHasher>>,
}

impl<F, K, R> Memoize<F, K, R>
where
    F: Fn(K) -> R,
    K: Eq + Hash + Clone,
    R: Clone,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::default()),
        }
    }

    /// Returns the cached result for `argument`, computing it on a miss.
    ///
    /// The cache is not borrowed while the function runs, so the function may
    /// itself call other memoized functions.
    pub fn call(&self, argument: K) -> R {
        if let Some(cached) = self.cache.borrow().get(&argument) {
            return cached.clone();
        }

        trace!(cached = self.cache.borrow().len(), "memoize: cache miss");
        let result = (self.function)(argument.clone());
        self.cache
            .borrow_mut()
            .entry(argument)
            .or_insert(result)
            .clone()
    }
}

impl<F, K: Eq + Hash, R> Memoize<F, K, R> {
    /// Returns `true` if a result for `argument` is cached.
    pub fn is_cached(&self, argument: &K) -> bool {
        self.cache.borrow().contains_key(argument)
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<F, K, R> fmt::Debug for Memoize<F, K, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

/// A thread-safe [`Memoize`].
///
/// Lookup, invocation and insertion run as one critical section, so each
/// distinct argument is computed exactly once even under concurrent calls.
/// The price is that calls are serialized while the function runs.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
/// use underbar::function::ConcurrentMemoize;
///
/// let invocations = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&invocations);
/// let double = Arc::new(ConcurrentMemoize::new(move |n: u32| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     n * 2
/// }));
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let double = Arc::clone(&double);
///         thread::spawn(move || double.call(21))
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 42);
/// }
/// assert_eq!(invocations.load(Ordering::SeqCst), 1);
/// ```
pub struct ConcurrentMemoize<F, K, R> {
    function: F,
    cache: Mutex<HashMap<K, R, CacheHasher>>,
}

impl<F, K, R> ConcurrentMemoize<F, K, R>
where
    F: Fn(K) -> R,
    K: Eq + Hash + Clone,
    R: Clone,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: Mutex::new(HashMap::default()),
        }
    }

    /// Returns the cached result for `argument`, computing it on a miss.
    ///
    /// The wrapped function must not call back into the same wrapper; the
    /// cache lock is held while it runs.
    pub fn call(&self, argument: K) -> R {
        let mut cache = self.cache.lock();
        if let Some(cached) = cache.get(&argument) {
            return cached.clone();
        }

        trace!(cached = cache.len(), "concurrent memoize: cache miss");
        let result = (self.function)(argument.clone());
        cache.insert(argument, result.clone());
        result
    }
}

impl<F, K: Eq + Hash, R> ConcurrentMemoize<F, K, R> {
    /// Returns `true` if a result for `argument` is cached.
    pub fn is_cached(&self, argument: &K) -> bool {
        self.cache.lock().contains_key(argument)
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

impl<F, K, R> fmt::Debug for ConcurrentMemoize<F, K, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ConcurrentMemoize")
            .field("cached", &self.cache.lock().len())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` with a result cache keyed by its argument.
///
/// Shorthand for [`Memoize::new`].
pub fn memoize<F, K, R>(function: F) -> Memoize<F, K, R>
where
    F: Fn(K) -> R,
    K: Eq + Hash + Clone,
    R: Clone,
{
    Memoize::new(function)
}

/// Wraps `function` with a thread-safe result cache keyed by its argument.
///
/// Shorthand for [`ConcurrentMemoize::new`].
pub fn concurrent_memoize<F, K, R>(function: F) -> ConcurrentMemoize<F, K, R>
where
    F: Fn(K) -> R,
    K: Eq + Hash + Clone,
    R: Clone,
{
    ConcurrentMemoize::new(function)
}

static_assertions::assert_impl_all!(ConcurrentMemoize<fn(u32) -> u32, u32, u32>: Send, Sync);
static_assertions::assert_not_impl_any!(Memoize<fn(u32) -> u32, u32, u32>: Sync);
