//! Thread-safe single-invocation function wrapper.
//!
//! [`ConcurrentOnce`] behaves like [`Once`](super::Once) but may be shared
//! between threads. The fired check and the invocation happen under one lock,
//! so even when many threads call it at the same moment the wrapped function
//! runs exactly once and every caller observes its result.
//!
//! # Panics and Poisoning
//!
//! If the wrapped function panics, the function is consumed and no value is
//! stored. Every later [`call`](ConcurrentOnce::call) panics and
//! [`try_call`](ConcurrentOnce::try_call) returns [`Error::Poisoned`].
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::thread;
//! use underbar::function::ConcurrentOnce;
//!
//! let invocations = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&invocations);
//! let connect = Arc::new(ConcurrentOnce::new(move |address: String| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     format!("connected to {address}")
//! }));
//!
//! let handles: Vec<_> = (0..8)
//!     .map(|worker| {
//!         let connect = Arc::clone(&connect);
//!         thread::spawn(move || connect.call(format!("node-{worker}")).clone())
//!     })
//!     .collect();
//!
//! let results: Vec<String> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
//! assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
//! assert_eq!(invocations.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use parking_lot::Mutex;
use tracing::trace;

use crate::error::Error;

/// A thread-safe function that runs at most once.
///
/// # Thread Safety
///
/// `ConcurrentOnce<F, A, R>` is `Send + Sync` when `F: Send` and
/// `R: Send + Sync`. Reading the cached value after the first call is
/// lock-free.
pub struct ConcurrentOnce<F, A, R> {
    function: Mutex<Option<F>>,
    value: OnceLock<R>,
    _arguments: PhantomData<fn(A)>,
}

impl<F, A, R> ConcurrentOnce<F, A, R>
where
    F: FnOnce(A) -> R,
{
    /// Wraps `function`. Nothing is invoked until the first call.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            function: Mutex::new(Some(function)),
            value: OnceLock::new(),
            _arguments: PhantomData,
        }
    }

    /// Invokes the function on the first call, then returns the cached result.
    ///
    /// Concurrent first callers block until the single invocation finishes.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics.
    /// - If the wrapper is already poisoned.
    pub fn call(&self, arguments: A) -> &R {
        match self.try_call(arguments) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Like [`call`](Self::call), but reports a poisoned wrapper as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Poisoned`] if an earlier invocation panicked.
    pub fn try_call(&self, arguments: A) -> Result<&R, Error> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let mut slot = self.function.lock();
        // Another caller may have fired while this one waited for the lock.
        if let Some(value) = self.value.get() {
            return Ok(value);
        }
        let function = slot.take().ok_or(Error::Poisoned {
            wrapper: "ConcurrentOnce",
        })?;

        trace!("concurrent once: invoking wrapped function");
        let value = function(arguments);
        Ok(self.value.get_or_init(|| value))
    }
}

impl<F, A, R> ConcurrentOnce<F, A, R> {
    /// Returns the cached result, if the function has fired.
    #[inline]
    pub fn get(&self) -> Option<&R> {
        self.value.get()
    }

    /// Returns `true` once the function has run successfully.
    #[inline]
    pub fn has_fired(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns `true` if the function panicked.
    ///
    /// Returns `false` while the first invocation is still running.
    pub fn is_poisoned(&self) -> bool {
        self.value.get().is_none()
            && self
                .function
                .try_lock()
                .is_some_and(|function| function.is_none())
    }

    /// Consumes the wrapper and returns the cached result, if any.
    pub fn into_inner(self) -> Option<R> {
        self.value.into_inner()
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for ConcurrentOnce<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter
                .debug_tuple("ConcurrentOnce")
                .field(value)
                .finish(),
            None => formatter.write_str("ConcurrentOnce(<pending>)"),
        }
    }
}

/// Wraps `function` so that it runs at most once, even across threads.
///
/// Shorthand for [`ConcurrentOnce::new`].
#[inline]
pub fn concurrent_once<F, A, R>(function: F) -> ConcurrentOnce<F, A, R>
where
    F: FnOnce(A) -> R,
{
    ConcurrentOnce::new(function)
}

static_assertions::assert_impl_all!(ConcurrentOnce<fn(u32) -> u32, u32, u32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_get_before_and_after_call() {
        let wrapped = concurrent_once(|value: u8| value + 1);
        assert_eq!(wrapped.get(), None);
        assert_eq!(*wrapped.call(1), 2);
        assert_eq!(wrapped.get(), Some(&2));
    }

    #[test]
    fn test_panic_poisons_wrapper() {
        let wrapped = concurrent_once(|_: ()| -> u8 { panic!("boom") });
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _ = wrapped.call(());
        }));

        assert!(result.is_err());
        assert!(wrapped.is_poisoned());
        assert_eq!(
            wrapped.try_call(()),
            Err(Error::Poisoned {
                wrapper: "ConcurrentOnce"
            })
        );
    }

    #[test]
    fn test_into_inner() {
        let wrapped = concurrent_once(|text: &str| text.to_uppercase());
        let _ = wrapped.call("abc");
        assert_eq!(wrapped.into_inner(), Some("ABC".to_string()));
    }
}
