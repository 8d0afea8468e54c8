//! Single-invocation function wrapper.
//!
//! This module provides the [`Once`] type, which runs its function on the
//! first call and replays the cached result on every later call.
//!
//! # Examples
//!
//! ```rust
//! use underbar::function::once;
//!
//! let initialize = once(|seed: u32| {
//!     println!("Initializing with {seed}...");
//!     seed * 2
//! });
//!
//! assert_eq!(*initialize.call(21), 42);
//! // The argument of later calls is ignored.
//! assert_eq!(*initialize.call(1000), 42);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::error::Error;

/// The internal state of a [`Once`] wrapper.
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// The function has not been called yet.
    Pending(F),
    /// The function ran and returned this value.
    Fired(R),
    /// The function panicked. The wrapper is unusable.
    Poisoned,
}

/// A function that runs at most once.
///
/// The first [`call`](Self::call) invokes the wrapped function with its
/// arguments and caches the return value; every later call returns the
/// cached value without invoking anything, whatever its arguments.
///
/// Functions of several arguments take them as a tuple.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `A` - The argument type
/// * `R` - The return type
///
/// # Thread Safety
///
/// This type is NOT thread-safe. For concurrent callers use
/// [`ConcurrentOnce`](super::ConcurrentOnce).
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::function::Once;
///
/// let calls = Cell::new(0);
/// let add = Once::new(|(left, right): (i32, i32)| {
///     calls.set(calls.get() + 1);
///     left + right
/// });
///
/// assert_eq!(*add.call((1, 2)), 3);
/// assert_eq!(*add.call((10, 20)), 3);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Once<F, A, R> {
    state: RefCell<OnceState<F, R>>,
    _arguments: PhantomData<fn(A)>,
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    /// Wraps `function`. Nothing is invoked until the first call.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
            _arguments: PhantomData,
        }
    }

    /// Invokes the function on the first call, then returns the cached result.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics; the wrapper is then poisoned.
    /// - If the wrapper is already poisoned.
    /// - If called re-entrantly from inside the wrapped function.
    pub fn call(&self, arguments: A) -> Ref<'_, R> {
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
    ///
    /// # Panics
    ///
    /// If the wrapped function itself panics during this call.
    pub fn try_call(&self, arguments: A) -> Result<Ref<'_, R>, Error> {
        let pending = match &*self.state.borrow() {
            OnceState::Fired(_) => false,
            OnceState::Poisoned => return Err(Error::Poisoned { wrapper: "Once" }),
            OnceState::Pending(_) => true,
        };

        if pending {
            self.fire(arguments);
        }

        Ok(Ref::map(self.state.borrow(), |state| match state {
            OnceState::Fired(value) => value,
            _ => unreachable!("Once should have fired at this point"),
        }))
    }

    /// Takes the function out (leaving `Poisoned` behind in case it panics),
    /// runs it without holding a borrow, then stores the result.
    fn fire(&self, arguments: A) {
        let OnceState::Pending(function) =
            std::mem::replace(&mut *self.state.borrow_mut(), OnceState::Poisoned)
        else {
            unreachable!("fire is only called from the Pending state")
        };

        trace!("once: invoking wrapped function");
        let value = function(arguments);
        *self.state.borrow_mut() = OnceState::Fired(value);
    }
}

impl<F, A, R> Once<F, A, R> {
    /// Returns the cached result, if the function has fired.
    pub fn get(&self) -> Option<Ref<'_, R>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            OnceState::Fired(value) => Some(value),
            _ => None,
        })
        .ok()
    }

    /// Returns `true` once the function has run successfully.
    pub fn has_fired(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Fired(_))
    }

    /// Returns `true` if the function panicked.
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }

    /// Consumes the wrapper and returns the cached result, if any.
    pub fn into_inner(self) -> Option<R> {
        match self.state.into_inner() {
            OnceState::Fired(value) => Some(value),
            OnceState::Pending(_) | OnceState::Poisoned => None,
        }
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Pending(_) => formatter.write_str("Once(<pending>)"),
            OnceState::Fired(value) => formatter.debug_tuple("Once").field(value).finish(),
            OnceState::Poisoned => formatter.write_str("Once(<poisoned>)"),
        }
    }
}

/// Wraps `function` so that it runs at most once.
///
/// Shorthand for [`Once::new`].
#[inline]
pub const fn once<F, A, R>(function: F) -> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

static_assertions::assert_not_impl_any!(Once<fn(u32) -> u32, u32, u32>: Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_pending_until_first_call() {
        let wrapped = once(|value: i32| value);
        assert!(!wrapped.has_fired());
        assert!(wrapped.get().is_none());

        let _ = wrapped.call(1);
        assert!(wrapped.has_fired());
        assert_eq!(wrapped.get().as_deref(), Some(&1));
    }

    #[test]
    fn test_panic_poisons_wrapper() {
        let wrapped = once(|value: i32| -> i32 {
            if value > 0 {
                panic!("boom");
            }
            value
        });

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _ = wrapped.call(1);
        }));
        assert!(result.is_err());
        assert!(wrapped.is_poisoned());
        assert_eq!(
            wrapped.try_call(0).map(|value| *value),
            Err(Error::Poisoned { wrapper: "Once" })
        );
    }

    #[test]
    fn test_into_inner() {
        let wrapped = once(|value: &str| value.len());
        assert_eq!(once(|value: &str| value.len()).into_inner(), None);
        let _ = wrapped.call("four");
        assert_eq!(wrapped.into_inner(), Some(4));
    }

    #[test]
    fn test_debug_shows_state() {
        let wrapped = once(|value: i32| value * 2);
        assert_eq!(format!("{wrapped:?}"), "Once(<pending>)");
        let _ = wrapped.call(4);
        assert_eq!(format!("{wrapped:?}"), "Once(8)");
    }
}
