//! Function wrappers with private state.
//!
//! Each wrapper takes ownership of a function and changes how invoking it
//! behaves:
//!
//! - [`Once`] / [`ConcurrentOnce`]: the function runs at most one time; later
//!   calls replay its first result
//! - [`Memoize`] / [`ConcurrentMemoize`]: results are cached per argument
//! - [`delay`]: the invocation is deferred to a [`Scheduler`] (requires the
//!   `async` feature)
//!
//! The state of a wrapper (fired flag, cache) is created with the wrapper and
//! dropped with it; nothing else can observe or modify it.
//!
//! # Examples
//!
//! ```rust
//! use underbar::function::{memoize, once};
//!
//! let setup = once(|name: &str| format!("configured {name}"));
//! assert_eq!(*setup.call("first"), "configured first");
//! assert_eq!(*setup.call("second"), "configured first");
//!
//! let triangle = memoize(|n: u64| (n * (n + 1)) / 2);
//! assert_eq!(triangle.call(10), 55);
//! ```

mod concurrent_once;
mod memoize;
mod once;

#[cfg(feature = "async")]
mod delay;
#[cfg(feature = "async")]
pub mod runtime;

pub use concurrent_once::{ConcurrentOnce, concurrent_once};
pub use memoize::{CacheHasher, ConcurrentMemoize, Memoize, concurrent_memoize, memoize};
pub use once::{Once, OnceState, once};

#[cfg(feature = "async")]
pub use delay::{Delayed, Scheduler, delay};
