//! # underbar
//!
//! Generic collection traversal and stateful function combinators.
//!
//! ## Overview
//!
//! Every collection operation in this crate is written once against a single
//! abstraction, [`Collection`](collection::Collection), which is either an
//! ordered sequence or a string-keyed mapping. One enumeration primitive
//! ([`each`](collection::each)) visits its `(value, key)` pairs, and every
//! other operation is derived from it:
//!
//! - **Collections**: `each`, `index_of`, `contains`, `filter`, `reject`,
//!   `uniq`, `map`, `pluck`, `invoke_method`, `invoke_sort`, `reduce`,
//!   `every`, `some`
//! - **Values**: a dynamic [`Value`](value::Value) and the `Truthy`, `Record`
//!   and `Invoke` traits that the loosely typed combinators rely on
//! - **Function wrappers**: `once`, `memoize` (and their thread-safe
//!   variants) and `delay`
//! - **Structural helpers**: `first`, `last`, `extend`, `defaults`, `zip`,
//!   `flatten`, `intersection`, `difference`, `shuffle`, `sort_by`
//!
//! ## Feature Flags
//!
//! - `collection`: the collection abstraction, combinators and values
//! - `function`: `once` and `memoize`
//! - `async`: `delay` on a tokio runtime
//! - `structural`: the structural helpers
//! - `serde`: `Serialize`/`Deserialize` for collections and values
//! - `fxhash` / `ahash`: faster hashers for memoization caches
//! - `full`: enable everything
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let scores = collection! { "moe" => 40, "larry" => 75, "curly" => 90 };
//!
//! let passing = filter(&scores, |score| *score >= 50);
//! assert_eq!(passing.len(), 2);
//!
//! let total = reduce_seeded(&scores, |sum, score, _| sum + score, 0);
//! assert_eq!(total, 205);
//! assert!(every(&scores, |score| *score > 0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the operations and types of every enabled module.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Error;

    #[cfg(feature = "collection")]
    pub use crate::collection;
    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "collection")]
    pub use crate::value::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "structural")]
    pub use crate::structural::*;
}

pub mod error;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "collection")]
pub mod value;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "structural")]
pub mod structural;

pub use error::Error;
