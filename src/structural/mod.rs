//! Structural helpers over arrays and keyed records.
//!
//! These operations stand beside the [`collection`](crate::collection)
//! combinators rather than on top of them: they reshape arrays (slicing,
//! zipping, flattening, set operations, shuffling, sorting) and merge
//! records. All of them return new values, except [`extend`] and
//! [`defaults`], whose job is to update their target.
//!
//! # Examples
//!
//! ```rust
//! use underbar::structural::{difference, first_n, last, zip};
//!
//! let numbers = [1, 2, 3, 4, 5];
//! assert_eq!(first_n(&numbers, 2), vec![1, 2]);
//! assert_eq!(last(&numbers), Some(&5));
//! assert_eq!(difference(&numbers, &[&[2, 4][..]]), vec![1, 3, 5]);
//!
//! let rows = zip(&[&numbers[..2], &numbers[3..]]);
//! assert_eq!(rows, vec![vec![Some(1), Some(4)], vec![Some(2), Some(5)]]);
//! ```

mod nested;
mod objects;
mod ordering;
mod slices;

pub use nested::{Nested, flatten, flatten_into};
pub use objects::{defaults, extend};
pub use ordering::{sort_by, sort_by_property};
pub use slices::{
    difference, first, first_n, intersection, last, last_n, shuffle, shuffle_with, zip,
};
