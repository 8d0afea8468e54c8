//! Truthiness: the default predicate of `every`, `some`, `filter` and friends.
//!
//! A predicate in this crate may return any [`Truthy`] type, not only `bool`.
//! The rules follow the usual dynamic-language conventions:
//!
//! | Type                  | Falsy when            |
//! |-----------------------|-----------------------|
//! | `bool`                | `false`               |
//! | integers              | zero                  |
//! | floats                | zero or NaN           |
//! | `str` / `String`      | empty                 |
//! | `Option<T>`           | `None`, or inner falsy|
//! | `()`                  | always                |
//! | `Vec`, slices, maps   | never                 |

use std::collections::{BTreeMap, HashMap};

/// Types that can be interpreted as a truth value.
///
/// # Examples
///
/// ```rust
/// use underbar::value::Truthy;
///
/// assert!(1.is_truthy());
/// assert!(!0.0_f64.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some("x").is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// // Containers are truthy even when empty.
/// assert!(Vec::<i32>::new().is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),*) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(-1, true)]
    #[case(42, true)]
    fn test_integer_truthiness(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(-0.0, false)]
    #[case(f64::NAN, false)]
    #[case(0.5, true)]
    #[case(f64::INFINITY, true)]
    fn test_float_truthiness(#[case] value: f64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[test]
    fn test_nested_option_uses_inner_value() {
        assert!(!Some(0).is_truthy());
        assert!(Some(Some(true)).is_truthy());
    }

    #[test]
    fn test_references_delegate() {
        let text = String::from("x");
        let reference: &String = &text;
        assert!(reference.is_truthy());
        assert!(!(&&"").is_truthy());
    }
}
