//! Dynamic values for the inherently dynamic operations.
//!
//! Most of this crate is generic over the element type. A few operations,
//! however, address elements by *name*: [`pluck`](crate::collection::pluck)
//! reads a named property and [`invoke_method`](crate::collection::invoke_method)
//! calls a named method. Those operations are expressed through the [`Record`]
//! and [`Invoke`] traits, and [`Value`] is the ready-made dynamic type that
//! implements both.
//!
//! # Examples
//!
//! ```rust
//! use underbar::value::{Record, Truthy, Value};
//!
//! let person = Value::object([("name", Value::from("Ada")), ("age", Value::from(36))]);
//!
//! assert_eq!(person.property("name"), Some(&Value::from("Ada")));
//! assert_eq!(person.property("email"), None);
//! assert!(person.is_truthy());
//! ```

mod methods;
mod record;
mod truthy;

pub use methods::Invoke;
pub use record::Record;
pub use truthy::Truthy;

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dynamically typed value.
///
/// Equality is structural and strict: no conversions happen between variants,
/// so `Value::from(1) != Value::from("1")`. Numbers follow IEEE semantics,
/// meaning `NaN` is not equal to itself.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Value {
    /// Absence of a value (`null` / `undefined`).
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    Array(Vec<Value>),
    /// Named properties, kept in key order.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Builds an [`Value::Object`] from `(name, value)` pairs.
    pub fn object<K, I>(properties: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Object(
            properties
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// Builds a [`Value::Array`] from anything convertible into values.
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<Self>,
        I: IntoIterator<Item = V>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Name of the variant, as used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is one.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the number, if this is one.
    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    #[inline]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the properties, if this is an object.
    #[inline]
    pub const fn as_object(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Object(properties) => Some(properties),
            _ => None,
        }
    }

    /// A total ordering that agrees with [`PartialOrd`] wherever that is
    /// defined.
    ///
    /// Numbers compare with [`f64::total_cmp`], so a positive `NaN` sorts
    /// after every other number and `-0.0` sorts before `0.0`. Arrays and
    /// objects compare element by element with this same ordering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use underbar::value::Value;
    ///
    /// let nan = Value::from(f64::NAN);
    /// assert_eq!(nan.total_cmp(&Value::from(1)), Ordering::Greater);
    /// assert_eq!(nan.total_cmp(&nan), Ordering::Equal);
    /// ```
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (Self::Number(left), Self::Number(right)) => left.total_cmp(right),
            (Self::String(left), Self::String(right)) => left.cmp(right),
            (Self::Array(left), Self::Array(right)) => left
                .iter()
                .zip(right)
                .map(|(left, right)| left.total_cmp(right))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| left.len().cmp(&right.len())),
            (Self::Object(left), Self::Object(right)) => left
                .iter()
                .zip(right)
                .map(|((left_key, left), (right_key, right))| {
                    left_key.cmp(right_key).then_with(|| left.total_cmp(right))
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| left.len().cmp(&right.len())),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::String(_) => 3,
            Self::Array(_) => 4,
            Self::Object(_) => 5,
        }
    }
}

/// Values of different variants order by variant:
/// null < boolean < number < string < array < object.
/// Within a variant the natural ordering applies; `NaN` is unordered.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Null, Self::Null) => Some(Ordering::Equal),
            (Self::Bool(left), Self::Bool(right)) => left.partial_cmp(right),
            (Self::Number(left), Self::Number(right)) => left.partial_cmp(right),
            (Self::String(left), Self::String(right)) => left.partial_cmp(right),
            (Self::Array(left), Self::Array(right)) => left.partial_cmp(right),
            (Self::Object(left), Self::Object(right)) => left.partial_cmp(right),
            _ => self.rank().partial_cmp(&other.rank()),
        }
    }
}

/// Formats the value the way string conversion does in dynamic languages:
/// integral numbers drop their fraction, arrays join their elements with
/// commas and objects render as `[object Object]`.
impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => format_number(*number, formatter),
            Self::String(text) => formatter.write_str(text),
            Self::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    if !item.is_null() {
                        write!(formatter, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
        }
    }
}

fn format_number(number: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number.fract() == 0.0 && number.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let integral = number as i64;
        write!(formatter, "{integral}")
    } else {
        write!(formatter, "{number}")
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.is_truthy(),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

macro_rules! impl_from_number {
    ($($number:ty),*) => {
        $(
            impl From<$number> for Value {
                fn from(number: $number) -> Self {
                    Self::Number(f64::from(number))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl<V: Into<Self>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Self::array(items)
    }
}

impl<V: Into<Self>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(properties: BTreeMap<String, Self>) -> Self {
        Self::Object(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "true")]
    #[case(Value::from(3), "3")]
    #[case(Value::from(2.5), "2.5")]
    #[case(Value::Number(f64::NAN), "NaN")]
    #[case(Value::from("text"), "text")]
    #[case(Value::array([1, 2, 3]), "1,2,3")]
    #[case(Value::array([Value::Null, Value::from(1)]), ",1")]
    #[case(Value::object([("a", Value::from(1))]), "[object Object]")]
    fn test_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn test_strict_equality_has_no_coercion() {
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::from(0), Value::from(false));
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn test_ordering_across_variants() {
        assert!(Value::Null < Value::from(false));
        assert!(Value::from(100) < Value::from("a"));
        assert!(Value::from("b") < Value::array([0]));
    }

    #[test]
    fn test_ordering_within_variant() {
        assert!(Value::from(2) < Value::from(10));
        assert!(Value::from("apple") < Value::from("banana"));
        assert_eq!(
            Value::Number(f64::NAN).partial_cmp(&Value::from(1)),
            None
        );
    }

    #[test]
    fn test_total_cmp_places_nan_last() {
        let nan = Value::Number(f64::NAN);
        assert_eq!(nan.total_cmp(&Value::from(f64::INFINITY)), Ordering::Greater);
        assert_eq!(Value::from(1).total_cmp(&nan), Ordering::Less);
        assert_eq!(nan.total_cmp(&Value::from("a")), Ordering::Less);
        assert_eq!(
            Value::array([Value::Number(f64::NAN)]).total_cmp(&Value::array([Value::from(1)])),
            Ordering::Greater
        );
    }

    #[test]
    fn test_total_cmp_agrees_with_partial_cmp() {
        let values = [
            Value::Null,
            Value::from(true),
            Value::from(-2.5),
            Value::from("b"),
            Value::array([1, 2]),
            Value::array([1]),
            Value::object([("a", Value::from(1))]),
        ];
        for left in &values {
            for right in &values {
                assert_eq!(left.partial_cmp(right), Some(left.total_cmp(right)));
            }
        }
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
