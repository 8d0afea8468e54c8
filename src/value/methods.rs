//! Method invocation by name.

use super::Value;
use crate::error::Error;

/// Longest string, in bytes, that `repeat` will build.
const MAX_STRING_LENGTH: usize = (1 << 29) - 24;

/// Most fraction digits `toFixed` accepts.
const MAX_FRACTION_DIGITS: usize = 100;

/// Types that can run a method selected by name at runtime.
///
/// # Examples
///
/// ```rust
/// use underbar::value::{Invoke, Value};
///
/// let word = Value::from("dog");
/// assert_eq!(word.invoke("toUpperCase", &[]).unwrap(), Value::from("DOG"));
/// assert!(word.invoke("bark", &[]).is_err());
/// ```
pub trait Invoke {
    /// The result type of every method.
    type Output;

    /// Runs the method called `method` with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMethod`] if the receiver has no such method and
    /// [`Error::InvalidArguments`] if the arguments do not fit the method.
    fn invoke(&self, method: &str, arguments: &[Value]) -> Result<Self::Output, Error>;
}

/// The built-in method table.
///
/// Every value supports `toString`. Beyond that:
///
/// - strings: `toUpperCase`, `toLowerCase`, `trim`, `includes(text)`,
///   `split(separator)`, `repeat(count)`
/// - arrays: `sort`, `reverse`, `join(separator = ",")`, `includes(value)`,
///   `indexOf(value)`, `concat(...values)`, `slice(start, end?)`
/// - numbers: `toFixed(digits)`
/// - objects: `keys`, `values`, `hasOwnProperty(name)`
///
/// Methods never modify the receiver; "mutating" methods such as `sort`
/// return the reordered copy.
impl Invoke for Value {
    type Output = Self;

    fn invoke(&self, method: &str, arguments: &[Value]) -> Result<Self, Error> {
        if method == "toString" {
            return Ok(Self::String(self.to_string()));
        }
        match self {
            Self::String(text) => invoke_string(text, method, arguments),
            Self::Array(items) => invoke_array(items, method, arguments),
            Self::Number(number) => invoke_number(*number, method, arguments),
            Self::Object(properties) => match method {
                "keys" => Ok(Self::array(properties.keys().map(String::as_str))),
                "values" => Ok(Self::Array(properties.values().cloned().collect())),
                "hasOwnProperty" => {
                    let name = string_argument(method, arguments, 0)?;
                    Ok(Self::Bool(properties.contains_key(name)))
                }
                _ => Err(unknown(self, method)),
            },
            Self::Null | Self::Bool(_) => Err(unknown(self, method)),
        }
    }
}

impl Invoke for String {
    type Output = Value;

    fn invoke(&self, method: &str, arguments: &[Value]) -> Result<Value, Error> {
        invoke_string(self, method, arguments)
    }
}

impl Invoke for &str {
    type Output = Value;

    fn invoke(&self, method: &str, arguments: &[Value]) -> Result<Value, Error> {
        invoke_string(self, method, arguments)
    }
}

fn invoke_string(text: &str, method: &str, arguments: &[Value]) -> Result<Value, Error> {
    match method {
        "toString" => Ok(Value::from(text)),
        "toUpperCase" => Ok(Value::String(text.to_uppercase())),
        "toLowerCase" => Ok(Value::String(text.to_lowercase())),
        "trim" => Ok(Value::from(text.trim())),
        "includes" => {
            let needle = string_argument(method, arguments, 0)?;
            Ok(Value::Bool(text.contains(needle)))
        }
        "split" => {
            let separator = string_argument(method, arguments, 0)?;
            let parts: Vec<&str> = if separator.is_empty() {
                text.char_indices()
                    .map(|(start, character)| &text[start..start + character.len_utf8()])
                    .collect()
            } else {
                text.split(separator).collect()
            };
            Ok(Value::array(parts))
        }
        "repeat" => {
            let count = count_argument(method, arguments, 0)?;
            match text.len().checked_mul(count) {
                Some(length) if length <= MAX_STRING_LENGTH => Ok(Value::String(text.repeat(count))),
                _ => Err(Error::InvalidArguments {
                    method: method.to_string(),
                    reason: format!("result would exceed {MAX_STRING_LENGTH} bytes"),
                }),
            }
        }
        _ => Err(Error::UnknownMethod {
            method: method.to_string(),
            receiver: "string",
        }),
    }
}

#[allow(clippy::cast_precision_loss)]
fn invoke_array(items: &[Value], method: &str, arguments: &[Value]) -> Result<Value, Error> {
    match method {
        "sort" => {
            let mut sorted = items.to_vec();
            sorted.sort_by(Value::total_cmp);
            Ok(Value::Array(sorted))
        }
        "reverse" => Ok(Value::Array(items.iter().rev().cloned().collect())),
        "join" => {
            let separator = match arguments.first() {
                None | Some(Value::Null) => ",",
                Some(_) => string_argument(method, arguments, 0)?,
            };
            let joined = items
                .iter()
                .map(|item| if item.is_null() { String::new() } else { item.to_string() })
                .collect::<Vec<_>>()
                .join(separator);
            Ok(Value::String(joined))
        }
        "includes" => Ok(Value::Bool(
            items.contains(arguments.first().unwrap_or(&Value::Null)),
        )),
        "indexOf" => {
            let target = arguments.first().unwrap_or(&Value::Null);
            let index = items
                .iter()
                .position(|item| item == target)
                .map_or(-1.0, |index| index as f64);
            Ok(Value::Number(index))
        }
        "concat" => {
            let mut combined = items.to_vec();
            for argument in arguments {
                match argument {
                    Value::Array(more) => combined.extend(more.iter().cloned()),
                    other => combined.push(other.clone()),
                }
            }
            Ok(Value::Array(combined))
        }
        "slice" => {
            let start = count_argument(method, arguments, 0)?.min(items.len());
            let end = match arguments.get(1) {
                None | Some(Value::Null) => items.len(),
                Some(_) => count_argument(method, arguments, 1)?.min(items.len()),
            };
            Ok(Value::Array(items[start..end.max(start)].to_vec()))
        }
        _ => Err(Error::UnknownMethod {
            method: method.to_string(),
            receiver: "array",
        }),
    }
}

fn invoke_number(number: f64, method: &str, arguments: &[Value]) -> Result<Value, Error> {
    match method {
        "toFixed" => {
            let digits = count_argument(method, arguments, 0)?;
            if digits > MAX_FRACTION_DIGITS {
                return Err(Error::InvalidArguments {
                    method: method.to_string(),
                    reason: format!("argument 0 must be between 0 and {MAX_FRACTION_DIGITS}"),
                });
            }
            Ok(Value::String(format!("{number:.digits$}")))
        }
        _ => Err(Error::UnknownMethod {
            method: method.to_string(),
            receiver: "number",
        }),
    }
}

fn unknown(receiver: &Value, method: &str) -> Error {
    Error::UnknownMethod {
        method: method.to_string(),
        receiver: receiver.type_name(),
    }
}

fn string_argument<'a>(
    method: &str,
    arguments: &'a [Value],
    position: usize,
) -> Result<&'a str, Error> {
    arguments
        .get(position)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::InvalidArguments {
            method: method.to_string(),
            reason: format!("argument {position} must be a string"),
        })
}

fn count_argument(method: &str, arguments: &[Value], position: usize) -> Result<usize, Error> {
    match arguments.get(position).and_then(Value::as_f64) {
        Some(number) if number >= 0.0 && number.fract() == 0.0 => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let count = number as usize;
            Ok(count)
        }
        _ => Err(Error::InvalidArguments {
            method: method.to_string(),
            reason: format!("argument {position} must be a non-negative integer"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("toUpperCase", "Moe", "MOE")]
    #[case("toLowerCase", "Moe", "moe")]
    #[case("trim", "  moe ", "moe")]
    #[case("toString", "moe", "moe")]
    fn test_string_methods(#[case] method: &str, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(
            Value::from(input).invoke(method, &[]),
            Ok(Value::from(expected))
        );
    }

    #[test]
    fn test_array_sort_returns_sorted_copy() {
        let numbers = Value::array([5, 1, 7]);
        assert_eq!(numbers.invoke("sort", &[]), Ok(Value::array([1, 5, 7])));
        assert_eq!(numbers, Value::array([5, 1, 7]));
    }

    #[test]
    fn test_array_sort_places_nan_last() {
        let numbers = Value::array([3.0, f64::NAN, 1.0, f64::NAN, 2.0]);
        let Ok(Value::Array(sorted)) = numbers.invoke("sort", &[]) else {
            panic!("sort should return an array");
        };
        assert_eq!(&sorted[..3], &[Value::from(1.0), Value::from(2.0), Value::from(3.0)]);
        assert!(sorted[3..].iter().all(|value| value.as_f64().is_some_and(f64::is_nan)));
    }

    #[test]
    fn test_array_join_defaults_to_comma() {
        let letters = Value::array(["a", "b"]);
        assert_eq!(letters.invoke("join", &[]), Ok(Value::from("a,b")));
        assert_eq!(
            letters.invoke("join", &[Value::from("-")]),
            Ok(Value::from("a-b"))
        );
    }

    #[test]
    fn test_array_index_of_sentinel() {
        let letters = Value::array(["a", "b"]);
        assert_eq!(
            letters.invoke("indexOf", &[Value::from("z")]),
            Ok(Value::from(-1))
        );
    }

    #[test]
    fn test_array_slice_clamps() {
        let numbers = Value::array([1, 2, 3]);
        assert_eq!(
            numbers.invoke("slice", &[Value::from(1), Value::from(10)]),
            Ok(Value::array([2, 3]))
        );
    }

    #[test]
    fn test_number_to_fixed() {
        assert_eq!(
            Value::from(1.23456).invoke("toFixed", &[Value::from(2)]),
            Ok(Value::from("1.23"))
        );
    }

    #[rstest]
    #[case(0)]
    #[case(100)]
    fn test_number_to_fixed_digit_bounds(#[case] digits: i32) {
        let Ok(Value::String(text)) = Value::from(0.5).invoke("toFixed", &[Value::from(digits)])
        else {
            panic!("toFixed should return a string");
        };
        assert_eq!(text.split('.').nth(1).map_or(0, str::len), digits as usize);
    }

    #[rstest]
    #[case(101.0)]
    #[case(1e300)]
    fn test_number_to_fixed_rejects_too_many_digits(#[case] digits: f64) {
        let result = Value::from(1.5).invoke("toFixed", &[Value::from(digits)]);
        assert!(matches!(result, Err(Error::InvalidArguments { .. })));
    }

    #[rstest]
    #[case("abc", 1e300)]
    #[case("ab", (MAX_STRING_LENGTH / 2 + 1) as f64)]
    fn test_repeat_rejects_oversized_result(#[case] text: &str, #[case] count: f64) {
        let result = Value::from(text).invoke("repeat", &[Value::from(count)]);
        assert!(matches!(result, Err(Error::InvalidArguments { .. })));
    }

    #[test]
    fn test_repeat_of_empty_string_is_empty() {
        assert_eq!(
            Value::from("").invoke("repeat", &[Value::from(1e300)]),
            Ok(Value::from(""))
        );
    }

    #[test]
    fn test_split_on_empty_separator() {
        assert_eq!(
            "héllo".invoke("split", &[Value::from("")]),
            Ok(Value::array(["h", "é", "l", "l", "o"]))
        );
    }

    #[test]
    fn test_unknown_method_names_receiver() {
        assert_eq!(
            Value::from(true).invoke("sort", &[]),
            Err(Error::UnknownMethod {
                method: "sort".to_string(),
                receiver: "boolean",
            })
        );
    }

    #[test]
    fn test_invalid_argument_type() {
        let result = Value::from("abc").invoke("repeat", &[Value::from("two")]);
        assert!(matches!(result, Err(Error::InvalidArguments { .. })));
    }
}
