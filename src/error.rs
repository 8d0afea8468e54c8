//! Error types shared by the collection operations and function wrappers.
//!
//! Most operations in this crate cannot fail: "not found" is reported with
//! `Option`/`bool`, and an empty collection is a valid input everywhere. The
//! few conditions that have no meaningful result are collected in [`Error`].

use std::fmt;

/// Errors reported by the fallible operations of this crate.
///
/// # Examples
///
/// ```rust
/// use underbar::Error;
///
/// let error = Error::UnknownMethod {
///     method: "shout".to_string(),
///     receiver: "string",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "invoke: string has no method named `shout`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `reduce` was called on an empty collection without a seed.
    EmptyReduction,
    /// `invoke_method` named a method the element does not support.
    UnknownMethod {
        /// The requested method name.
        method: String,
        /// A short description of the receiving element's type.
        receiver: &'static str,
    },
    /// A known method received arguments it cannot use.
    InvalidArguments {
        /// The invoked method name.
        method: String,
        /// What was wrong with the arguments.
        reason: String,
    },
    /// The wrapped function panicked during its only permitted invocation.
    Poisoned {
        /// The wrapper that was poisoned (`"Once"` or `"ConcurrentOnce"`).
        wrapper: &'static str,
    },
    /// A delayed task panicked or its runtime shut down before it ran.
    DelayedTaskFailed {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyReduction => write!(
                formatter,
                "reduce: empty reduction without seed (no element to start the accumulator)"
            ),
            Self::UnknownMethod { method, receiver } => {
                write!(formatter, "invoke: {receiver} has no method named `{method}`")
            }
            Self::InvalidArguments { method, reason } => {
                write!(formatter, "invoke: invalid arguments for `{method}`: {reason}")
            }
            Self::Poisoned { wrapper } => {
                write!(formatter, "{wrapper}: wrapped function panicked and is poisoned")
            }
            Self::DelayedTaskFailed { reason } => {
                write!(formatter, "delay: scheduled task failed: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}
