//! Deferred invocation.
//!
//! [`delay`] hands a function and its arguments to a [`Scheduler`] and returns
//! immediately. The scheduler runs the function exactly once, no sooner than
//! the requested wait after the call to `delay`. Separate calls are
//! independent: nothing is coalesced, and a pending invocation cannot be
//! cancelled.
//!
//! The returned [`Delayed`] handle is optional to use. Dropping it does not
//! cancel the task; awaiting it yields the function's result.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use underbar::function::delay;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let greeting = delay(
//!     |(first, second): (&str, &str)| format!("{first} {second}"),
//!     Duration::from_millis(10),
//!     ("hello", "world"),
//! );
//!
//! assert_eq!(greeting.await.unwrap(), "hello world");
//! # }
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use super::runtime;
use crate::error::Error;

/// Stand-in deadline offset for waits too long to represent; about 30 years.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Runs tasks on a tokio runtime after a delay.
///
/// # Examples
///
/// ```rust
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use underbar::function::Scheduler;
///
/// // Outside any runtime the global runtime is used.
/// let (sender, receiver) = mpsc::channel();
/// let _ = Scheduler::current().schedule(Duration::from_millis(5), move || {
///     sender.send("fired").unwrap();
/// });
///
/// assert_eq!(receiver.recv_timeout(Duration::from_secs(5)), Ok("fired"));
/// ```
#[derive(Clone)]
pub struct Scheduler {
    handle: Handle,
}

impl Scheduler {
    /// Uses the caller's runtime, or the global runtime outside of one.
    #[must_use]
    pub fn current() -> Self {
        Self {
            handle: runtime::handle(),
        }
    }

    /// Uses the runtime behind `handle`.
    #[must_use]
    pub const fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }

    /// Schedules `task` to run once, no sooner than `wait` from now.
    ///
    /// The deadline is fixed at the time of this call, not when the runtime
    /// first polls the task. Waits past the clock's range are clamped to a
    /// deadline decades away.
    pub fn schedule<F, R>(&self, wait: Duration, task: F) -> Delayed<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let now = Instant::now();
        let deadline = now
            .checked_add(wait)
            .unwrap_or_else(|| now + FAR_FUTURE);
        debug!(?wait, "delay: task scheduled");
        let join = self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            debug!(?wait, "delay: task fired");
            task()
        });
        Delayed { join }
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Scheduler")
            .field("flavor", &self.handle.runtime_flavor())
            .finish()
    }
}

/// Handle to a task scheduled by [`delay`] or [`Scheduler::schedule`].
///
/// Awaiting it yields the task's result. Dropping it detaches the task, which
/// still runs.
#[must_use = "dropping a Delayed detaches the task; it still runs"]
pub struct Delayed<R> {
    join: JoinHandle<R>,
}

impl<R> Delayed<R> {
    /// Returns `true` once the task has run (or failed).
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Lets the task run without keeping a handle to it.
    pub fn detach(self) {}
}

impl<R> Future for Delayed<R> {
    type Output = Result<R, Error>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.join).poll(context).map(|outcome| {
            outcome.map_err(|error| Error::DelayedTaskFailed {
                reason: error.to_string(),
            })
        })
    }
}

impl<R> fmt::Debug for Delayed<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Delayed")
            .field("finished", &self.is_finished())
            .finish()
    }
}

/// Calls `function(arguments)` once, no sooner than `wait` from now, without
/// blocking the caller.
///
/// Functions of several arguments take them as a tuple. Inside a tokio
/// runtime the task runs on that runtime; elsewhere on the global runtime.
pub fn delay<F, A, R>(function: F, wait: Duration, arguments: A) -> Delayed<R>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    Scheduler::current().schedule(wait, move || function(arguments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_deadline_is_fixed_at_schedule_time() {
        let start = Instant::now();
        let delayed = delay(|()| Instant::now(), Duration::from_millis(50), ());

        let fired_at = delayed.await.unwrap();
        assert!(fired_at.duration_since(start) >= Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_task_reports_failure() {
        let delayed = delay(
            |()| -> u8 { panic!("scheduled failure") },
            Duration::from_millis(1),
            (),
        );

        let result = delayed.await;
        assert!(matches!(result, Err(Error::DelayedTaskFailed { .. })));
    }

    #[tokio::test]
    async fn test_unrepresentable_wait_is_clamped() {
        let delayed = delay(|()| 1, Duration::MAX, ());
        tokio::task::yield_now().await;
        assert!(!delayed.is_finished());
        delayed.detach();
    }

    #[tokio::test]
    async fn test_zero_wait_runs_after_yield() {
        let delayed = delay(|value: i32| value + 1, Duration::ZERO, 41);
        assert_eq!(delayed.await, Ok(42));
    }
}
