//! Runtime selection for delayed tasks.
//!
//! [`delay`](super::delay) must work both from async code and from plain
//! synchronous code. Inside a tokio runtime the task is spawned on the
//! caller's runtime, so it shares the caller's clock (including a paused test
//! clock) and tracing context. Outside any runtime a lazily created global
//! runtime drives the timers.
//!
//! # Examples
//!
//! ```rust,ignore
//! use underbar::function::runtime::handle;
//!
//! // From synchronous code: the global runtime's handle.
//! let obtained_handle = handle();
//! obtained_handle.spawn(async { /* timer work */ });
//! ```

use std::cell::RefCell;
use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime};

/// Global runtime for tasks scheduled outside any tokio runtime.
///
/// Sized to the number of CPU cores and never dropped.
static GLOBAL_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("underbar-delay")
        .enable_time()
        .build()
        .expect("Failed to create global tokio runtime for delayed tasks")
});

thread_local! {
    /// Per-thread copy of the global runtime's handle.
    static CACHED_HANDLE: RefCell<Option<Handle>> = const { RefCell::new(None) };
}

/// Returns the global runtime, creating it on first use.
#[inline]
#[must_use]
pub fn global() -> &'static Runtime {
    &GLOBAL_RUNTIME
}

/// Returns the caller's runtime handle, or the global runtime's handle when
/// called outside a runtime.
#[must_use]
pub fn handle() -> Handle {
    if let Ok(current) = Handle::try_current() {
        return current;
    }

    CACHED_HANDLE.with(|cached| {
        cached
            .borrow_mut()
            .get_or_insert_with(|| global().handle().clone())
            .clone()
    })
}
