//! Task spawning.
//!
//! Tasks handed to the runner usually start their asynchronous work by
//! spawning it. Because the runner invokes them inside the runtime context,
//! [`spawn`] lands on whichever runtime the runner is waiting on, and the
//! spawned work outlives the wait if the deadline fires first.
//!
//! # Examples
//!
//! ```rust
//! use core_async::{runtime, task};
//!
//! let handle = runtime::shared_handle();
//! let result = runtime::wait_on(&handle, async {
//!     task::spawn(async { 42 }).await.unwrap()
//! });
//! assert_eq!(result, 42);
//! ```

pub use tokio::task::{yield_now, JoinHandle};

/// Spawns a new asynchronous task on the current runtime.
///
/// # Panics
///
/// Panics when called outside of a runtime context.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::task::spawn(future)
}
