//! Async abstraction layer for the timed task runner.
//!
//! Everything that touches Tokio lives here so that the runner crate never
//! needs to depend on the executor directly.
//!
//! # Modules
//!
//! - `runtime`: the shared background runtime and the blocking bridge that
//!   lets synchronous callers wait on a future
//! - `time`: sleeps and the cancellable [`time::Deadline`] timer
//! - `task`: task spawning
//! - `sync`: the single-assignment channel used to deliver task outcomes
//!
//! # Examples
//!
//! ```rust
//! use core_async::runtime;
//! use core_async::time::{sleep, Duration};
//!
//! let value = runtime::wait_on(&runtime::shared_handle(), async {
//!     sleep(Duration::from_millis(5)).await;
//!     42
//! });
//! assert_eq!(value, 42);
//! ```

// Re-export the async test macro so downstream crates never need
// direct Tokio dependencies.
pub use core_async_macros::test;

pub mod runtime;
pub mod sync;
pub mod task;
pub mod time;

pub use task::spawn;
pub use time::{sleep, Deadline, Duration, Instant};
