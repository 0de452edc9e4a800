//! Run callback-style asynchronous tasks to completion from synchronous code.
//!
//! Scripts, one-shot migrations and REPL tooling often need a single value
//! from an asynchronous API without restructuring the caller. [`run`] hands
//! the task a [`Completion`], blocks the calling thread until the task
//! reports through it or the timeout budget elapses, and returns the
//! outcome as an ordinary `Result`.
//!
//! # Outcomes
//!
//! - `Ok(value)`: the task succeeded before the deadline
//! - `Err(RunError::Task(e))`: the task failed before the deadline; `e` is
//!   exactly what the task reported
//! - `Err(RunError::Timeout(_))`: the deadline fired first; the message is
//!   `"<ms> ms timeout exceeded"`
//!
//! # Timeouts do not cancel
//!
//! When the deadline wins, only the caller stops waiting. The task and any
//! work it spawned keep running, and a later report through its
//! `Completion` is silently discarded.
//!
//! # Examples
//!
//! ```rust
//! use core_task::{run, sleep, spawn, Duration, RunError, RunOptions};
//!
//! let result: Result<&str, RunError<String>> = run(
//!     |done| {
//!         spawn(async move {
//!             sleep(Duration::from_millis(500)).await;
//!             done.succeed("late");
//!         });
//!     },
//!     RunOptions::with_ms(50),
//! );
//!
//! let err = result.unwrap_err();
//! assert!(err.is_timeout());
//! assert_eq!(err.to_string(), "50 ms timeout exceeded");
//! ```

pub mod completion;
pub mod error;
pub mod runner;

pub use completion::Completion;
pub use error::{RunError, TimeoutError};
pub use runner::{run, run_future, run_with_defaults, TaskRunner};

pub use core_async::task::spawn;
pub use core_async::time::{sleep, Duration};
pub use core_runtime::config::{RunOptions, RunnerConfig};
