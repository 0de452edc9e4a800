//! Workspace facade crate.
//!
//! Re-exports the task runner from `core-task` together with the logging
//! and configuration surface of `core-runtime`, so scripts can depend on
//! `timed-task` alone.
//!
//! ```rust
//! use timed_task::{run, RunError, RunOptions};
//!
//! let result: Result<&str, RunError<String>> = run(
//!     |done| {
//!         done.succeed("migrated");
//!     },
//!     RunOptions::default(),
//! );
//! assert_eq!(result, Ok("migrated"));
//! ```

pub use core_task::{
    run, run_future, run_with_defaults, sleep, spawn, Completion, Duration, RunError, RunOptions,
    RunnerConfig, TaskRunner, TimeoutError,
};

pub use core_runtime::config::RunnerConfigBuilder;
pub use core_runtime::logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
pub use core_runtime::Error as ConfigError;
