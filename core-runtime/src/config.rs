//! # Runner Configuration Module
//!
//! Provides the per-call [`RunOptions`] record and the [`RunnerConfig`] used
//! to build a dedicated task runner.
//!
//! ## Overview
//!
//! `RunOptions` carries a single setting, the timeout budget in
//! milliseconds. Every field falls back to its default on its own, so a
//! partially specified record (for example JSON read from a migration
//! manifest) still gets the default budget. Unknown fields are ignored.
//!
//! `RunnerConfig` is built through [`RunnerConfigBuilder`] and validated
//! before use. It controls the runtime a runner waits on.
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::{RunOptions, RunnerConfig};
//!
//! let options = RunOptions::from_json(r#"{ "ms": 250, "retries": 3 }"#)
//!     .expect("valid options");
//! assert_eq!(options.ms, 250);
//!
//! let config = RunnerConfig::builder()
//!     .options(options)
//!     .worker_threads(2)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.worker_threads, Some(2));
//! ```
//!
//! ## Error Handling
//!
//! ```should_panic
//! use core_runtime::config::RunnerConfig;
//!
//! let config = RunnerConfig::builder()
//!     .worker_threads(0)
//!     .build()
//!     .expect("Should fail - zero worker threads");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout budget in milliseconds.
pub const DEFAULT_TIMEOUT_MS: i64 = 1000;

/// Default name given to dedicated runner worker threads.
pub const DEFAULT_THREAD_NAME: &str = "timed-task-worker";

/// Upper bound accepted for `worker_threads`.
pub const MAX_WORKER_THREADS: usize = 512;

/// Options for a single run.
///
/// `ms` is not validated. Zero and negative budgets both arm a deadline
/// that is already due, and error messages report the value as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Timeout budget in milliseconds
    pub ms: i64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl RunOptions {
    /// Creates options with the given timeout budget.
    pub fn with_ms(ms: i64) -> Self {
        Self { ms }
    }

    /// The timeout budget as a [`Duration`]. Negative budgets map to zero.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.ms.max(0) as u64)
    }

    /// Parses options from a JSON object.
    ///
    /// Missing fields take their defaults and unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the input is not a JSON object or `ms`
    /// is not an integer.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(format!("Invalid run options: {}", e)))
    }
}

impl From<Duration> for RunOptions {
    fn from(timeout: Duration) -> Self {
        Self {
            ms: i64::try_from(timeout.as_millis()).unwrap_or(i64::MAX),
        }
    }
}

/// Configuration for a dedicated task runner.
///
/// Use [`RunnerConfig::builder`] to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Options applied to every run that does not supply its own
    pub options: RunOptions,

    /// Worker threads for the runner's runtime (`None` = one per core)
    pub worker_threads: Option<usize>,

    /// Name given to the runtime's worker threads
    pub thread_name: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            options: RunOptions::default(),
            worker_threads: None,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

impl RunnerConfig {
    /// Creates a new builder for constructing a `RunnerConfig`.
    pub fn builder() -> RunnerConfigBuilder {
        RunnerConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Worker thread count, when set, is between 1 and 512
    /// - Thread name is not empty
    pub fn validate(&self) -> Result<()> {
        if let Some(threads) = self.worker_threads {
            if threads == 0 {
                return Err(Error::Config(
                    "Worker threads must be greater than 0".to_string(),
                ));
            }

            if threads > MAX_WORKER_THREADS {
                return Err(Error::Config(format!(
                    "Worker threads exceeds maximum of {}",
                    MAX_WORKER_THREADS
                )));
            }
        }

        if self.thread_name.trim().is_empty() {
            return Err(Error::Config("Thread name cannot be empty".to_string()));
        }

        Ok(())
    }
}

/// Builder for constructing [`RunnerConfig`] instances.
#[derive(Debug, Default)]
pub struct RunnerConfigBuilder {
    options: Option<RunOptions>,
    worker_threads: Option<usize>,
    thread_name: Option<String>,
}

impl RunnerConfigBuilder {
    /// Sets the default run options.
    pub fn options(mut self, options: RunOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the default timeout budget in milliseconds.
    pub fn timeout_ms(mut self, ms: i64) -> Self {
        self.options = Some(RunOptions::with_ms(ms));
        self
    }

    /// Sets the number of runtime worker threads.
    pub fn worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    /// Sets the worker thread name.
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = Some(name.into());
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if validation fails.
    pub fn build(self) -> Result<RunnerConfig> {
        let config = RunnerConfig {
            options: self.options.unwrap_or_default(),
            worker_threads: self.worker_threads,
            thread_name: self
                .thread_name
                .unwrap_or_else(|| DEFAULT_THREAD_NAME.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RunOptions::default();
        assert_eq!(options.ms, 1000);
        assert_eq!(options.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_options_from_json_field_default() {
        // A record without `ms` still gets the default budget.
        let options = RunOptions::from_json("{}").unwrap();
        assert_eq!(options.ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_options_from_json_ignores_unknown_fields() {
        let options = RunOptions::from_json(r#"{"ms": 50, "label": "migration"}"#).unwrap();
        assert_eq!(options, RunOptions::with_ms(50));
    }

    #[test]
    fn test_options_from_json_zero_passes_through() {
        let options = RunOptions::from_json(r#"{"ms": 0}"#).unwrap();
        assert_eq!(options.ms, 0);
        assert_eq!(options.timeout(), Duration::ZERO);
    }

    #[test]
    fn test_options_from_json_negative_passes_through() {
        let options = RunOptions::from_json(r#"{"ms": -5}"#).unwrap();
        assert_eq!(options.ms, -5);
        assert_eq!(options.timeout(), Duration::ZERO);
    }

    #[test]
    fn test_options_from_json_rejects_non_integer() {
        let result = RunOptions::from_json(r#"{"ms": "soon"}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_options_from_duration() {
        let options = RunOptions::from(Duration::from_millis(1500));
        assert_eq!(options.ms, 1500);
    }

    #[test]
    fn test_builder_defaults() {
        let config = RunnerConfig::builder().build().unwrap();
        assert_eq!(config, RunnerConfig::default());
        assert_eq!(config.thread_name, "timed-task-worker");
        assert!(config.worker_threads.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = RunnerConfig::builder()
            .timeout_ms(250)
            .worker_threads(4)
            .thread_name("migrations")
            .build()
            .unwrap();

        assert_eq!(config.options.ms, 250);
        assert_eq!(config.worker_threads, Some(4));
        assert_eq!(config.thread_name, "migrations");
    }

    #[test]
    fn test_zero_worker_threads_rejected() {
        let result = RunnerConfig::builder().worker_threads(0).build();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Worker threads must be greater than 0"));
    }

    #[test]
    fn test_too_many_worker_threads_rejected() {
        let result = RunnerConfig::builder().worker_threads(10_000).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_thread_name_rejected() {
        let result = RunnerConfig::builder().thread_name("  ").build();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Thread name cannot be empty"));
    }
}
