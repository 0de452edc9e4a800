//! # Core Runtime Module
//!
//! Provides the ambient infrastructure the task runner depends on:
//! - Logging and tracing setup
//! - Run options and runner configuration
//! - The shared configuration error type
//!
//! ## Overview
//!
//! Nothing in this crate touches the async executor. It establishes the
//! logging conventions and configuration records that `core-task` consumes.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{RunOptions, RunnerConfig, RunnerConfigBuilder};
pub use error::{Error, Result};
