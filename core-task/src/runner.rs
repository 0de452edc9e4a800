//! Synchronous task runner.
//!
//! A run arms a [`Deadline`], hands the task a [`Completion`], and blocks the
//! calling thread until one of the two settles:
//!
//! - the task reports first: the deadline is cancelled and the task's
//!   outcome is returned unchanged
//! - the deadline fires first: the caller gets a [`TimeoutError`]
//!
//! A timeout only stops the caller from waiting. The task is never
//! cancelled, so anything it spawned keeps running (and holding whatever it
//! holds) until it finishes on its own. A task that never reports leaks for
//! as long as its runtime lives. For the free functions that is the shared
//! runtime, which lives for the rest of the process.

use crate::completion::{Completion, Receiver};
use crate::error::{Result, RunError, TimeoutError};
use core_async::runtime::{self, Builder, Handle, Runtime};
use core_async::task;
use core_async::time::{self, Deadline, Instant};
use core_runtime::config::{RunOptions, RunnerConfig};
use futures::future::{self, Either};
use std::fmt;
use std::future::Future;
use tracing::{debug, debug_span, warn, Instrument};

/// Runs callback-style tasks synchronously under a deadline.
///
/// [`TaskRunner::new`] waits on the process-wide shared runtime.
/// [`TaskRunner::from_config`] builds a dedicated runtime that is shut down
/// in the background when the runner is dropped, abandoning any task still
/// running on it.
pub struct TaskRunner {
    handle: Handle,
    options: RunOptions,
    runtime: Option<Runtime>,
}

impl TaskRunner {
    /// Creates a runner on the shared runtime with the given default options.
    pub fn new(options: RunOptions) -> Self {
        Self {
            handle: runtime::shared_handle(),
            options,
            runtime: None,
        }
    }

    /// Creates a runner with its own runtime.
    ///
    /// # Errors
    ///
    /// - `Error::Config` if the configuration fails validation
    /// - `Error::Internal` if the runtime cannot be built
    pub fn from_config(config: &RunnerConfig) -> core_runtime::Result<Self> {
        config.validate()?;

        let mut builder = Builder::new_multi_thread();
        builder.enable_all().thread_name(config.thread_name.clone());
        if let Some(threads) = config.worker_threads {
            builder.worker_threads(threads);
        }

        let runtime = builder.build().map_err(|e| {
            core_runtime::Error::Internal(format!("Failed to build runner runtime: {}", e))
        })?;

        debug!(
            thread_name = %config.thread_name,
            worker_threads = ?config.worker_threads,
            timeout_ms = config.options.ms,
            "Built dedicated runner runtime"
        );

        Ok(Self {
            handle: runtime.handle().clone(),
            options: config.options,
            runtime: Some(runtime),
        })
    }

    /// Default options applied by [`run`](TaskRunner::run).
    pub fn options(&self) -> RunOptions {
        self.options
    }

    /// Runs `task` with this runner's default options.
    pub fn run<T, E, F>(&self, task: F) -> Result<T, E>
    where
        F: FnOnce(Completion<T, E>) + Send,
        T: Send,
        E: Send,
    {
        self.run_with(task, self.options)
    }

    /// Runs `task`, blocking until it reports or `options.ms` elapses.
    ///
    /// `task` is invoked on the waiting thread with the runtime entered, so
    /// it may [`spawn`](core_async::task::spawn) its asynchronous work.
    ///
    /// # Errors
    ///
    /// - [`RunError::Timeout`] if the deadline fires before the task reports
    /// - [`RunError::Task`] with the task's own error, unmodified
    ///
    /// # Panics
    ///
    /// A panic raised by `task` itself propagates to the caller.
    pub fn run_with<T, E, F>(&self, task: F, options: RunOptions) -> Result<T, E>
    where
        F: FnOnce(Completion<T, E>) + Send,
        T: Send,
        E: Send,
    {
        let span = debug_span!("timed_task", timeout_ms = options.ms);
        runtime::wait_on(&self.handle, race(task, options).instrument(span))
    }

    /// Runs an async computation with this runner's default options.
    pub fn run_future<T, E, Fut>(&self, future: Fut) -> Result<T, E>
    where
        Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        self.run_future_with(future, self.options)
    }

    /// Spawns `future` and waits for its output under `options`.
    ///
    /// The future keeps running after a timeout; its output is discarded.
    pub fn run_future_with<T, E, Fut>(&self, future: Fut, options: RunOptions) -> Result<T, E>
    where
        Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        self.run_with(
            move |done: Completion<T, E>| {
                task::spawn(async move {
                    done.complete(future.await);
                });
            },
            options,
        )
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new(RunOptions::default())
    }
}

impl fmt::Debug for TaskRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskRunner")
            .field("options", &self.options)
            .field("dedicated_runtime", &self.runtime.is_some())
            .finish()
    }
}

impl Drop for TaskRunner {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

/// Runs `task` on the shared runtime, blocking until it reports or
/// `options.ms` elapses.
///
/// # Examples
///
/// ```rust
/// use core_task::{run, sleep, spawn, Duration, RunError, RunOptions};
///
/// let answer: Result<u32, RunError<()>> = run(
///     |done| {
///         spawn(async move {
///             sleep(Duration::from_millis(20)).await;
///             done.succeed(42);
///         });
///     },
///     RunOptions::with_ms(1000),
/// );
/// assert_eq!(answer, Ok(42));
/// ```
pub fn run<T, E, F>(task: F, options: RunOptions) -> Result<T, E>
where
    F: FnOnce(Completion<T, E>) + Send,
    T: Send,
    E: Send,
{
    TaskRunner::new(options).run(task)
}

/// [`run`] with the default 1000 ms budget.
pub fn run_with_defaults<T, E, F>(task: F) -> Result<T, E>
where
    F: FnOnce(Completion<T, E>) + Send,
    T: Send,
    E: Send,
{
    run(task, RunOptions::default())
}

/// Runs an async computation on the shared runtime under `options`.
pub fn run_future<T, E, Fut>(future: Fut, options: RunOptions) -> Result<T, E>
where
    Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    TaskRunner::new(options).run_future(future)
}

async fn race<T, E, F>(task: F, options: RunOptions) -> Result<T, E>
where
    F: FnOnce(Completion<T, E>),
{
    let started = Instant::now();

    // Armed before the task is invoked.
    let deadline = Deadline::after(options.timeout());
    debug!("Deadline armed");

    let (completion, receiver): (Completion<T, E>, Receiver<T, E>) = Completion::channel();
    task(completion);

    // `select` polls the receiver first, so a task that reported
    // synchronously wins even against a zero budget.
    match future::select(receiver, deadline).await {
        Either::Left((Ok(outcome), mut deadline)) => {
            deadline.cancel();
            debug!(
                elapsed_ms = time::as_millis_u64(started.elapsed()),
                success = outcome.is_ok(),
                "Task settled before deadline"
            );
            outcome.map_err(RunError::Task)
        }
        Either::Left((Err(_), deadline)) => {
            warn!("Task dropped its completion without reporting, waiting out the deadline");
            deadline.await;
            Err(timed_out(options.ms, started))
        }
        Either::Right(((), _receiver)) => Err(timed_out(options.ms, started)),
    }
}

fn timed_out<E>(ms: i64, started: Instant) -> RunError<E> {
    warn!(
        elapsed_ms = time::as_millis_u64(started.elapsed()),
        "Deadline fired before task completed, task left running"
    );
    RunError::Timeout(TimeoutError::new(ms))
}
