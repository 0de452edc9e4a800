use thiserror::Error;

/// Raised when a task does not complete within its timeout budget.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{ms} ms timeout exceeded")]
pub struct TimeoutError {
    ms: i64,
}

impl TimeoutError {
    /// Stable tag for telling timeouts apart from task failures.
    pub const NAME: &'static str = "TimeoutError";

    pub fn new(ms: i64) -> Self {
        Self { ms }
    }

    /// The budget that was exceeded, in milliseconds, as configured.
    pub fn ms(&self) -> i64 {
        self.ms
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// Failure outcome of a run.
///
/// `Task` carries the task's own error exactly as it was reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError<E> {
    #[error(transparent)]
    Timeout(#[from] TimeoutError),

    #[error(transparent)]
    Task(E),
}

impl<E> RunError<E> {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RunError::Timeout(_))
    }

    /// Returns the timeout if this run timed out.
    pub fn timeout(&self) -> Option<&TimeoutError> {
        match self {
            RunError::Timeout(timeout) => Some(timeout),
            RunError::Task(_) => None,
        }
    }

    /// Returns the task's error, or `None` for a timeout.
    pub fn into_task_error(self) -> Option<E> {
        match self {
            RunError::Task(error) => Some(error),
            RunError::Timeout(_) => None,
        }
    }

    pub fn map_task<F, E2>(self, f: F) -> RunError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            RunError::Timeout(timeout) => RunError::Timeout(timeout),
            RunError::Task(error) => RunError::Task(f(error)),
        }
    }
}

pub type Result<T, E> = std::result::Result<T, RunError<E>>;
