//! The completion handle passed to a task.
//!
//! A [`Completion`] replaces the error-first callback: the outcome is a
//! single `Result`, and because reporting consumes the handle a task can
//! report at most once.

use core_async::sync::oneshot;
use std::fmt;

pub(crate) type Receiver<T, E> = oneshot::Receiver<Result<T, E>>;

/// Handle a task uses to report its outcome.
///
/// The handle is `Send` whenever `T` and `E` are, so a task may finish on a
/// runtime worker, a plain thread, or synchronously inside the task call.
/// Dropping it without reporting counts as never calling back: the runner
/// keeps waiting until the deadline fires.
pub struct Completion<T, E> {
    sender: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Completion<T, E> {
    pub(crate) fn channel() -> (Self, Receiver<T, E>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    /// Reports the task's outcome.
    ///
    /// Returns `false` when the caller has already stopped waiting because
    /// the deadline fired first. The outcome is discarded in that case.
    pub fn complete(self, outcome: Result<T, E>) -> bool {
        match self.sender.send(outcome) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!("Late completion discarded, caller already timed out");
                false
            }
        }
    }

    /// Reports success. Shorthand for `complete(Ok(value))`.
    pub fn succeed(self, value: T) -> bool {
        self.complete(Ok(value))
    }

    /// Reports failure. Shorthand for `complete(Err(error))`.
    pub fn fail(self, error: E) -> bool {
        self.complete(Err(error))
    }

    /// Whether the caller has stopped waiting.
    ///
    /// Purely informational: the runner never cancels a task.
    pub fn is_abandoned(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<T, E> fmt::Debug for Completion<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("abandoned", &self.is_abandoned())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_async::runtime;

    #[test]
    fn test_complete_delivers_outcome() {
        let (completion, receiver) = Completion::<u32, String>::channel();
        assert!(!completion.is_abandoned());
        assert!(completion.succeed(42));

        let outcome = runtime::block_on(receiver).unwrap();
        assert_eq!(outcome, Ok(42));
    }

    #[test]
    fn test_fail_delivers_error() {
        let (completion, receiver) = Completion::<u32, String>::channel();
        assert!(completion.fail("boom".to_string()));

        let outcome = runtime::block_on(receiver).unwrap();
        assert_eq!(outcome, Err("boom".to_string()));
    }

    #[test]
    fn test_complete_after_receiver_dropped() {
        let (completion, receiver) = Completion::<u32, String>::channel();
        drop(receiver);

        assert!(completion.is_abandoned());
        assert!(!completion.succeed(1));
    }

    #[test]
    fn test_dropped_completion_closes_channel() {
        let (completion, receiver) = Completion::<u32, String>::channel();
        drop(completion);

        assert!(runtime::block_on(receiver).is_err());
    }

    #[test]
    fn test_debug_output() {
        let (completion, _receiver) = Completion::<u32, String>::channel();
        assert_eq!(format!("{:?}", completion), "Completion { abandoned: false }");
    }
}
