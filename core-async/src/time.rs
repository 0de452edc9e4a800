//! Time-related abstractions.
//!
//! Besides the usual Tokio re-exports this module provides [`Deadline`], a
//! one-shot timer that can be disarmed. It is the schedule/cancel pair the
//! task runner races against a task's completion.
//!
//! # Examples
//!
//! ```rust
//! use core_async::runtime;
//! use core_async::time::{Deadline, Duration};
//!
//! runtime::block_on(async {
//!     let mut deadline = Deadline::after(Duration::from_millis(10));
//!     assert!(deadline.cancel());
//!     // Cancelling twice is harmless.
//!     assert!(!deadline.cancel());
//! });
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

pub use tokio::time::{sleep, timeout, Sleep};

pub use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeadlineState {
    Armed,
    Fired,
    Cancelled,
}

/// A cancellable one-shot timer.
///
/// Awaiting a `Deadline` resolves once the configured duration has elapsed.
/// After [`cancel`](Deadline::cancel) the deadline never resolves.
/// Cancelling after the timer fired is a no-op, not an error.
#[derive(Debug)]
pub struct Deadline {
    sleep: Option<Pin<Box<Sleep>>>,
    duration: Duration,
    armed_at: Instant,
    state: DeadlineState,
}

impl Deadline {
    /// Arms a deadline that fires `duration` from now.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a runtime context with timers enabled.
    pub fn after(duration: Duration) -> Self {
        Self {
            sleep: Some(Box::pin(sleep(duration))),
            duration,
            armed_at: Instant::now(),
            state: DeadlineState::Armed,
        }
    }

    /// Disarms the timer.
    ///
    /// Returns `true` if this call prevented the deadline from firing and
    /// `false` if it had already fired or was already cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.state != DeadlineState::Armed {
            return false;
        }
        self.sleep = None;
        self.state = DeadlineState::Cancelled;
        true
    }

    /// The duration the deadline was armed with.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn has_fired(&self) -> bool {
        self.state == DeadlineState::Fired
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == DeadlineState::Cancelled
    }

    /// Time left before the deadline fires. Zero once fired or cancelled.
    pub fn remaining(&self) -> Duration {
        match self.state {
            DeadlineState::Armed => self.duration.saturating_sub(self.armed_at.elapsed()),
            DeadlineState::Fired | DeadlineState::Cancelled => Duration::ZERO,
        }
    }
}

impl Future for Deadline {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.state {
            DeadlineState::Fired => Poll::Ready(()),
            DeadlineState::Cancelled => Poll::Pending,
            DeadlineState::Armed => {
                let Some(sleep) = self.sleep.as_mut() else {
                    return Poll::Pending;
                };
                match sleep.as_mut().poll(cx) {
                    Poll::Ready(()) => {
                        self.sleep = None;
                        self.state = DeadlineState::Fired;
                        Poll::Ready(())
                    }
                    Poll::Pending => Poll::Pending,
                }
            }
        }
    }
}

/// Converts a duration to whole milliseconds for log fields.
pub fn as_millis_u64(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
