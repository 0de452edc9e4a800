//! Runtime utilities that abstract over the underlying async executor.
//!
//! Two ways of driving futures live here:
//!
//! - [`block_on`] spins up a throwaway current-thread runtime. Anything the
//!   future spawns dies with it, which is what tests want.
//! - [`shared_handle`] + [`wait_on`] drive a future on a process-wide
//!   multi-thread runtime that is never torn down. Work spawned from inside
//!   the future keeps running on the worker threads after the wait returns.
//!   This is the synchronous-blocking primitive the task runner builds on.

use std::future::Future;
use std::sync::OnceLock;

pub use tokio::runtime::{Builder, Handle, Runtime, RuntimeFlavor};

const SHARED_THREAD_NAME: &str = "core-async-shared";

static SHARED: OnceLock<Runtime> = OnceLock::new();

/// Runs the provided future to completion using a lightweight runtime.
pub fn block_on<F>(future: F) -> F::Output
where
    F: Future,
{
    Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("core_async::runtime::block_on: failed to build Tokio runtime")
        .block_on(future)
}

/// Returns a handle to the shared background runtime, building it on first use.
///
/// The runtime lives for the rest of the process.
pub fn shared_handle() -> Handle {
    SHARED
        .get_or_init(|| {
            Builder::new_multi_thread()
                .enable_all()
                .thread_name(SHARED_THREAD_NAME)
                .build()
                .expect("core_async::runtime::shared_handle: failed to build Tokio runtime")
        })
        .handle()
        .clone()
}

/// Returns `true` when the current thread is executing inside a runtime context.
pub fn in_runtime_context() -> bool {
    Handle::try_current().is_ok()
}

/// Blocks the calling thread until `future` completes on `handle`'s runtime.
///
/// The future itself is polled on the calling thread with the runtime
/// entered, so it may spawn onto `handle` and use its timers.
///
/// Tokio refuses to block a thread that is already driving a runtime:
///
/// - On a multi-thread runtime the wait goes through
///   [`block_in_place`](tokio::task::block_in_place), which hands the
///   worker's scheduler core to another thread. Timers and spawned tasks keep
///   making progress even when every worker is inside a nested wait.
/// - On a current-thread runtime the wait moves to a scoped helper thread.
///   The caller's runtime is stalled until the future settles, so anything
///   the future needs must run on `handle`, never on the caller's runtime.
///
/// A panic inside the future is resumed on the caller.
pub fn wait_on<F>(handle: &Handle, future: F) -> F::Output
where
    F: Future + Send,
    F::Output: Send,
{
    let Ok(current) = Handle::try_current() else {
        return handle.block_on(future);
    };

    match current.runtime_flavor() {
        RuntimeFlavor::MultiThread => {
            tracing::trace!("Caller is a multi-thread runtime worker, blocking in place");
            tokio::task::block_in_place(move || handle.block_on(future))
        }
        _ => {
            tracing::trace!("Caller is inside a runtime, waiting on a helper thread");
            std::thread::scope(|scope| {
                let waiter = scope.spawn(move || handle.block_on(future));
                match waiter.join() {
                    Ok(output) => output,
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            })
        }
    }
}
