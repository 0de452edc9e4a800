//! Synchronization primitives.
//!
//! Only the single-assignment channel is needed: a task outcome is produced
//! at most once and consumed at most once.
//!
//! # Examples
//!
//! ```rust
//! use core_async::{runtime, sync::oneshot};
//!
//! runtime::block_on(async {
//!     let (tx, rx) = oneshot::channel();
//!     tx.send(7).unwrap();
//!     assert_eq!(rx.await.unwrap(), 7);
//! });
//! ```

pub use tokio::sync::oneshot;
