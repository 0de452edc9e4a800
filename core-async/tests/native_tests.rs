//! Integration tests for core-async on native platforms.

use core_async::{runtime, sync, task, time};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[core_async::test]
async fn test_task_spawn() {
    let handle = task::spawn(async { 42 });
    let result = handle.await.unwrap();
    assert_eq!(result, 42);
}

#[core_async::test]
async fn test_sleep() {
    let start = time::Instant::now();
    time::sleep(time::Duration::from_millis(50)).await;
    let elapsed = start.elapsed();
    assert!(elapsed >= time::Duration::from_millis(50));
    assert!(elapsed < time::Duration::from_millis(500)); // Allow some slack
}

#[core_async::test]
async fn test_deadline_fires() {
    let start = time::Instant::now();
    let mut deadline = time::Deadline::after(time::Duration::from_millis(30));
    (&mut deadline).await;

    assert!(deadline.has_fired());
    assert!(start.elapsed() >= time::Duration::from_millis(30));
    assert_eq!(deadline.remaining(), time::Duration::ZERO);
}

#[core_async::test]
async fn test_deadline_cancel_prevents_fire() {
    let mut deadline = time::Deadline::after(time::Duration::from_millis(10));
    assert!(deadline.cancel());

    // A cancelled deadline never resolves.
    let result = time::timeout(time::Duration::from_millis(50), &mut deadline).await;
    assert!(result.is_err());
    assert!(!deadline.has_fired());
}

#[core_async::test]
async fn test_deadline_cancel_after_fire_is_noop() {
    let mut deadline = time::Deadline::after(time::Duration::from_millis(5));
    (&mut deadline).await;

    assert!(!deadline.cancel());
    assert!(deadline.has_fired());
    assert!(!deadline.is_cancelled());
}

#[core_async::test]
async fn test_zero_deadline_beats_delayed_work() {
    let deadline = time::Deadline::after(time::Duration::ZERO);
    let work = time::sleep(time::Duration::from_millis(10));

    futures::pin_mut!(work);
    match futures::future::select(work, deadline).await {
        futures::future::Either::Left(_) => panic!("delayed work should lose to a zero deadline"),
        futures::future::Either::Right(((), _)) => {}
    }
}

#[core_async::test]
async fn test_oneshot_channel() {
    let (tx, rx) = sync::oneshot::channel();

    task::spawn(async move {
        time::sleep(time::Duration::from_millis(10)).await;
        tx.send(42).unwrap();
    });

    let result = rx.await.unwrap();
    assert_eq!(result, 42);
}

#[core_async::test]
async fn test_oneshot_send_after_receiver_dropped() {
    let (tx, rx) = sync::oneshot::channel::<u32>();
    drop(rx);
    assert_eq!(tx.send(1), Err(1));
}

#[test]
fn test_wait_on_shared_runtime() {
    let handle = runtime::shared_handle();
    let value = runtime::wait_on(&handle, async {
        task::spawn(async {
            time::sleep(time::Duration::from_millis(10)).await;
            "done"
        })
        .await
        .unwrap()
    });
    assert_eq!(value, "done");
}

#[test]
fn test_spawned_work_outlives_wait() {
    let handle = runtime::shared_handle();
    let finished = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&finished);

    runtime::wait_on(&handle, async move {
        task::spawn(async move {
            time::sleep(time::Duration::from_millis(20)).await;
            flag.store(true, Ordering::SeqCst);
        });
    });

    assert!(!finished.load(Ordering::SeqCst));
    std::thread::sleep(std::time::Duration::from_millis(200));
    assert!(finished.load(Ordering::SeqCst));
}

#[core_async::test]
async fn test_wait_on_from_inside_runtime() {
    assert!(runtime::in_runtime_context());

    let handle = runtime::shared_handle();
    let value = runtime::wait_on(&handle, async { 7 });
    assert_eq!(value, 7);
}

#[test]
fn test_nested_wait_on_single_worker_keeps_timers_running() {
    let rt = runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    let handle = rt.handle().clone();
    let inner_handle = handle.clone();
    let (tx, rx) = std::sync::mpsc::channel();

    std::thread::spawn(move || {
        let value = runtime::wait_on(&handle, async move {
            task::spawn(async move {
                // Blocks the only worker; the timer must still fire.
                runtime::wait_on(&inner_handle, async {
                    time::sleep(time::Duration::from_millis(20)).await;
                    5
                })
            })
            .await
            .unwrap()
        });
        tx.send(value).unwrap();
    });

    let value = rx.recv_timeout(std::time::Duration::from_secs(5)).unwrap();
    assert_eq!(value, 5);
    rt.shutdown_background();
}

#[test]
#[should_panic(expected = "boom")]
fn test_wait_on_resumes_panics() {
    let handle = runtime::shared_handle();
    runtime::block_on(async move {
        runtime::wait_on(&handle, async {
            panic!("boom");
        })
    });
}

#[core_async::test]
async fn test_yield_now() {
    task::yield_now().await;
}
