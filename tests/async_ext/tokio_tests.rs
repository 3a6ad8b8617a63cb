//! Tests for the Tokio task boundary.

use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rail_binding::prelude_async::*;

#[derive(Debug)]
struct TestFault;

#[tokio::test]
async fn binding_task_returns_block_value() {
    let result = binding_task(|scope| async move {
        let x = scope.bind(Ok::<_, String>(20))?;
        tokio::time::sleep(Duration::from_millis(1)).await;
        let y = scope.bind(Ok(22))?;
        Ok(x + y)
    })
    .await;

    assert_eq!(result, Ok(42));
}

#[tokio::test]
async fn binding_task_returns_first_failure() {
    let reached = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&reached);

    let result = binding_task(|scope| async move {
        tokio::task::yield_now().await;
        scope.bind::<()>(Err("first".to_string()))?;
        flag.store(true, Ordering::SeqCst);
        scope.bind::<()>(Err("second".to_string()))?;
        Ok(())
    })
    .await;

    assert_eq!(result, Err("first".to_string()));
    assert!(!reached.load(Ordering::SeqCst));
}

#[tokio::test]
async fn binding_task_reraises_panics_in_the_awaiter() {
    let awaiter = tokio::spawn(async {
        binding_task(|scope| async move {
            let x = scope.bind(Ok::<_, &'static str>(1))?;
            tokio::task::yield_now().await;
            if x == 1 {
                panic::panic_any(TestFault);
            }
            Ok(x)
        })
        .await
    });

    let err = awaiter.await.expect_err("panic must reach the awaiter");
    assert!(err.is_panic());
    assert!(err.into_panic().downcast_ref::<TestFault>().is_some());
}

#[tokio::test]
async fn dropping_binding_task_aborts_the_block() {
    let finished = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&finished);

    let timed_out = tokio::time::timeout(
        Duration::from_millis(10),
        binding_task(|scope| async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            flag.store(true, Ordering::SeqCst);
            scope.bind(Ok::<_, &'static str>(()))
        }),
    )
    .await;

    assert!(timed_out.is_err());
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(!finished.load(Ordering::SeqCst));
}

#[tokio::test]
async fn scope_escaping_binding_task_panics_on_late_bind() {
    let result = binding_task(|scope| async move {
        let late = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let _ = scope.bind::<()>(Err("late"));
        });
        Ok(late)
    })
    .await;

    let late = result.expect("block returned before the spawned bind");
    let err = late.await.expect_err("late bind must not be dropped silently");
    assert!(err.is_panic());
}
