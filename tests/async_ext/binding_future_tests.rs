//! Tests for the `BindingFuture` returned by `binding_async`.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};

use futures_core::future::FusedFuture;
use rail_binding::async_ext::{binding_async, BindingFuture};
use rail_binding::Bound;

struct NoopWaker;

impl Wake for NoopWaker {
    fn wake(self: Arc<Self>) {}
}

fn noop_waker() -> Waker {
    Waker::from(Arc::new(NoopWaker))
}

#[test]
fn binding_future_is_send() {
    fn assert_send<T: Send>() {}

    assert_send::<BindingFuture<std::future::Ready<Bound<()>>, String>>();
}

#[test]
fn binding_future_resolves_on_first_poll_when_block_is_ready() {
    let mut future = Box::pin(binding_async(|scope| async move {
        let x = scope.bind(Ok::<_, &str>(2))?;
        Ok(x * 21)
    }));

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    assert_eq!(future.as_mut().poll(&mut cx), Poll::Ready(Ok(42)));
    assert!(future.is_terminated());
}

#[test]
fn binding_future_stays_pending_while_block_is_pending() {
    struct PendingOnce {
        polled: bool,
    }

    impl Future for PendingOnce {
        type Output = Result<u8, &'static str>;

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            if self.polled {
                Poll::Ready(Err("late failure"))
            } else {
                self.polled = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    let mut future = Box::pin(binding_async(|scope| async move {
        let n = scope.bind(PendingOnce { polled: false }.await)?;
        Ok(n)
    }));

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    assert_eq!(future.as_mut().poll(&mut cx), Poll::Pending);
    assert!(!future.is_terminated());
    assert_eq!(future.as_mut().poll(&mut cx), Poll::Ready(Err("late failure")));
    assert!(future.is_terminated());
}

#[test]
#[should_panic(expected = "polled after completion")]
fn polling_after_completion_panics() {
    let mut future = Box::pin(binding_async(|scope| async move { scope.bind(Ok::<_, &str>(())) }));

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    let _ = future.as_mut().poll(&mut cx);
    let _ = future.as_mut().poll(&mut cx);
}

#[test]
#[should_panic(expected = "recorded no failure")]
fn short_circuit_from_another_scope_panics() {
    let mut future = Box::pin(binding_async(|outer| async move {
        let inner = binding_async(|_inner| async move {
            outer.bind::<()>(Err("outer"))?;
            Ok(())
        });
        let _: Result<(), &str> = inner.await;
        Ok(())
    }));

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    let _: Poll<Result<(), &str>> = future.as_mut().poll(&mut cx);
}
