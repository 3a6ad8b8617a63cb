//! Tokio-specific binding boundary.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! rail-binding = { version = "0.1", features = ["async-tokio"] }
//! ```

use core::future::Future;

use tokio::task::JoinHandle;

use crate::types::Bound;

use super::suspend::{binding_async, SuspendingScope};

/// Aborts the wrapped task when dropped, tying its lifetime to the awaiter.
struct TaskGuard<T> {
    handle: JoinHandle<T>,
}

impl<T> Drop for TaskGuard<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Runs a suspending binding as its own Tokio task and awaits it.
///
/// The task is bound to the caller: dropping the returned future aborts it,
/// and a panic inside the block is re-raised in the caller with
/// [`std::panic::resume_unwind`] instead of being lost in the task. Bound
/// failures come back as `Err`, never as panics.
///
/// With the `tracing` feature the task runs inside the caller's current span.
///
/// # Panics
///
/// - Re-raises any panic from the block.
/// - Panics if called outside a Tokio runtime, or if the runtime shuts down
///   before the task finishes.
///
/// # Example
///
/// ```rust,ignore
/// use rail_binding::async_ext::binding_task;
///
/// let order = binding_task(|scope| async move {
///     let user = scope.bind(fetch_user(id).await)?;
///     let cart = scope.bind(fetch_cart(&user).await)?;
///     Ok(place_order(user, cart))
/// })
/// .await;
/// ```
pub async fn binding_task<V, E, F, Fut>(block: F) -> Result<V, E>
where
    F: FnOnce(SuspendingScope<E>) -> Fut,
    Fut: Future<Output = Bound<V>> + Send + 'static,
    V: Send + 'static,
    E: Send + 'static,
{
    let future = binding_async(block);
    #[cfg(feature = "tracing")]
    let future = tracing::Instrument::in_current_span(future);

    let mut guard = TaskGuard { handle: tokio::task::spawn(future) };

    match (&mut guard.handle).await {
        Ok(result) => result,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(err) => panic!("binding task did not complete: {err}"),
    }
}
