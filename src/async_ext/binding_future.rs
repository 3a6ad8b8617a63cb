//! Future returned by [`binding_async`](super::binding_async).

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::binding::outcome::{self, Engine};
use crate::types::Bound;

use super::suspend::SlotHandle;

pin_project! {
    /// A Future that runs a binding block and settles it into a `Result`.
    ///
    /// # Cancel Safety
    ///
    /// Dropping a `BindingFuture` drops the block mid-flight. No failure is
    /// reported for a cancelled block; the binding simply never resolves, and
    /// its scope is closed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rail_binding::async_ext::{binding_async, BindingFuture};
    ///
    /// async fn example() -> Result<i32, &'static str> {
    ///     binding_async(|scope| async move {
    ///         let x = scope.bind(async { Ok(40) }.await)?;
    ///         Ok(x + 2)
    ///     })
    ///     .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct BindingFuture<Fut, E> {
        #[pin]
        block: Fut,
        slot: Option<SlotHandle<E>>,
    }
}

impl<Fut, E> BindingFuture<Fut, E> {
    #[inline]
    pub(crate) fn new(block: Fut, slot: SlotHandle<E>) -> Self {
        Self { block, slot: Some(slot) }
    }
}

impl<Fut, V, E> Future for BindingFuture<Fut, E>
where
    Fut: Future<Output = Bound<V>>,
{
    type Output = Result<V, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(this.slot.is_some(), "BindingFuture polled after completion; this is a bug");
        let block_outcome = ready!(this.block.poll(cx));

        let failure = this.slot.take().and_then(SlotHandle::settle);
        Poll::Ready(outcome::settle(block_outcome, failure, Engine::Suspending))
    }
}

impl<Fut, V, E> FusedFuture for BindingFuture<Fut, E>
where
    Fut: Future<Output = Bound<V>>,
{
    fn is_terminated(&self) -> bool {
        self.slot.is_none()
    }
}
