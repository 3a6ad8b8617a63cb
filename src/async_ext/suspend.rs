//! The suspending binding engine.
//!
//! [`binding_async`] is the async counterpart to [`binding`](crate::binding).
//! The block receives an owned [`SuspendingScope`] and returns a future, so it
//! may `.await` anywhere, before or after a `bind`. A failure bound after
//! resuming aborts the block exactly like one bound before any suspension.

use core::fmt;
use core::future::Future;
use core::sync::atomic::{AtomicBool, Ordering};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::binding::outcome::{self, Engine};
use crate::types::{Bound, ShortCircuit};

use super::binding_future::BindingFuture;

const OUTSIDE_BINDING: &str = "SuspendingScope::bind called outside an active binding; \
     the scope escaped its block and the binding has already settled";

/// Write-once failure slot shared by a [`SuspendingScope`] and its [`BindingFuture`].
///
/// The block may be resumed on a different worker thread between two binds,
/// hence the lock instead of a `OnceCell`. The slot is closed once the binding
/// settles or is dropped; binding into a closed slot panics.
pub(crate) struct FailureSlot<E> {
    spent: AtomicBool,
    closed: AtomicBool,
    failure: Mutex<Option<E>>,
}

impl<E> FailureSlot<E> {
    fn new() -> Self {
        Self { spent: AtomicBool::new(false), closed: AtomicBool::new(false), failure: Mutex::new(None) }
    }

    #[inline]
    fn is_spent(&self) -> bool {
        self.spent.load(Ordering::Acquire)
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn lock(&self) -> MutexGuard<'_, Option<E>> {
        self.failure.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `error` unless a failure is already present. Returns whether it was stored.
    ///
    /// Returns `Err(error)` if the slot was closed before the lock was taken.
    fn record(&self, error: E) -> Result<bool, E> {
        let mut failure = self.lock();
        if self.is_closed() {
            return Err(error);
        }
        if failure.is_some() {
            return Ok(false);
        }
        *failure = Some(error);
        self.spent.store(true, Ordering::Release);
        Ok(true)
    }

    /// Closes the slot and removes the recorded failure, if any.
    fn close(&self) -> Option<E> {
        let mut failure = self.lock();
        self.closed.store(true, Ordering::Release);
        failure.take()
    }
}

/// The engine's handle on a [`FailureSlot`]; closes the slot when dropped.
pub(crate) struct SlotHandle<E> {
    slot: Arc<FailureSlot<E>>,
}

impl<E> SlotHandle<E> {
    /// Closes the slot and hands back the recorded failure.
    pub(crate) fn settle(self) -> Option<E> {
        self.slot.close()
    }
}

impl<E> Drop for SlotHandle<E> {
    fn drop(&mut self) {
        if !self.slot.is_closed() {
            drop(self.slot.close());
        }
    }
}

/// Capability handed to a suspending binding block.
///
/// The scope is moved into the block's future and is not `Clone`. It behaves
/// like [`BindingScope`](crate::BindingScope): the first bound failure is kept,
/// and the scope is spent from then on.
///
/// The scope is only valid while its [`BindingFuture`] is pending. Once the
/// binding has resolved or been dropped, a scope that escaped the block (returned
/// as its value, or moved into a spawned task) panics on every `bind` instead of
/// dropping the failure.
pub struct SuspendingScope<E> {
    slot: Arc<FailureSlot<E>>,
}

impl<E> SuspendingScope<E> {
    /// Unwraps `result`, or records its error and signals the block to stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_binding::async_ext::binding_async;
    ///
    /// async fn lookup(id: u32) -> Result<&'static str, String> {
    ///     match id {
    ///         1 => Ok("alice"),
    ///         _ => Err(format!("no user {id}")),
    ///     }
    /// }
    ///
    /// async fn example() {
    ///     let result = binding_async(|scope| async move {
    ///         let name = scope.bind(lookup(1).await)?;
    ///         Ok(name.len())
    ///     })
    ///     .await;
    ///     assert_eq!(result, Ok(5));
    /// }
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the binding that created this scope has already resolved or
    /// been dropped.
    #[inline]
    pub fn bind<V>(&self, result: Result<V, E>) -> Bound<V> {
        assert!(!self.slot.is_closed(), "{OUTSIDE_BINDING}");

        if self.slot.is_spent() {
            outcome::spent::<E>(Engine::Suspending);
            return Err(ShortCircuit::new());
        }

        match result {
            Ok(value) => Ok(value),
            Err(error) => {
                match self.slot.record(error) {
                    Ok(true) => outcome::recorded::<E>(Engine::Suspending),
                    Ok(false) => outcome::spent::<E>(Engine::Suspending),
                    Err(_late) => panic!("{OUTSIDE_BINDING}"),
                }
                Err(ShortCircuit::new())
            },
        }
    }
}

impl<E> fmt::Debug for SuspendingScope<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuspendingScope").field("spent", &self.slot.is_spent()).finish()
    }
}

/// Builds a binding whose block may suspend.
///
/// The returned [`BindingFuture`] drives the block inside the awaiting task:
///
/// - If every `bind` succeeds, it resolves to the block's value as `Ok`.
/// - The first bound `Err` ends the block and is the resolved value.
/// - A panic inside the block unwinds out of `poll`, into the awaiting caller.
/// - Dropping the future drops the block, cancelling whatever it was awaiting.
/// - Once the future resolves or is dropped, the block's scope is closed:
///   any later `bind` on it panics.
///
/// Nothing runs until the future is first polled.
///
/// # Examples
///
/// ```
/// use rail_binding::async_ext::binding_async;
///
/// async fn fetch(step: u32) -> Result<u32, &'static str> {
///     if step < 3 { Ok(step) } else { Err("step out of range") }
/// }
///
/// async fn example() {
///     let total = binding_async(|scope| async move {
///         let a = scope.bind(fetch(1).await)?;
///         let b = scope.bind(fetch(2).await)?;
///         Ok(a + b)
///     })
///     .await;
///     assert_eq!(total, Ok(3));
///
///     let failed = binding_async(|scope| async move {
///         let a = scope.bind(fetch(1).await)?;
///         let b = scope.bind(fetch(7).await)?;
///         Ok(a + b)
///     })
///     .await;
///     assert_eq!(failed, Err("step out of range"));
/// }
/// ```
pub fn binding_async<V, E, F, Fut>(block: F) -> BindingFuture<Fut, E>
where
    F: FnOnce(SuspendingScope<E>) -> Fut,
    Fut: Future<Output = Bound<V>>,
{
    let slot = Arc::new(FailureSlot::new());
    let future = block(SuspendingScope { slot: Arc::clone(&slot) });
    BindingFuture::new(future, SlotHandle { slot })
}
