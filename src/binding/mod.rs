//! The synchronous binding engine.
//!
//! [`binding`] runs a block to completion on the calling thread. Inside the
//! block, [`BindingScope::bind`] unwraps successes and turns the first failure
//! into a [`ShortCircuit`] that the block propagates with `?`. The failure is
//! kept in the scope and becomes the result of the whole `binding` call.
//!
//! The block is a plain closure, so it cannot `.await`. Blocks that need to
//! suspend belong in [`binding_async`](crate::async_ext::binding_async).
//!
//! # Examples
//!
//! ```
//! use rail_binding::binding;
//!
//! fn parse(raw: &str) -> Result<i32, String> {
//!     raw.parse().map_err(|_| format!("not a number: {raw}"))
//! }
//!
//! let sum = binding(|scope| {
//!     let x = scope.bind(parse("1"))?;
//!     let y = scope.bind(parse("2"))?;
//!     Ok(x + y)
//! });
//! assert_eq!(sum, Ok(3));
//!
//! let failed = binding(|scope| {
//!     let x = scope.bind(parse("1"))?;
//!     let y = scope.bind(parse("two"))?;
//!     Ok(x + y)
//! });
//! assert_eq!(failed, Err("not a number: two".to_string()));
//! ```

pub(crate) mod outcome;

use core::cell::OnceCell;
use core::fmt;

use crate::types::{Bound, ShortCircuit};

use outcome::Engine;

/// Capability handed to a synchronous binding block.
///
/// A scope is created by [`binding`] and only ever lent to the block, so
/// `bind` cannot be reached outside an active binding. It holds a write-once
/// slot for the first failure. Once that slot is filled the scope is spent and
/// every further `bind` short-circuits without looking at its argument.
pub struct BindingScope<E> {
    failure: OnceCell<E>,
}

impl<E> BindingScope<E> {
    #[inline]
    fn new() -> Self {
        Self { failure: OnceCell::new() }
    }

    /// Unwraps `result`, or records its error and signals the block to stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_binding::binding;
    ///
    /// let result: Result<&str, u8> = binding(|scope| {
    ///     let name = scope.bind(Ok("rail"))?;
    ///     Ok(name)
    /// });
    /// assert_eq!(result, Ok("rail"));
    /// ```
    #[inline]
    pub fn bind<V>(&self, result: Result<V, E>) -> Bound<V> {
        if self.failure.get().is_some() {
            outcome::spent::<E>(Engine::Sync);
            return Err(ShortCircuit::new());
        }

        match result {
            Ok(value) => Ok(value),
            Err(error) => {
                let _ = self.failure.set(error);
                outcome::recorded::<E>(Engine::Sync);
                Err(ShortCircuit::new())
            },
        }
    }
}

impl<E> fmt::Debug for BindingScope<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingScope").field("spent", &self.failure.get().is_some()).finish()
    }
}

/// Runs `block` with a fresh [`BindingScope`] and returns its outcome.
///
/// - If every `bind` succeeds, the block's value is returned as `Ok`.
/// - The first bound `Err` ends the block and is returned as-is. Code after
///   that `bind` does not run, so later failures are never observed.
/// - Panics raised by the block are not caught; they unwind out of `binding`.
///
/// # Panics
///
/// Panics if the block returns a [`ShortCircuit`] that was not produced by its
/// own scope, for example one obtained from an enclosing binding.
///
/// # Nested bindings
///
/// A `ShortCircuit` carries no record of the scope that produced it, so the
/// compiler cannot stop an inner block from binding on an enclosing scope and
/// propagating that signal with `?`. The inner `binding` then finds its own
/// slot empty and panics. Bind on the scope of the block you are in, and hand
/// an inner failure outward by binding the inner result:
///
/// ```
/// use rail_binding::binding;
///
/// let result: Result<i32, &str> = binding(|outer| {
///     let inner = binding(|inner| inner.bind(Err::<i32, _>("inner")));
///     outer.bind(inner)
/// });
/// assert_eq!(result, Err("inner"));
/// ```
///
/// # Suspension
///
/// The block is a plain closure and cannot `.await`; use
/// [`binding_async`](crate::async_ext::binding_async) for that.
///
/// ```compile_fail
/// use rail_binding::binding;
///
/// async fn fetch() -> Result<i32, String> {
///     Ok(1)
/// }
///
/// async fn example() {
///     let _ = binding(|scope| {
///         let x = scope.bind(fetch().await)?;
///         Ok(x)
///     });
/// }
/// ```
///
/// # Examples
///
/// ```
/// use rail_binding::binding;
///
/// let mut reached = false;
/// let result: Result<i32, &str> = binding(|scope| {
///     let x = scope.bind(Ok(1))?;
///     let y = scope.bind(Err::<i32, _>("stop"))?;
///     reached = true;
///     Ok(x + y)
/// });
///
/// assert_eq!(result, Err("stop"));
/// assert!(!reached);
/// ```
pub fn binding<V, E, F>(block: F) -> Result<V, E>
where
    F: FnOnce(&BindingScope<E>) -> Bound<V>,
{
    let scope = BindingScope::new();
    let outcome = block(&scope);
    outcome::settle(outcome, scope.failure.into_inner(), Engine::Sync)
}
