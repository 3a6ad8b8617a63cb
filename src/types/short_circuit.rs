//! The short-circuit signal threaded through binding blocks.
//!
//! A [`ShortCircuit`] is what [`bind`](crate::traits::Binder::bind) hands back when
//! it meets a failure. It carries no error value: the failure itself has already
//! been stored in the scope that produced the signal, and the engine that owns
//! the scope reads it from there once the block returns.

use core::fmt;

/// Marker returned by `bind` when the bound `Result` was an `Err`.
///
/// The signal is meant to be propagated with `?` straight out of the block.
/// It cannot be constructed outside this crate, so the only way for a block
/// to end with `Err(ShortCircuit)` is to have bound a failure.
///
/// # Examples
///
/// ```
/// use rail_binding::{binding, ShortCircuit};
///
/// let result: Result<i32, &str> = binding(|scope| {
///     let signal: Result<i32, ShortCircuit> = scope.bind(Err("boom"));
///     assert!(signal.is_err());
///     signal
/// });
///
/// assert_eq!(result, Err("boom"));
/// ```
#[must_use = "a short-circuit must be propagated out of the binding block with `?`"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShortCircuit {
    _private: (),
}

impl ShortCircuit {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self { _private: () }
    }
}

impl fmt::Display for ShortCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("binding short-circuited on a bound failure")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShortCircuit {}

/// Result of binding a value inside a block, and the return type of every block.
///
/// # Type Parameters
///
/// * `V` - The unwrapped success value
pub type Bound<V> = Result<V, ShortCircuit>;
