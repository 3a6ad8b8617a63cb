//! Settling a finished block into the binding's final `Result`.
//!
//! Both engines end the same way: the block returned a [`Bound`] value and the
//! scope may or may not hold a recorded failure. This module turns that pair
//! into the caller-facing `Result` and owns the `tracing` events the engines
//! emit along the way.

use crate::types::Bound;

/// Which engine ran the block, used to label tracing events and panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Engine {
    Sync,
    #[cfg_attr(not(feature = "async"), allow(dead_code))]
    Suspending,
}

impl Engine {
    #[inline]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Engine::Sync => "binding",
            Engine::Suspending => "binding_async",
        }
    }
}

/// Produces the final outcome of a block.
///
/// A recorded failure always wins, even when the block swallowed the signal
/// and went on to return `Ok`. A short-circuit with nothing recorded means the
/// signal came from some other scope.
///
/// # Panics
///
/// Panics when `outcome` is `Err(ShortCircuit)` and `failure` is `None`.
pub(crate) fn settle<V, E>(outcome: Bound<V>, failure: Option<E>, engine: Engine) -> Result<V, E> {
    match (outcome, failure) {
        (_, Some(error)) => Err(error),
        (Ok(value), None) => {
            completed(engine);
            Ok(value)
        },
        (Err(_), None) => panic!(
            "{}: block short-circuited but its scope recorded no failure; \
             a ShortCircuit from another binding scope was propagated out of this block",
            engine.as_str()
        ),
    }
}

#[inline]
pub(crate) fn recorded<E>(engine: Engine) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "rail_binding",
        engine = engine.as_str(),
        error_type = core::any::type_name::<E>(),
        "bound a failure, short-circuiting block"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = engine;
}

#[inline]
pub(crate) fn spent<E>(engine: Engine) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "rail_binding",
        engine = engine.as_str(),
        error_type = core::any::type_name::<E>(),
        "bind on a spent scope ignored"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = engine;
}

#[inline]
fn completed(engine: Engine) {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "rail_binding", engine = engine.as_str(), "binding completed");
    #[cfg(not(feature = "tracing"))]
    let _ = engine;
}
