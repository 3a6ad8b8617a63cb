//! The capability shared by every binding scope.
//!
//! [`Binder`] lets helper functions bind results without caring which engine
//! is running them. The trait is sealed: the only implementors are
//! [`BindingScope`](crate::BindingScope) and, with the `async` feature,
//! [`SuspendingScope`](crate::async_ext::SuspendingScope).
//!
//! # Examples
//!
//! ```
//! use rail_binding::{binding, Binder, Bound};
//!
//! #[derive(Debug, PartialEq)]
//! enum ConfigError {
//!     Missing(&'static str),
//!     Invalid(&'static str),
//! }
//!
//! fn port(scope: &impl Binder<ConfigError>, raw: Option<&str>) -> Bound<u16> {
//!     let raw = scope.bind_some(raw, || ConfigError::Missing("port"))?;
//!     let port = scope.bind(raw.parse::<u16>().map_err(|_| ConfigError::Invalid("port")))?;
//!     scope.ensure(port != 0, || ConfigError::Invalid("port"))?;
//!     Ok(port)
//! }
//!
//! assert_eq!(binding(|scope| port(scope, Some("8080"))), Ok(8080));
//! assert_eq!(binding(|scope| port(scope, None)), Err(ConfigError::Missing("port")));
//! assert_eq!(binding(|scope| port(scope, Some("0"))), Err(ConfigError::Invalid("port")));
//! ```

use crate::binding::BindingScope;
use crate::types::Bound;

mod sealed {
    pub trait Sealed {}
}

impl<E> sealed::Sealed for BindingScope<E> {}

#[cfg(feature = "async")]
impl<E> sealed::Sealed for crate::async_ext::SuspendingScope<E> {}

/// Binds `Result` values inside an active binding block.
///
/// Every method follows the same rule: a success is unwrapped, a failure is
/// recorded in the scope and reported as a [`ShortCircuit`](crate::ShortCircuit)
/// to be propagated with `?`. Only the first failure of a scope is kept.
///
/// # Nested bindings
///
/// The signal returned by these methods belongs to the scope they were called
/// on, but its type does not say so. Inside a nested binding, calling them on
/// an enclosing scope type-checks; propagating the result out of the inner
/// block makes the inner binding panic because its own scope recorded nothing.
/// Bind on the innermost scope and pass inner results outward with
/// [`bind`](Binder::bind).
pub trait Binder<E>: sealed::Sealed {
    /// Unwraps `result`, or records its error and signals the block to stop.
    fn bind<V>(&self, result: Result<V, E>) -> Bound<V>;

    /// Binds a result whose error converts into the scope's error type.
    ///
    /// This mirrors the `From` conversion the `?` operator applies.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_binding::{binding, Binder};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct AppError(String);
    ///
    /// impl From<std::num::ParseIntError> for AppError {
    ///     fn from(err: std::num::ParseIntError) -> Self {
    ///         AppError(err.to_string())
    ///     }
    /// }
    ///
    /// let result: Result<i32, AppError> = binding(|scope| {
    ///     let n = scope.bind_from("12".parse::<i32>())?;
    ///     Ok(n + 30)
    /// });
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn bind_from<V, F>(&self, result: Result<V, F>) -> Bound<V>
    where
        E: From<F>,
    {
        self.bind(result.map_err(E::from))
    }

    /// Binds an `Option`, treating `None` as the error produced by `error`.
    ///
    /// The closure only runs when the option is `None`.
    #[inline]
    fn bind_some<V, F>(&self, option: Option<V>, error: F) -> Bound<V>
    where
        F: FnOnce() -> E,
    {
        self.bind(option.ok_or_else(error))
    }

    /// Short-circuits with the error produced by `error` unless `condition` holds.
    #[inline]
    fn ensure<F>(&self, condition: bool, error: F) -> Bound<()>
    where
        F: FnOnce() -> E,
    {
        if condition {
            self.bind(Ok(()))
        } else {
            self.bind(Err(error()))
        }
    }
}

impl<E> Binder<E> for BindingScope<E> {
    #[inline]
    fn bind<V>(&self, result: Result<V, E>) -> Bound<V> {
        BindingScope::bind(self, result)
    }
}

#[cfg(feature = "async")]
impl<E> Binder<E> for crate::async_ext::SuspendingScope<E> {
    #[inline]
    fn bind<V>(&self, result: Result<V, E>) -> Bound<V> {
        crate::async_ext::SuspendingScope::bind(self, result)
    }
}
