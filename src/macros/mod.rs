//! Shorthand macros for binding blocks.
//!
//! - [`macro@crate::binding`] - Runs a synchronous block whose last expression
//!   is the success value, without writing the final `Ok(..)`.
//! - [`macro@crate::binding_async`] - The same for suspending blocks (requires
//!   the `async` feature).
//!
//! # Examples
//!
//! ```
//! let result: Result<i32, &str> = rail_binding::binding!(|scope| {
//!     let x = scope.bind(Ok(1))?;
//!     let y = scope.bind(Ok(2))?;
//!     x + y
//! });
//!
//! assert_eq!(result, Ok(3));
//! ```

/// Runs a synchronous binding block and wraps its final value in `Ok`.
///
/// `binding!(|scope| body)` expands to
/// [`binding(|scope| Ok(body))`](crate::binding::binding). Inside `body`,
/// `scope.bind(..)?` short-circuits the whole block on the first failure.
///
/// # Examples
///
/// ```rust
/// use rail_binding::binding;
///
/// fn provide(raw: &str) -> Result<i32, String> {
///     raw.parse().map_err(|_| format!("bad input: {raw}"))
/// }
///
/// let ok = binding!(|scope| {
///     let x = scope.bind(provide("40"))?;
///     let y = scope.bind(provide("2"))?;
///     x + y
/// });
/// assert_eq!(ok, Ok(42));
///
/// let err = binding!(|scope| scope.bind(provide("forty"))? + 2);
/// assert_eq!(err, Err("bad input: forty".to_string()));
/// ```
#[macro_export]
macro_rules! binding {
    (|$scope:ident| $body:expr $(,)?) => {
        $crate::binding::binding(|$scope| ::core::result::Result::Ok($body))
    };
}

/// Builds a suspending binding block and wraps its final value in `Ok`.
///
/// `binding_async!(|scope| body)` expands to
/// [`binding_async(|scope| async move { Ok(body) })`](crate::async_ext::binding_async),
/// so `body` may use `.await` and `scope.bind(..)?` freely. The result is a
/// [`BindingFuture`](crate::async_ext::BindingFuture) to be awaited.
///
/// # Examples
///
/// ```rust
/// use rail_binding::binding_async;
///
/// async fn provide(n: i32) -> Result<i32, &'static str> {
///     if n >= 0 { Ok(n) } else { Err("negative") }
/// }
///
/// async fn example() {
///     let sum = binding_async!(|scope| {
///         let x = scope.bind(provide(1).await)?;
///         let y = scope.bind(provide(2).await)?;
///         x + y
///     })
///     .await;
///     assert_eq!(sum, Ok(3));
/// }
/// ```
#[cfg(feature = "async")]
#[macro_export]
macro_rules! binding_async {
    (|$scope:ident| $body:expr $(,)?) => {
        $crate::async_ext::binding_async(
            |$scope| async move { ::core::result::Result::Ok($body) },
        )
    };
}
