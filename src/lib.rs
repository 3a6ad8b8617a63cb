//! Railway-oriented binding blocks for [`Result`].
//!
//! A binding block is straight-line code over fallible steps: each
//! `scope.bind(result)?` either yields the success value or stops the block,
//! and the first failure becomes the result of the whole binding. Only that
//! first failure is kept; nothing after it runs.
//!
//! Two engines share the same contract:
//!
//! - [`binding`] runs a non-suspending block on the calling thread.
//! - [`async_ext::binding_async`] runs a block that may `.await` between binds
//!   (requires the `async` feature).
//!
//! Panics are never turned into `Err`: they unwind to whoever called or
//! awaited the binding.
//!
//! # Examples
//!
//! ## Straight-line code over fallible steps
//!
//! ```
//! use rail_binding::binding;
//!
//! #[derive(Debug, PartialEq)]
//! enum SignupError {
//!     EmptyName,
//!     BadAge(String),
//! }
//!
//! fn name(raw: &str) -> Result<String, SignupError> {
//!     if raw.is_empty() { Err(SignupError::EmptyName) } else { Ok(raw.to_owned()) }
//! }
//!
//! fn age(raw: &str) -> Result<u8, SignupError> {
//!     raw.parse().map_err(|_| SignupError::BadAge(raw.to_owned()))
//! }
//!
//! let user = binding(|scope| {
//!     let name = scope.bind(name("ada"))?;
//!     let age = scope.bind(age("36"))?;
//!     Ok(format!("{name} ({age})"))
//! });
//! assert_eq!(user, Ok("ada (36)".to_string()));
//!
//! let rejected = binding(|scope| {
//!     let name = scope.bind(name(""))?;
//!     let age = scope.bind(age("old"))?;
//!     Ok(format!("{name} ({age})"))
//! });
//! assert_eq!(rejected, Err(SignupError::EmptyName));
//! ```
//!
//! ## Without the trailing `Ok`
//!
//! ```
//! use rail_binding::binding;
//!
//! let total: Result<i32, &str> = binding!(|scope| scope.bind(Ok(1))? + scope.bind(Ok(2))?);
//! assert_eq!(total, Ok(3));
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

/// The synchronous binding engine
pub mod binding;
/// Shorthand macros for binding blocks
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The shared `bind` capability
pub mod traits;
/// The short-circuit signal and the `Bound` alias
pub mod types;

/// The suspending binding engine (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use binding::{binding, BindingScope};
pub use traits::Binder;
pub use types::{Bound, ShortCircuit};
