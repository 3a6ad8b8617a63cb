//! Traits shared by the binding engines.
//!
//! - [`Binder`]: the sealed `bind` capability implemented by every binding scope
//!
//! # Examples
//!
//! ```
//! use rail_binding::traits::Binder;
//! use rail_binding::{binding, Bound};
//!
//! fn checked_div(scope: &impl Binder<&'static str>, a: i32, b: i32) -> Bound<i32> {
//!     scope.ensure(b != 0, || "division by zero")?;
//!     Ok(a / b)
//! }
//!
//! assert_eq!(binding(|scope| checked_div(scope, 6, 3)), Ok(2));
//! assert_eq!(binding(|scope| checked_div(scope, 6, 0)), Err("division by zero"));
//! ```

pub mod binder;

pub use binder::Binder;
