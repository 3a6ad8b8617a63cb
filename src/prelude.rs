//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rail_binding::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`binding!`](crate::binding!)
//! - **Functions**: [`binding`]
//! - **Types**: [`BindingScope`], [`ShortCircuit`], [`Bound`]
//! - **Traits**: [`Binder`]
//!
//! # Examples
//!
//! ```
//! use rail_binding::prelude::*;
//!
//! fn non_empty(scope: &impl Binder<&'static str>, s: &str) -> Bound<usize> {
//!     scope.ensure(!s.is_empty(), || "empty input")?;
//!     Ok(s.len())
//! }
//!
//! let lengths = binding(|scope| {
//!     let a = non_empty(scope, "rail")?;
//!     let b = non_empty(scope, "way")?;
//!     Ok(a + b)
//! });
//! assert_eq!(lengths, Ok(7));
//! ```

// `binding` function and `binding!` macro
pub use crate::binding;

// Core types
pub use crate::binding::BindingScope;
pub use crate::types::{Bound, ShortCircuit};

// Traits
pub use crate::traits::Binder;
