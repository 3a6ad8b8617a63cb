//! Types shared by the synchronous and suspending binding engines.
//!
//! # Examples
//!
//! ```
//! use rail_binding::{binding, Bound};
//!
//! fn double(scope: &rail_binding::BindingScope<&'static str>, raw: Result<i32, &'static str>) -> Bound<i32> {
//!     Ok(scope.bind(raw)? * 2)
//! }
//!
//! let result = binding(|scope| double(scope, Ok(21)));
//! assert_eq!(result, Ok(42));
//! ```

pub mod short_circuit;

pub use short_circuit::{Bound, ShortCircuit};
