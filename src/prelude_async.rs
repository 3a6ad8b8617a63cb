//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the suspending engine.
//!
//! # Usage
//!
//! ```ignore
//! use rail_binding::prelude_async::*;
//!
//! async fn profile(id: u64) -> Result<Profile, ApiError> {
//!     binding_async(|scope| async move {
//!         let user = scope.bind(fetch_user(id).await)?;
//!         let avatar = scope.bind(fetch_avatar(&user).await)?;
//!         Ok(Profile { user, avatar })
//!     })
//!     .await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros / functions**: [`binding`](crate::binding()), [`binding!`](crate::binding!)
//! - **Types**: [`BindingScope`](crate::BindingScope), [`ShortCircuit`](crate::ShortCircuit), [`Bound`](crate::Bound)
//! - **Traits**: [`Binder`](crate::Binder)
//!
//! ## Async-Specific
//!
//! - **Macros**: [`binding_async!`](crate::binding_async!)
//! - **Functions**: [`binding_async`](crate::async_ext::binding_async), and
//!   [`binding_task`](crate::async_ext::binding_task) with `async-tokio`
//! - **Types**: [`SuspendingScope`](crate::async_ext::SuspendingScope), [`BindingFuture`](crate::async_ext::BindingFuture)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{binding_async, BindingFuture, SuspendingScope};

// `binding_async!` macro, alongside the function of the same name
pub use crate::binding_async;

#[cfg(feature = "async-tokio")]
pub use crate::async_ext::binding_task;
