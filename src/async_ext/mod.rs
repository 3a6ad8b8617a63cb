//! Async extensions: the suspending binding engine.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! rail-binding = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use rail_binding::prelude_async::*;
//!
//! async fn checkout(id: u64) -> Result<Receipt, ShopError> {
//!     binding_async(|scope| async move {
//!         let cart = scope.bind(load_cart(id).await)?;
//!         let payment = scope.bind(charge(&cart).await)?;
//!         Ok(Receipt::new(cart, payment))
//!     })
//!     .await
//! }
//! ```

mod binding_future;
mod suspend;

#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use binding_future::BindingFuture;
pub use suspend::{binding_async, SuspendingScope};

#[cfg(feature = "async-tokio")]
pub use tokio_ext::binding_task;
