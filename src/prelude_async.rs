//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the async-specific items enabled by the active features.
//!
//! # Usage
//!
//! ```
//! use outcome_rail::prelude_async::*;
//!
//! async fn lookup(id: u32) -> Outcome<&'static str, u32> {
//!     if id == 1 { Outcome::success("root") } else { Outcome::failure(id) }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let name = lookup(2)
//!     .map_failure(|id| Error::not_found("user.missing", format!("no user {id}")))
//!     .await;
//! assert!(name.is_failure());
//! # });
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Macros**: [`validate!`]
//! - **Containers**: [`Maybe`], [`Outcome`], [`Validation`], [`Either`] and friends
//! - **Errors**: [`Error`], [`ErrorKind`], [`ErrorList`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`FutureOutcomeExt`](crate::async_ext::FutureOutcomeExt) - `.map_success()` and `.map_failure()` for futures
//! - **Types**: [`MapOutcome`](crate::async_ext::MapOutcome)
//! - **Functions** (`async-validation`): `validate_all_async`, `validate_seq_async`
//! - **Traits** (`tracing`): `FutureSpanExt`, `OutcomeSpanExt`, `ValidationSpanExt`

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{FutureOutcomeExt, MapOutcome};

#[cfg(feature = "async-validation")]
pub use crate::async_ext::{validate_all_async, validate_seq_async};

#[cfg(feature = "tracing")]
pub use crate::async_ext::{FutureSpanExt, OutcomeSpanExt, ValidationSpanExt};
