//! Async extensions.
//!
//! The `*_async` combinators on every container need no feature flag. This
//! module adds what they cannot express on their own: adapters for futures
//! that already yield an `Outcome`, async accumulation of validations, and
//! `tracing` integration.
//!
//! # Feature Flags
//!
//! - `async`: [`FutureOutcomeExt`] and [`MapOutcome`]
//! - `async-validation`: `validate_all_async`, `validate_seq_async`
//! - `tracing` (implies `async`): span recording and failure events
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude_async::*;
//!
//! async fn fetch_port(raw: &str) -> Outcome<u16, String> {
//!     Outcome::from_result(raw.parse::<u16>().map_err(|e| e.to_string()))
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let port = fetch_port("8080").map_success(|p| p + 1).await;
//! assert_eq!(port, Outcome::success(8081));
//! # });
//! ```

mod future_ext;
mod outcome_future;
#[cfg(feature = "tracing")]
mod tracing_ext;
#[cfg(feature = "async-validation")]
mod validation;

pub use future_ext::FutureOutcomeExt;
pub use outcome_future::MapOutcome;
#[cfg(feature = "tracing")]
pub use tracing_ext::{
    instrument_error, FutureSpanExt, OutcomeSpanExt, SpanContextFuture, ValidationSpanExt,
    SPAN_METADATA_KEY,
};
#[cfg(feature = "async-validation")]
pub use validation::{validate_all_async, validate_seq_async};
