//! # outcome-rail
//!
//! Closed algebraic containers with one combinator vocabulary:
//!
//! - [`Maybe`] - a value or nothing
//! - [`Outcome`] - a value or one error, failing fast
//! - [`Validation`] - a value or every error, accumulating
//! - [`Either`] and [`Either3`] through [`Either7`] - one of several
//!   alternatives, none of them privileged
//!
//! Every container offers `fold`, `map`, `and_then`, `on_*` observers and
//! `perform`, each with an `*_async` counterpart that awaits caller-supplied
//! futures. Conversions between containers are named methods or `From` impls;
//! collapsing many validation errors into one always takes an explicit
//! [`CollapseErrors`] policy.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Fail fast
//!
//! ```
//! use outcome_rail::{Error, Maybe, Outcome};
//!
//! fn find_user(id: u32) -> Maybe<&'static str> {
//!     if id == 7 { Maybe::some("ada") } else { Maybe::none() }
//! }
//!
//! let greeting: Outcome<String> = find_user(7)
//!     .to_outcome_with(|| Error::not_found("user.missing", "no such user"))
//!     .map(|name| format!("hello {name}"));
//! assert_eq!(greeting, Outcome::success("hello ada".to_string()));
//!
//! let missing = find_user(1).to_outcome_with(|| Error::not_found("user.missing", "no such user"));
//! assert!(missing.is_failure());
//! ```
//!
//! ## Validation Accumulation
//!
//! ```
//! use outcome_rail::{Error, Validation};
//!
//! let checks = vec![
//!     Validation::success(10),
//!     Validation::failure(Error::validation("qty.negative", "quantity below zero")),
//!     Validation::failure(Error::validation("qty.odd", "quantity must be even")),
//! ];
//! let combined: Validation<Vec<i32>> = checks.into_iter().collect();
//!
//! let collapsed = combined.to_outcome(Error::aggregate);
//! let err = collapsed.fold(|_| None, Some).expect("two checks failed");
//! assert_eq!(err.message(), "quantity below zero; quantity must be even");
//! ```
//!
//! ## Tagged unions
//!
//! ```
//! use outcome_rail::{Either, Skip};
//!
//! let parsed: Either<String, u16> = Either::right(8080);
//! let port = parsed
//!     .perform(Skip, |p: &u16| assert!(*p > 1024))
//!     .fold(|_| 80, |p| p);
//! assert_eq!(port, 8080);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversion helpers and std interop
pub mod convert;
/// Tagged unions of two to seven alternatives
pub mod either;
/// Macros for combining validations
pub mod macros;
/// Optional value container
pub mod maybe;
/// Fail-fast success-or-error container
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Handler and error-collapse traits
pub mod traits;
/// Error, ErrorKind and ErrorList
pub mod types;
/// Accumulating validation container
pub mod validation;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use convert::*;
pub use either::{Either, Either3, Either4, Either5, Either6, Either7};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use traits::*;
pub use types::{Error, ErrorKind, ErrorList, ErrorVec};
pub use validation::{ValidateAll, Validation};
