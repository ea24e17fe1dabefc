//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`validate!`]
//! - **Containers**: [`Maybe`], [`Outcome`], [`Validation`], [`Either`], [`Either3`] … [`Either7`]
//! - **Errors**: [`Error`], [`ErrorKind`], [`ErrorList`]
//! - **Traits**: [`ValidateAll`], [`Observer`], [`Action`], [`CollapseErrors`]
//! - **Markers**: [`Skip`], [`KeepFirst`], [`KeepLast`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn port(raw: &str) -> Outcome<u16> {
//!     Outcome::from_result(raw.parse::<u16>())
//!         .map_err(|e| Error::validation("port.parse", e.to_string()))
//! }
//!
//! assert_eq!(port("443"), Outcome::success(443));
//! assert_eq!(port("x").to_maybe(), Maybe::none());
//! ```

// Macros
pub use crate::validate;

// Containers
pub use crate::either::{Either, Either3, Either4, Either5, Either6, Either7};
pub use crate::maybe::Maybe;
pub use crate::outcome::Outcome;
pub use crate::validation::{ValidateAll, Validation};

// Errors
pub use crate::types::{Error, ErrorKind, ErrorList};

// Traits and markers
pub use crate::traits::{Action, CollapseErrors, KeepFirst, KeepLast, Observer, Skip};
