//! Validation that accumulates every error instead of stopping at the first.
//!
//! # Key Components
//!
//! - [`Validation`] - a valid value or a non-empty list of errors
//! - [`ValidateAll`] - combine a tuple of independent validations
//! - `FromIterator` impls - collect validations, outcomes or results while
//!   keeping every failure
//!
//! # Examples
//!
//! ```
//! use outcome_rail::validation::Validation;
//!
//! let valid: Validation<i32, &str> = Validation::success(42);
//! assert!(valid.is_success());
//!
//! let checks = [Validation::<i32, &str>::failure("err1"), Validation::failure("err2")];
//! let all: Validation<Vec<i32>, &str> = checks.into_iter().collect();
//! assert_eq!(all.errors().count(), 2);
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
pub use self::traits::ValidateAll;
