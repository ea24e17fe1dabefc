//! Traits used at the seams of the combinator algebra.
//!
//! - [`Observer`] / [`Action`] / [`Skip`]: optional handlers for `perform`
//! - [`CollapseErrors`] / [`KeepFirst`] / [`KeepLast`]: explicit policies for
//!   reducing many errors to one
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{CollapseErrors, KeepLast};
//! use outcome_rail::ErrorList;
//!
//! let errors = ErrorList::try_from_iter([1, 2, 3]).expect("non-empty");
//! assert_eq!(KeepLast.collapse(errors), 3);
//! ```

pub mod collapse;
pub mod observe;

pub use collapse::{CollapseErrors, KeepFirst, KeepLast};
pub use observe::{Action, Observer, Skip};
