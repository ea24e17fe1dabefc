//! Many-to-one error policies.
//!
//! Turning a [`Validation`](crate::Validation) into an
//! [`Outcome`](crate::Outcome) has to reduce one or more errors to exactly
//! one. The reduction is always chosen by the caller through
//! [`CollapseErrors`]; nothing picks an error implicitly.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ErrorList, KeepFirst, KeepLast, Outcome, Validation};
//!
//! let errors = ErrorList::try_from_iter(["first", "second"]).expect("non-empty");
//! let checks: Validation<i32, &str> = Validation::failures(errors);
//!
//! assert_eq!(checks.clone().to_outcome(KeepFirst), Outcome::failure("first"));
//! assert_eq!(checks.clone().to_outcome(KeepLast), Outcome::failure("second"));
//!
//! let joined = checks.to_outcome(ErrorList::into_first);
//! assert_eq!(joined, Outcome::failure("first"));
//! ```

use crate::types::ErrorList;

/// Reduces a non-empty error list to a single error.
pub trait CollapseErrors<E> {
    /// Consumes the list, producing exactly one error.
    fn collapse(self, errors: ErrorList<E>) -> E;
}

impl<E, F> CollapseErrors<E> for F
where
    F: FnOnce(ErrorList<E>) -> E,
{
    #[inline]
    fn collapse(self, errors: ErrorList<E>) -> E {
        self(errors)
    }
}

/// Keeps the earliest error and drops the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeepFirst;

impl<E> CollapseErrors<E> for KeepFirst {
    #[inline]
    fn collapse(self, errors: ErrorList<E>) -> E {
        errors.into_first()
    }
}

/// Keeps the most recent error and drops the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeepLast;

impl<E> CollapseErrors<E> for KeepLast {
    #[inline]
    fn collapse(self, errors: ErrorList<E>) -> E {
        errors.into_last()
    }
}
