//! Conversion helpers between `Maybe`, `Outcome`, `Validation` and std types.
//!
//! The named methods on each container cover most needs; these free functions
//! are convenient in iterator pipelines (`.map(outcome_to_validation)`) and
//! when adopting the crate around code that still returns `Result`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::{KeepFirst, Outcome, Validation};
//!
//! let result: Result<i32, &str> = Ok(42);
//! let validation = result_to_validation(result);
//! assert!(validation.is_success());
//!
//! let invalid = Validation::<i32, &str>::failure("failed");
//! assert_eq!(validation_to_outcome(invalid, KeepFirst), Outcome::failure("failed"));
//! ```

use core::iter::FusedIterator;

use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::traits::CollapseErrors;
use crate::types::{error_list, ErrorList};
use crate::validation::core::Validation;

/// Converts an `Outcome` to a `Validation`, wrapping the error in a one-element list.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_validation;
/// use outcome_rail::Outcome;
///
/// let failed: Outcome<i32, &str> = Outcome::failure("boom");
/// assert_eq!(outcome_to_validation(failed).errors().count(), 1);
/// ```
#[inline]
pub fn outcome_to_validation<T, E>(outcome: Outcome<T, E>) -> Validation<T, E> {
    outcome.to_validation()
}

/// Converts a `Validation` to an `Outcome`, reducing the errors with `policy`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::validation_to_outcome;
/// use outcome_rail::{KeepLast, Outcome, Validation};
///
/// let checks = [Validation::<(), &str>::failure("a"), Validation::failure("b")];
/// let all: Validation<Vec<()>, &str> = checks.into_iter().collect();
/// assert_eq!(validation_to_outcome(all, KeepLast), Outcome::failure("b"));
/// ```
#[inline]
pub fn validation_to_outcome<T, E, P>(validation: Validation<T, E>, policy: P) -> Outcome<T, E>
where
    P: CollapseErrors<E>,
{
    validation.to_outcome(policy)
}

/// Converts a `Result` to a `Validation`.
///
/// * `Validation::Success(value)` if result is `Ok`
/// * `Validation::Failure([error])` if result is `Err`
#[inline]
pub fn result_to_validation<T, E>(result: Result<T, E>) -> Validation<T, E> {
    Validation::from_result(result)
}

/// Converts a `Maybe` to an `Outcome`, using `error` for the absent case.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::maybe_to_outcome;
/// use outcome_rail::{Maybe, Outcome};
///
/// assert_eq!(maybe_to_outcome(Maybe::<i32>::none(), "missing"), Outcome::failure("missing"));
/// ```
#[inline]
pub fn maybe_to_outcome<T, E>(maybe: Maybe<T>, error: E) -> Outcome<T, E> {
    maybe.to_outcome(error)
}

/// Collects multiple errors into a single `Validation`.
///
/// * `Validation::Success(())` if no errors
/// * `Validation::Failure(errors)` if any errors present
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_errors;
///
/// let validation = collect_errors(vec!["error1", "error2"]);
/// assert!(validation.is_failure());
///
/// let no_errors: Vec<&str> = vec![];
/// assert!(collect_errors(no_errors).is_success());
/// ```
pub fn collect_errors<E, I>(errors: I) -> Validation<(), E>
where
    I: IntoIterator<Item = E>,
{
    match ErrorList::try_from_iter(errors) {
        Some(list) => Validation::Failure(list),
        None => Validation::Success(()),
    }
}

/// Iterator returned by [`split_validation_errors`].
pub enum SplitValidationIter<T, E> {
    Success(Option<T>),
    Failure(error_list::IntoIter<E>),
}

impl<T, E> Iterator for SplitValidationIter<T, E> {
    type Item = Outcome<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Success(value) => value.take().map(Outcome::Success),
            Self::Failure(iter) => iter.next().map(Outcome::Failure),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Success(value) => {
                let len = usize::from(value.is_some());
                (len, Some(len))
            },
            Self::Failure(iter) => iter.size_hint(),
        }
    }
}

impl<T, E> ExactSizeIterator for SplitValidationIter<T, E> {}
impl<T, E> FusedIterator for SplitValidationIter<T, E> {}

/// Splits a `Validation` into one `Outcome` per error, or a single success.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::split_validation_errors;
/// use outcome_rail::{ErrorList, Outcome, Validation};
///
/// let valid = Validation::<i32, &str>::success(42);
/// let outcomes: Vec<_> = split_validation_errors(valid).collect();
/// assert_eq!(outcomes, vec![Outcome::success(42)]);
///
/// let errors = ErrorList::try_from_iter(["err1", "err2"]).expect("non-empty");
/// let outcomes: Vec<_> = split_validation_errors(Validation::<i32, _>::failures(errors)).collect();
/// assert_eq!(outcomes, vec![Outcome::failure("err1"), Outcome::failure("err2")]);
/// ```
pub fn split_validation_errors<T, E>(validation: Validation<T, E>) -> SplitValidationIter<T, E> {
    match validation {
        Validation::Success(value) => SplitValidationIter::Success(Some(value)),
        Validation::Failure(errors) => SplitValidationIter::Failure(errors.into_iter()),
    }
}

impl<T, E> From<Outcome<T, E>> for Validation<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_validation()
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

impl<T, E> From<ErrorList<E>> for Validation<T, E> {
    #[inline]
    fn from(errors: ErrorList<E>) -> Self {
        Validation::Failure(errors)
    }
}
