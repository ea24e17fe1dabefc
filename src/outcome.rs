//! Success value or a single error.
//!
//! [`Outcome`] fails fast: the first failure in an `and_then` chain is the one
//! surfaced and no downstream closure runs. Use
//! [`Validation`](crate::Validation) when every failing check must be
//! reported.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! fn parse_age(raw: &str) -> Outcome<u8> {
//!     match raw.parse::<u8>() {
//!         Ok(age) => Outcome::success(age),
//!         Err(_) => Outcome::failure(Error::validation("age.parse", "age is not a number")),
//!     }
//! }
//!
//! let adult = parse_age("42").map(|age| age >= 18);
//! assert_eq!(adult, Outcome::success(true));
//!
//! let code = parse_age("x").fold(|_| "ok".to_string(), |err| err.code().to_string());
//! assert_eq!(code, "age.parse");
//! ```

use core::future::Future;

use crate::either::Either;
use crate::maybe::Maybe;
use crate::traits::Observer;
use crate::types::{Error, ErrorList};
use crate::validation::Validation;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A success value or exactly one error.
///
/// The error type defaults to [`Error`]; any other type works the same way.
///
/// # Variants
///
/// * `Success(T)` - the operation produced a value
/// * `Failure(E)` - the operation failed with one cause
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E = Error> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` on success.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` on failure.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows both payloads.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Eliminates the container by calling exactly one handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(2);
    /// assert_eq!(ok.fold(|v| v * 10, |_| -1), 20);
    /// ```
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Async counterpart of [`fold`](Self::fold).
    pub async fn fold_async<U, S, F, SFut, FFut>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(error) => on_failure(error).await,
        }
    }

    /// Chains a fallible computation on the success value.
    ///
    /// A failure is repackaged unchanged and `f` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn non_zero(n: i32) -> Outcome<i32, &'static str> {
    ///     if n == 0 { Outcome::failure("zero") } else { Outcome::success(n) }
    /// }
    ///
    /// assert_eq!(Outcome::success(3).and_then(non_zero), Outcome::success(3));
    /// assert_eq!(Outcome::success(0).and_then(non_zero), Outcome::failure("zero"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Async counterpart of [`and_then`](Self::and_then).
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the success value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Async counterpart of [`map`](Self::map).
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value).await),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error, leaving a success untouched.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Recovers from a failure with a computation that sees the error.
    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// Runs `f` for its side effect on success; returns `self` unchanged.
    #[inline]
    pub fn on_success<R, F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> R,
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Runs `f` for its side effect on failure; returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let failed: Outcome<i32, &str> = Outcome::failure("disk full");
    /// let same = failed.on_failure(|err| log.push(err.to_string()));
    ///
    /// assert_eq!(same, Outcome::failure("disk full"));
    /// assert_eq!(log, vec!["disk full".to_string()]);
    /// ```
    #[inline]
    pub fn on_failure<R, F>(self, f: F) -> Self
    where
        F: FnOnce(&E) -> R,
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Async counterpart of [`on_success`](Self::on_success).
    pub async fn on_success_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future,
    {
        if let Self::Success(value) = &self {
            f(value).await;
        }
        self
    }

    /// Async counterpart of [`on_failure`](Self::on_failure).
    pub async fn on_failure_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&E) -> Fut,
        Fut: Future,
    {
        if let Self::Failure(error) = &self {
            f(error).await;
        }
        self
    }

    /// Runs whichever handler matches the current variant, if one was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Skip};
    /// use std::cell::RefCell;
    ///
    /// let seen = RefCell::new(Vec::new());
    /// let failed: Outcome<i32, &str> = Outcome::failure("boom");
    /// let same = failed.perform(Skip, |err: &&str| seen.borrow_mut().push(err.to_string()));
    ///
    /// assert_eq!(same, Outcome::failure("boom"));
    /// assert_eq!(*seen.borrow(), vec!["boom".to_string()]);
    /// ```
    #[inline]
    pub fn perform<S, F>(self, on_success: S, on_failure: F) -> Self
    where
        S: Observer<T>,
        F: Observer<E>,
    {
        match &self {
            Self::Success(value) => on_success.observe(value),
            Self::Failure(error) => on_failure.observe(error),
        }
        self
    }

    /// Returns `self` on success, otherwise `alternative`.
    #[inline]
    pub fn fallback_to(self, alternative: Self) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => alternative,
        }
    }

    /// Returns `self` on success, otherwise the outcome produced by `f`.
    #[inline]
    pub fn fallback_to_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => f(),
        }
    }

    /// Async counterpart of [`fallback_to_with`](Self::fallback_to_with).
    pub async fn fallback_to_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => f().await,
        }
    }

    /// Keeps the success value and drops the error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Converts into a [`Validation`], wrapping the error as a one-element list.
    #[inline]
    pub fn to_validation(self) -> Validation<T, E> {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(error) => Validation::Failure(ErrorList::new(error)),
        }
    }

    /// Converts into an [`Either`] with the error on the left.
    #[inline]
    pub fn to_either(self) -> Either<E, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(error) => Either::Left(error),
        }
    }

    /// Wraps a std [`Result`].
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Converts into a std [`Result`].
    ///
    /// # Errors
    ///
    /// Returns `Err` with the stored error when this outcome is a failure.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
