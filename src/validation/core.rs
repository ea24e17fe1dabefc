use core::future::Future;

use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::traits::{CollapseErrors, Observer};
use crate::types::{Error, ErrorList};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Applicative-style validation that accumulates many errors instead of failing fast.
///
/// `Validation<T, E>` either succeeds with a value of type `T` or fails with one
/// or more errors of type `E`. Unlike [`Outcome`], which stops at the first
/// error, `Validation` keeps every failure, making it the right container for
/// form checks and other independent validations.
///
/// # Serde Support
///
/// `Validation` implements `Serialize` and `Deserialize` when `T` and `E` do.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type, [`Error`] by default
///
/// # Variants
///
/// * `Success(T)` - Contains a successful value
/// * `Failure(ErrorList<E>)` - Contains one or more errors, in evaluation order
///
/// # Examples
///
/// ```
/// use outcome_rail::Validation;
///
/// let valid = Validation::<i32, &str>::success(42);
/// assert!(valid.is_success());
///
/// let invalid = Validation::<i32, &str>::failure("error");
/// assert!(invalid.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Validation<T, E = Error> {
    Success(T),
    Failure(ErrorList<E>),
}

impl<T, E> Validation<T, E> {
    /// Creates a valid value.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Maybe, Validation};
    ///
    /// let v = Validation::<i32, &str>::success(42);
    /// assert_eq!(v.to_maybe(), Maybe::some(42));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates an invalid value from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validation;
    ///
    /// let v = Validation::<(), &str>::failure("missing field");
    /// assert_eq!(v.errors().count(), 1);
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(ErrorList::new(error))
    }

    /// Creates an invalid value from a non-empty error list.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ErrorList, Validation};
    ///
    /// let errors = ErrorList::try_from_iter(["missing", "invalid"]).expect("non-empty");
    /// let v = Validation::<(), &str>::failures(errors);
    /// assert_eq!(v.errors().count(), 2);
    /// ```
    #[inline]
    pub fn failures(errors: ErrorList<E>) -> Self {
        Self::Failure(errors)
    }

    /// Returns `true` if the validation contains a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the validation contains errors.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the value and every error.
    #[inline]
    pub fn as_ref(&self) -> Validation<&T, &E> {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(errors) => Validation::Failure(errors.as_ref()),
        }
    }

    /// Eliminates the container by calling exactly one handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validation;
    ///
    /// let v = Validation::<i32, &str>::failure("bad");
    /// let report = v.fold(|n| n.to_string(), |errs| format!("{} error(s)", errs.len()));
    /// assert_eq!(report, "1 error(s)");
    /// ```
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(ErrorList<E>) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }

    /// Async counterpart of [`fold`](Self::fold).
    pub async fn fold_async<U, S, F, SFut, FFut>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        F: FnOnce(ErrorList<E>) -> FFut,
        FFut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(errors) => on_failure(errors).await,
        }
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the validation is invalid, the errors are preserved unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validation;
    ///
    /// let v = Validation::<i32, &str>::success(21);
    /// assert_eq!(v.map(|x| x * 2), Validation::success(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Validation::Success(f(value)),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Async counterpart of [`map`](Self::map).
    pub async fn map_async<U, F, Fut>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => Validation::Success(f(value).await),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Chains computations that may produce additional validation errors.
    ///
    /// Behaves like [`Outcome::and_then`], propagating invalid states while
    /// invoking `f` only when the current validation is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validation;
    ///
    /// fn parse_even(input: i32) -> Validation<i32, &'static str> {
    ///     if input % 2 == 0 {
    ///         Validation::success(input)
    ///     } else {
    ///         Validation::failure("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Validation::success(4).and_then(parse_even), Validation::success(4));
    /// assert!(Validation::success(3).and_then(parse_even).is_failure());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Async counterpart of [`and_then`](Self::and_then).
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Validation<U, E>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Calls `op` if the validation is invalid, otherwise returns the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validation;
    ///
    /// let v = Validation::<i32, &str>::failure("error");
    /// let res = v.or_else(|_errs| Validation::<i32, &str>::success(42));
    /// assert_eq!(res, Validation::success(42));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Validation<T, G>
    where
        F: FnOnce(ErrorList<E>) -> Validation<T, G>,
    {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(errors) => op(errors),
        }
    }

    /// Maps each error while preserving the success branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validation;
    ///
    /// let v = Validation::<i32, &str>::failure("error");
    /// let mapped = v.map_err(|e| format!("Error: {}", e));
    /// assert_eq!(mapped, Validation::failure("Error: error".to_string()));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Validation<T, G>
    where
        F: FnMut(E) -> G,
    {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(errors) => Validation::Failure(errors.map(f)),
        }
    }

    /// Combines two validations into a tuple, accumulating all errors.
    ///
    /// Both sides are always evaluated; when both are invalid the errors of
    /// `self` come first.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Validation;
    ///
    /// let v1 = Validation::<i32, &str>::success(42);
    /// let v2 = Validation::<i32, &str>::success(21);
    /// assert_eq!(v1.zip(v2), Validation::success((42, 21)));
    ///
    /// let v3 = Validation::<i32, &str>::failure("error1");
    /// let v4 = Validation::<i32, &str>::failure("error2");
    /// let errors: Vec<_> = v3.zip(v4).errors().copied().collect();
    /// assert_eq!(errors, vec!["error1", "error2"]);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Combines two validations with `f`, accumulating all errors.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Validation<U, E>, f: F) -> Validation<R, E>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success(f(a, b)),
            (Validation::Failure(e), Validation::Success(_)) => Validation::Failure(e),
            (Validation::Success(_), Validation::Failure(e)) => Validation::Failure(e),
            (Validation::Failure(mut e1), Validation::Failure(e2)) => {
                e1.append(e2);
                Validation::Failure(e1)
            },
        }
    }

    /// Runs `f` for its side effect when valid; returns `self` unchanged.
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

    /// Runs `f` for its side effect when invalid; returns `self` unchanged.
    #[inline]
    pub fn on_failure<R, F>(self, f: F) -> Self
    where
        F: FnOnce(&ErrorList<E>) -> R,
    {
        if let Self::Failure(errors) = &self {
            f(errors);
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
        F: FnOnce(&ErrorList<E>) -> Fut,
        Fut: Future,
    {
        if let Self::Failure(errors) = &self {
            f(errors).await;
        }
        self
    }

    /// Runs whichever handler matches the current variant, if one was given.
    #[inline]
    pub fn perform<S, F>(self, on_success: S, on_failure: F) -> Self
    where
        S: Observer<T>,
        F: Observer<ErrorList<E>>,
    {
        match &self {
            Self::Success(value) => on_success.observe(value),
            Self::Failure(errors) => on_failure.observe(errors),
        }
        self
    }

    /// Returns `self` when valid, otherwise `alternative`.
    #[inline]
    pub fn fallback_to(self, alternative: Self) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => alternative,
        }
    }

    /// Returns `self` when valid, otherwise the validation produced by `f`.
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

    /// Keeps the value and drops the errors.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// Converts into an [`Outcome`], reducing the errors with `policy`.
    ///
    /// There is no default policy: the caller decides whether to keep the
    /// first error, the last one, or build a composite such as
    /// [`Error::aggregate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{KeepFirst, Outcome, Validation};
    ///
    /// let v = Validation::<i32, &str>::failure("error");
    /// assert_eq!(v.to_outcome(KeepFirst), Outcome::failure("error"));
    /// ```
    #[inline]
    pub fn to_outcome<P>(self, policy: P) -> Outcome<T, E>
    where
        P: CollapseErrors<E>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(errors) => Outcome::Failure(policy.collapse(errors)),
        }
    }

    /// Converts into a std [`Result`], keeping every error.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the full error list when invalid.
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorList<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Wraps a std `Result`, turning the error side into a singleton list.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Wraps an [`Outcome`], turning the error side into a singleton list.
    #[inline]
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        outcome.to_validation()
    }
}
