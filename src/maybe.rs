//! Presence or absence of a value.
//!
//! [`Maybe`] is the crate's option type. It carries no error; converting it to
//! an [`Outcome`] or a [`Validation`] requires the caller to supply the error
//! that stands for "missing".
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Maybe, Outcome};
//!
//! fn find_port(raw: &str) -> Maybe<u16> {
//!     Maybe::from_option(raw.parse().ok())
//! }
//!
//! let port = find_port("8080").map(|p| p + 1);
//! assert_eq!(port, Maybe::some(8081));
//!
//! let missing = find_port("http").to_outcome(Error::not_found("port", "no port"));
//! assert!(missing.is_failure());
//! ```

use core::future::Future;

use crate::outcome::Outcome;
use crate::traits::{Action, Observer};
use crate::types::ErrorList;
use crate::validation::Validation;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Variants
///
/// * `Some(T)` - a value is present
/// * `None` - no value
///
/// # Examples
///
/// ```
/// use outcome_rail::Maybe;
///
/// let present = Maybe::some(3);
/// let absent: Maybe<i32> = Maybe::none();
///
/// assert_eq!(present.fold(|v| v * 2, || 0), 6);
/// assert_eq!(absent.fold(|v| v * 2, || 0), 0);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Maybe<T> {
    /// Creates a present value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert!(Maybe::some("x").is_some());
    /// ```
    #[inline]
    pub fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an absent value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert!(Maybe::<u8>::none().is_none());
    /// ```
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Returns `true` if a value is present.
    #[must_use]
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[must_use]
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Borrows the payload.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Eliminates the container by calling exactly one handler.
    ///
    /// # Arguments
    ///
    /// * `on_some` - called with the value when present
    /// * `on_none` - called when absent
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// let label = Maybe::some(4).fold(|n| format!("{n} items"), || "empty".to_string());
    /// assert_eq!(label, "4 items");
    /// ```
    #[inline]
    pub fn fold<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Async counterpart of [`fold`](Self::fold).
    ///
    /// Only the selected handler is called, and only its future is awaited.
    ///
    /// # Examples
    ///
    /// ```
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// use outcome_rail::Maybe;
    ///
    /// let n = Maybe::some(2).fold_async(|v| async move { v + 1 }, || async { 0 }).await;
    /// assert_eq!(n, 3);
    /// # });
    /// ```
    pub async fn fold_async<U, S, N, SFut, NFut>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = U>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => on_some(value).await,
            Self::None => on_none().await,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// `f` is never called on `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(8).and_then(half).and_then(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).and_then(half).and_then(half), Maybe::none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    /// Async counterpart of [`and_then`](Self::and_then).
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Some(value) => f(value).await,
            Self::None => Maybe::None,
        }
    }

    /// Transforms the value, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert_eq!(Maybe::some(20).map(|x| x + 1), Maybe::some(21));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x + 1), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Async counterpart of [`map`](Self::map).
    pub async fn map_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => Maybe::Some(f(value).await),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            },
            Self::None => Self::None,
        }
    }

    /// Runs `f` for its side effect when a value is present.
    ///
    /// The container is returned unchanged either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    /// use std::cell::Cell;
    ///
    /// let hits = Cell::new(0);
    /// let value = Maybe::some(5).on_some(|_| hits.set(hits.get() + 1));
    /// assert_eq!(value, Maybe::some(5));
    /// assert_eq!(hits.get(), 1);
    /// ```
    #[inline]
    pub fn on_some<R, F>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> R,
    {
        if let Self::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Runs `f` for its side effect when no value is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    /// use std::cell::Cell;
    ///
    /// let hits = Cell::new(0);
    /// let value = Maybe::some(5).on_none(|| hits.set(hits.get() + 1));
    /// assert_eq!(value, Maybe::some(5));
    /// assert_eq!(hits.get(), 0);
    /// ```
    #[inline]
    pub fn on_none<R, F>(self, f: F) -> Self
    where
        F: FnOnce() -> R,
    {
        if self.is_none() {
            f();
        }
        self
    }

    /// Async counterpart of [`on_some`](Self::on_some).
    pub async fn on_some_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future,
    {
        if let Self::Some(value) = &self {
            f(value).await;
        }
        self
    }

    /// Async counterpart of [`on_none`](Self::on_none).
    pub async fn on_none_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        if self.is_none() {
            f().await;
        }
        self
    }

    /// Runs whichever handler matches the current variant, if one was given.
    ///
    /// Pass [`Skip`](crate::Skip) for a variant that needs no handler.
    #[inline]
    pub fn perform<S, N>(self, on_some: S, on_none: N) -> Self
    where
        S: Observer<T>,
        N: Action,
    {
        match &self {
            Self::Some(value) => on_some.observe(value),
            Self::None => on_none.run(),
        }
        self
    }

    /// Returns `self` when present, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).fallback_to(Maybe::some(9)), Maybe::some(1));
    /// assert_eq!(Maybe::none().fallback_to(Maybe::some(9)), Maybe::some(9));
    /// ```
    #[inline]
    pub fn fallback_to(self, alternative: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => alternative,
        }
    }

    /// Returns `self` when present, otherwise the value produced by `f`.
    ///
    /// `f` is only called on `None`.
    #[inline]
    pub fn fallback_to_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => f(),
        }
    }

    /// Async counterpart of [`fallback_to_with`](Self::fallback_to_with).
    pub async fn fallback_to_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            Self::Some(_) => self,
            Self::None => f().await,
        }
    }

    /// Converts into an [`Outcome`], using `error` for the absent case.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::some(1).to_outcome("missing"), Outcome::success(1));
    /// assert_eq!(Maybe::<i32>::none().to_outcome("missing"), Outcome::failure("missing"));
    /// ```
    #[inline]
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(error),
        }
    }

    /// Converts into an [`Outcome`], producing the error lazily.
    #[inline]
    pub fn to_outcome_with<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(f()),
        }
    }

    /// Converts into a [`Validation`], using `error` for the absent case.
    #[inline]
    pub fn to_validation<E>(self, error: E) -> Validation<T, E> {
        match self {
            Self::Some(value) => Validation::Success(value),
            Self::None => Validation::Failure(ErrorList::new(error)),
        }
    }

    /// Converts into a [`Validation`], producing the error lazily.
    #[inline]
    pub fn to_validation_with<E, F>(self, f: F) -> Validation<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Validation::Success(value),
            Self::None => Validation::Failure(ErrorList::new(f())),
        }
    }

    /// Wraps a std [`Option`].
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Converts into a std [`Option`].
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> From<T> for Maybe<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
