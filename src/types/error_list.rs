//! Non-empty, ordered error sequence used by [`Validation::Failure`](crate::Validation::Failure).
//!
//! The first error is stored apart from the rest, so an empty list cannot be
//! built and every accessor that needs "an" error is total.

use core::iter::{Chain, Once};

use crate::types::alloc_type::Vec;
use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Borrowing iterator over an [`ErrorList`], in insertion order.
pub type Iter<'a, E> = Chain<Once<&'a E>, core::slice::Iter<'a, E>>;

/// Owning iterator over an [`ErrorList`], in insertion order.
pub type IntoIter<E> = Chain<Once<E>, smallvec::IntoIter<[E; 1]>>;

/// One or more errors, kept in the order they were produced.
///
/// # Examples
///
/// ```
/// use outcome_rail::ErrorList;
///
/// let mut errors = ErrorList::new("too short");
/// errors.push("missing digit");
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first(), &"too short");
/// assert_eq!(errors.last(), &"missing digit");
///
/// assert!(ErrorList::<&str>::try_from_iter([]).is_none());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorList<E> {
    head: E,
    tail: ErrorVec<E>,
}

impl<E> ErrorList<E> {
    /// Creates a list holding a single error.
    #[inline]
    pub fn new(first: E) -> Self {
        Self { head: first, tail: ErrorVec::new() }
    }

    /// Collects errors into a list, or returns `None` when there are none.
    #[must_use]
    pub fn try_from_iter<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let mut iter = errors.into_iter();
        let head = iter.next()?;
        Some(Self { head, tail: iter.collect() })
    }

    /// Appends one error at the end.
    #[inline]
    pub fn push(&mut self, error: E) {
        self.tail.push(error);
    }

    /// Moves every error of `other` to the end of this list.
    #[inline]
    pub fn append(&mut self, other: ErrorList<E>) {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    /// Returns the earliest error.
    #[must_use]
    #[inline]
    pub fn first(&self) -> &E {
        &self.head
    }

    /// Returns the most recent error.
    #[must_use]
    #[inline]
    pub fn last(&self) -> &E {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Returns the number of errors, always at least one.
    #[must_use]
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Iterates over the errors in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, E> {
        core::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Borrows every error.
    #[inline]
    pub fn as_ref(&self) -> ErrorList<&E> {
        ErrorList { head: &self.head, tail: self.tail.iter().collect() }
    }

    /// Transforms every error, preserving order.
    #[inline]
    pub fn map<G, F>(self, mut f: F) -> ErrorList<G>
    where
        F: FnMut(E) -> G,
    {
        let head = f(self.head);
        ErrorList { head, tail: self.tail.into_iter().map(f).collect() }
    }

    /// Consumes the list, keeping only the earliest error.
    #[inline]
    pub fn into_first(self) -> E {
        self.head
    }

    /// Consumes the list, keeping only the most recent error.
    #[inline]
    pub fn into_last(mut self) -> E {
        self.tail.pop().unwrap_or(self.head)
    }

    /// Consumes the list into a `Vec`, preserving order.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        let mut errors = Vec::with_capacity(self.len());
        errors.extend(self);
        errors
    }
}

impl<E> From<E> for ErrorList<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl<E> Extend<E> for ErrorList<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.tail.extend(iter);
    }
}

impl<E> IntoIterator for ErrorList<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        core::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, E> IntoIterator for &'a ErrorList<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
