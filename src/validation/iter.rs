use crate::types::error_list;
use crate::validation::core::Validation;

/// Borrowing iterator over the success value, yielding at most one item.
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Owning iterator over the success value, yielding at most one item.
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Iterator over the accumulated errors of a [`Validation`].
///
/// Empty for a valid value.
pub enum ErrorsIter<'a, E> {
    Empty,
    Many(error_list::Iter<'a, E>),
}

impl<'a, E> Iterator for ErrorsIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ErrorsIter::Empty => None,
            ErrorsIter::Many(it) => it.next(),
        }
    }
}

impl<T, E> IntoIterator for Validation<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Validation::Success(value) => IntoIter { inner: Some(value) },
            Validation::Failure(_) => IntoIter { inner: None },
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Validation<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> Validation<T, E> {
    /// Iterates over the success value, if any.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Validation::Success(value) => Iter { inner: Some(value) },
            Validation::Failure(_) => Iter { inner: None },
        }
    }

    /// Iterates over the accumulated errors in the order they were produced.
    pub fn errors(&self) -> ErrorsIter<'_, E> {
        match self {
            Validation::Success(_) => ErrorsIter::Empty,
            Validation::Failure(errors) => ErrorsIter::Many(errors.iter()),
        }
    }
}
