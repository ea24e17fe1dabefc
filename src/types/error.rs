//! The default error payload carried by [`Outcome`](crate::Outcome) and
//! [`Validation`](crate::Validation).
//!
//! [`Error`] is an immutable value: a stable code, a human message, an
//! [`ErrorKind`] classification, and optional key/value metadata. The
//! containers never inspect it; they only move it between variants.

use core::fmt::{self, Display};

use crate::types::alloc_type::{BTreeMap, Cow, String, ToString};
use crate::types::ErrorList;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of an [`Error`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// A general, expected failure.
    Failure,
    /// Something that should not have happened.
    Unexpected,
    /// Input rejected by a check.
    Validation,
    /// The operation conflicts with current state.
    Conflict,
    /// The requested resource does not exist.
    NotFound,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is authenticated but not allowed.
    Forbidden,
}

impl ErrorKind {
    /// Returns a stable lowercase name for this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::NotFound.as_str(), "not_found");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Failure => "failure",
            Self::Unexpected => "unexpected",
            Self::Validation => "validation",
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable error value with code, message, kind, and metadata.
///
/// Every "modifying" method consumes `self` and returns a new value, so an
/// `Error` held inside a container is never mutated in place.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, ErrorKind};
///
/// let err = Error::new(ErrorKind::Conflict, "order.locked", "order is being edited")
///     .with_metadata("order_id", "A-17");
///
/// assert_eq!(err.code(), "order.locked");
/// assert_eq!(err.metadata_value("order_id"), Some("A-17"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    kind: ErrorKind,
    #[cfg_attr(feature = "serde", serde(default))]
    metadata: BTreeMap<String, String>,
}

impl Error {
    /// Creates an error of the given kind.
    #[inline]
    pub fn new<C, M>(kind: ErrorKind, code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self { code: code.into(), message: message.into(), kind, metadata: BTreeMap::new() }
    }

    /// Creates an [`ErrorKind::Failure`] error.
    #[inline]
    pub fn failure<C, M>(code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Failure, code, message)
    }

    /// Creates an [`ErrorKind::Unexpected`] error.
    #[inline]
    pub fn unexpected<C, M>(code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Unexpected, code, message)
    }

    /// Creates an [`ErrorKind::Validation`] error.
    #[inline]
    pub fn validation<C, M>(code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Validation, code, message)
    }

    /// Creates an [`ErrorKind::Conflict`] error.
    #[inline]
    pub fn conflict<C, M>(code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Conflict, code, message)
    }

    /// Creates an [`ErrorKind::NotFound`] error.
    #[inline]
    pub fn not_found<C, M>(code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::NotFound, code, message)
    }

    /// Creates an [`ErrorKind::Unauthorized`] error.
    #[inline]
    pub fn unauthorized<C, M>(code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Unauthorized, code, message)
    }

    /// Creates an [`ErrorKind::Forbidden`] error.
    #[inline]
    pub fn forbidden<C, M>(code: C, message: M) -> Self
    where
        C: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Forbidden, code, message)
    }

    /// Returns a copy of this error with one more metadata entry.
    ///
    /// An existing entry with the same key is replaced.
    #[inline]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns the stable error code.
    #[must_use]
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human readable message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the classification.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns all metadata, ordered by key.
    #[must_use]
    #[inline]
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Looks up a single metadata value.
    #[must_use]
    #[inline]
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Folds a list of errors into one composite error.
    ///
    /// The composite keeps the shared kind when every error agrees on it and
    /// falls back to [`ErrorKind::Failure`] otherwise. Messages are joined
    /// with `"; "` in list order; the metadata records the error `count` and
    /// the comma separated `codes`.
    ///
    /// Because it is a plain `fn(ErrorList<Error>) -> Error`, it can be passed
    /// directly as the collapse policy of
    /// [`Validation::to_outcome`](crate::Validation::to_outcome).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, ErrorKind, ErrorList, Validation};
    ///
    /// let checks: Validation<()> = Validation::failures(
    ///     ErrorList::try_from_iter([
    ///         Error::validation("email", "email is invalid"),
    ///         Error::validation("age", "age is negative"),
    ///     ])
    ///     .expect("two errors"),
    /// );
    ///
    /// let outcome = checks.to_outcome(Error::aggregate);
    /// let err = outcome.fold(|_| unreachable!(), |err| err);
    /// assert_eq!(err.kind(), ErrorKind::Validation);
    /// assert_eq!(err.message(), "email is invalid; age is negative");
    /// assert_eq!(err.metadata_value("count"), Some("2"));
    /// assert_eq!(err.metadata_value("codes"), Some("email,age"));
    /// ```
    pub fn aggregate(errors: ErrorList<Error>) -> Error {
        let first_kind = errors.first().kind;
        let kind = if errors.iter().all(|err| err.kind == first_kind) {
            first_kind
        } else {
            ErrorKind::Failure
        };

        let mut message = String::new();
        let mut codes = String::new();
        for (index, err) in errors.iter().enumerate() {
            if index > 0 {
                message.push_str("; ");
                codes.push(',');
            }
            message.push_str(&err.message);
            codes.push_str(&err.code);
        }

        Error::new(kind, "errors.aggregate", message)
            .with_metadata("count", errors.len().to_string())
            .with_metadata("codes", codes)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl core::error::Error for Error {}
