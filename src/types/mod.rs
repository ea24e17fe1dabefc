//! Payload types shared by the containers.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, ErrorKind, ErrorList};
//!
//! let err = Error::not_found("user.missing", "user 42 does not exist")
//!     .with_metadata("user_id", "42");
//!
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//! assert_eq!(err.to_string(), "[user.missing] user 42 does not exist");
//!
//! let mut errors = ErrorList::new(err);
//! errors.push(Error::validation("name.empty", "name must not be empty"));
//! assert_eq!(errors.len(), 2);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error;
pub mod error_list;

pub use error::*;
pub use error_list::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for 1 element to avoid heap allocations
/// in the common case where a single extra error is appended.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
