//! Handler traits for [`perform`](crate::Maybe::perform), where every
//! variant handler is optional.
//!
//! A handler slot accepts either a closure or [`Skip`]. Closures passed this
//! way need an annotated argument type (`|value: &i32| ...`) because the
//! compiler only infers closure signatures from `Fn*` bounds.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Maybe, Skip};
//! use std::cell::Cell;
//!
//! let seen = Cell::new(0);
//! let value = Maybe::some(7).perform(|v: &i32| seen.set(*v), Skip);
//!
//! assert_eq!(value, Maybe::some(7));
//! assert_eq!(seen.get(), 7);
//! ```

/// Optional observer of a borrowed payload.
pub trait Observer<T: ?Sized> {
    /// Runs the handler against `value`.
    fn observe(self, value: &T);
}

impl<T: ?Sized, F> Observer<T> for F
where
    F: FnOnce(&T),
{
    #[inline]
    fn observe(self, value: &T) {
        self(value)
    }
}

/// Optional handler for a variant without payload, such as `Maybe::None`.
pub trait Action {
    /// Runs the handler.
    fn run(self);
}

impl<F> Action for F
where
    F: FnOnce(),
{
    #[inline]
    fn run(self) {
        self()
    }
}

/// Placeholder for a variant that should not be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Skip;

impl<T: ?Sized> Observer<T> for Skip {
    #[inline]
    fn observe(self, _value: &T) {}
}

impl Action for Skip {
    #[inline]
    fn run(self) {}
}
