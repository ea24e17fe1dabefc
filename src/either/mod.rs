//! Tagged unions of two to seven alternatives.
//!
//! [`Either`] holds a `Left` or a `Right`; [`Either3`] through [`Either7`]
//! name their arms `First`, `Second`, … and `Last`. Neither arm is treated as
//! an error: every arm gets its own `map_*`, `and_then_*`, `on_*` and
//! `to_maybe_*` operation, and the arms not targeted pass through unchanged.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Either, Either3};
//!
//! let doubled = Either::<i32, &str>::left(5).map_left(|x| x * 2);
//! assert_eq!(doubled, Either::left(10));
//!
//! let untouched = Either::<i32, &str>::right("e").map_left(|x| x * 2);
//! assert_eq!(untouched, Either::right("e"));
//!
//! let shape: Either3<u8, &str, f64> = Either3::second("circle");
//! let label = shape.fold(|n| n.to_string(), |s| s.to_uppercase(), |f| format!("{f:.1}"));
//! assert_eq!(label, "CIRCLE");
//! ```

#[macro_use]
mod family;

use crate::outcome::Outcome;

either_family! {
    /// One of two values, `Left` or `Right`.
    Either { Left(L), Right(R) }
}

either_family! {
    /// One of three values.
    Either3 { First(T1), Second(T2), Last(T3) }
}

either_family! {
    /// One of four values.
    Either4 { First(T1), Second(T2), Third(T3), Last(T4) }
}

either_family! {
    /// One of five values.
    Either5 { First(T1), Second(T2), Third(T3), Fourth(T4), Last(T5) }
}

either_family! {
    /// One of six values.
    Either6 { First(T1), Second(T2), Third(T3), Fourth(T4), Fifth(T5), Last(T6) }
}

either_family! {
    /// One of seven values.
    Either7 { First(T1), Second(T2), Third(T3), Fourth(T4), Fifth(T5), Sixth(T6), Last(T7) }
}

impl<L, R> Either<L, R> {
    /// Exchanges the arms.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::left(1).swap(), Either::right(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }

    /// Treats `Right` as success and turns `Left` into an error with `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Either, Outcome};
    ///
    /// let parsed: Either<&str, i32> = Either::left("not a number");
    /// let outcome = parsed.to_outcome_right(|raw| format!("rejected {raw}"));
    /// assert_eq!(outcome, Outcome::failure("rejected not a number".to_string()));
    /// ```
    #[inline]
    pub fn to_outcome_right<E, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(L) -> E,
    {
        match self {
            Self::Left(l) => Outcome::Failure(f(l)),
            Self::Right(r) => Outcome::Success(r),
        }
    }

    /// Treats `Left` as success and turns `Right` into an error with `f`.
    #[inline]
    pub fn to_outcome_left<E, F>(self, f: F) -> Outcome<L, E>
    where
        F: FnOnce(R) -> E,
    {
        match self {
            Self::Left(l) => Outcome::Success(l),
            Self::Right(r) => Outcome::Failure(f(r)),
        }
    }
}
