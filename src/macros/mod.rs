//! Macros for combining independent validations.
//!
//! - [`macro@crate::validate`] - Runs every check, concatenates the errors in
//!   argument order and, when all pass, either returns the tuple of values or
//!   builds a value from the named results.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{validate, Error, Validation};
//!
//! #[derive(Debug, PartialEq)]
//! struct Signup {
//!     name: String,
//!     age: u8,
//! }
//!
//! fn name(raw: &str) -> Validation<String> {
//!     if raw.is_empty() {
//!         Validation::failure(Error::validation("name.empty", "name is required"))
//!     } else {
//!         Validation::success(raw.to_string())
//!     }
//! }
//!
//! fn age(raw: u8) -> Validation<u8> {
//!     if raw < 18 {
//!         Validation::failure(Error::validation("age.minor", "must be an adult"))
//!     } else {
//!         Validation::success(raw)
//!     }
//! }
//!
//! let ok = validate!(name = name("ada"), age = age(36) => Signup { name, age });
//! assert_eq!(ok, Validation::success(Signup { name: "ada".into(), age: 36 }));
//!
//! let bad = validate!(name(""), age(12));
//! let codes: Vec<_> = bad.errors().map(|e| e.code()).collect();
//! assert_eq!(codes, vec!["name.empty", "age.minor"]);
//! ```

/// Combines up to six validations, keeping every error.
///
/// Two forms are accepted:
///
/// - `validate!(a, b, c)` yields `Validation<(A, B, C), E>`
/// - `validate!(x = a, y = b => expr)` binds each success value to its name
///   and evaluates `expr` only when every check passed
///
/// All checks are evaluated before the results are combined.
///
/// # Examples
///
/// ```
/// use outcome_rail::{validate, Validation};
///
/// let sum = validate!(x = Validation::<i32, &str>::success(1), y = Validation::success(2) => x + y);
/// assert_eq!(sum, Validation::success(3));
///
/// let pair = validate!(Validation::<i32, &str>::failure("x"), Validation::<i32, &str>::failure("y"));
/// assert_eq!(pair.errors().copied().collect::<Vec<_>>(), vec!["x", "y"]);
/// ```
#[macro_export]
macro_rules! validate {
    ($($name:ident = $check:expr),+ => $build:expr) => {
        $crate::validation::ValidateAll::all(($($check,)+)).map(|($($name,)+)| $build)
    };
    ($($check:expr),+ $(,)?) => {
        $crate::validation::ValidateAll::all(($($check,)+))
    };
}
