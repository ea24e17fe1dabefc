//! Accumulating combination of independent validations.

use crate::outcome::Outcome;
use crate::types::ErrorList;
use crate::validation::core::Validation;

/// Combines a tuple of up to six validations into a validation of a tuple.
///
/// Every component is inspected. Errors are concatenated in tuple order and
/// the combined value is produced only when all components succeed.
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::ValidateAll;
/// use outcome_rail::Validation;
///
/// let name = Validation::<&str, &str>::success("ada");
/// let age = Validation::<u8, &str>::failure("age.range");
/// let email = Validation::<&str, &str>::failure("email.format");
///
/// let all = (name, age, email).all();
/// let errors: Vec<_> = all.errors().copied().collect();
/// assert_eq!(errors, vec!["age.range", "email.format"]);
/// ```
pub trait ValidateAll {
    /// Tuple of the success values.
    type Output;
    /// Shared error type.
    type Error;

    /// Runs the accumulation.
    fn all(self) -> Validation<Self::Output, Self::Error>;
}

macro_rules! impl_validate_all {
    ($first:ident $fv:ident, $($ty:ident $v:ident),+ => $pat:pat) => {
        impl<E, $first, $($ty),+> ValidateAll
            for (Validation<$first, E>, $(Validation<$ty, E>),+)
        {
            type Output = ($first, $($ty),+);
            type Error = E;

            fn all(self) -> Validation<Self::Output, E> {
                let ($fv, $($v),+) = self;
                $fv$(.zip($v))+.map(|$pat| ($fv, $($v),+))
            }
        }
    };
}

impl<E, A> ValidateAll for (Validation<A, E>,) {
    type Output = (A,);
    type Error = E;

    fn all(self) -> Validation<(A,), E> {
        self.0.map(|a| (a,))
    }
}

impl_validate_all!(A a, B b => (a, b));
impl_validate_all!(A a, B b, C c => ((a, b), c));
impl_validate_all!(A a, B b, C c, D d => (((a, b), c), d));
impl_validate_all!(A a, B b, C c, D d, F f => ((((a, b), c), d), f));
impl_validate_all!(A a, B b, C c, D d, F f, G g => (((((a, b), c), d), f), g));

/// Folds items into a collection, concatenating the errors of every failed item.
fn accumulate<C, T, E, I>(items: I) -> Validation<C, E>
where
    C: FromIterator<T>,
    I: Iterator<Item = Validation<T, E>>,
{
    let mut errors: Option<ErrorList<E>> = None;
    let values: C = items
        .filter_map(|item| match item {
            Validation::Success(value) => Some(value),
            Validation::Failure(errs) => {
                errors = Some(match errors.take() {
                    Some(mut acc) => {
                        acc.append(errs);
                        acc
                    },
                    None => errs,
                });
                None
            },
        })
        .collect();

    match errors {
        Some(errs) => Validation::Failure(errs),
        None => Validation::Success(values),
    }
}

/// Collects validations, keeping every error.
///
/// # Examples
///
/// ```
/// use outcome_rail::Validation;
///
/// let inputs = [Validation::<i32, &str>::success(1), Validation::failure("a"), Validation::failure("b")];
/// let collected: Validation<Vec<i32>, &str> = inputs.into_iter().collect();
/// assert_eq!(collected.errors().count(), 2);
/// ```
impl<C, T, E> FromIterator<Validation<T, E>> for Validation<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Validation<T, E>>>(iter: I) -> Self {
        accumulate(iter.into_iter())
    }
}

/// Collects outcomes without stopping at the first failure.
impl<C, T, E> FromIterator<Outcome<T, E>> for Validation<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        accumulate(iter.into_iter().map(Outcome::to_validation))
    }
}

/// Collects std results without stopping at the first failure.
impl<C, T, E> FromIterator<Result<T, E>> for Validation<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        accumulate(iter.into_iter().map(Validation::from_result))
    }
}
