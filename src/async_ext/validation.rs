//! Async validation utilities.
//!
//! Runs several async validations and collects every error, mirroring the
//! accumulating behavior of the sync [`Validation`].

use core::future::Future;

use crate::types::alloc_type::Vec;
use crate::types::ErrorList;
use crate::Validation;

/// Runs multiple async validations sequentially and collects all errors.
///
/// Unlike `Outcome`, which short-circuits on the first error, every future is
/// awaited and the errors are concatenated in iteration order.
///
/// # Note
///
/// Validations are awaited **sequentially** (not in parallel) to stay runtime
/// neutral. For parallel execution, use a runtime-specific combinator such as
/// `tokio::join!` and combine the results with
/// [`ValidateAll`](crate::validation::ValidateAll).
///
/// # Example
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// async fn check(n: i32) -> Validation<i32, String> {
///     if n > 0 { Validation::success(n) } else { Validation::failure(format!("{n} is not positive")) }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let all = validate_all_async([check(1), check(-2), check(-3)]).await;
/// assert_eq!(all.errors().count(), 2);
/// # });
/// ```
pub async fn validate_all_async<T, E, Fut, I>(validations: I) -> Validation<Vec<T>, E>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Validation<T, E>>,
{
    let iter = validations.into_iter();
    let (lower, upper) = iter.size_hint();
    let capacity = upper.unwrap_or(lower);

    let mut values = Vec::with_capacity(capacity);
    let mut errors: Option<ErrorList<E>> = None;

    for fut in iter {
        match fut.await {
            Validation::Success(v) => {
                if errors.is_none() {
                    values.push(v);
                }
            },
            Validation::Failure(errs) => match errors.as_mut() {
                Some(acc) => acc.append(errs),
                None => errors = Some(errs),
            },
        }
    }

    match errors {
        Some(errs) => Validation::Failure(errs),
        None => Validation::Success(values),
    }
}

/// Runs async validations sequentially, where each validation receives the
/// previous value.
///
/// Stops at the first invalid result and returns its errors.
///
/// # Example
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let steps: [fn(i32) -> std::future::Ready<Validation<i32, &'static str>>; 2] = [
///     |n| std::future::ready(Validation::success(n + 1)),
///     |n| std::future::ready(if n > 1 { Validation::success(n) } else { Validation::failure("too small") }),
/// ];
/// assert_eq!(validate_seq_async(1, steps).await, Validation::success(2));
/// # });
/// ```
pub async fn validate_seq_async<T, E, F, Fut>(
    initial: T,
    validators: impl IntoIterator<Item = F>,
) -> Validation<T, E>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Validation<T, E>>,
{
    let mut current = initial;

    for validator in validators {
        match validator(current).await {
            Validation::Success(v) => current = v,
            invalid => return invalid,
        }
    }

    Validation::Success(current)
}
