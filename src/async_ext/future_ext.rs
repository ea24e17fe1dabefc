//! Extension trait for `Future<Output = Outcome<T, E>>`.
//!
//! The container-level `*_async` methods take async closures; these adapters
//! go the other way and post-process a future that already yields an
//! `Outcome`, without an extra `async` block at the call site.

use core::future::Future;

use crate::outcome::Outcome;

use super::outcome_future::MapOutcome;

/// Extension trait for transforming the `Outcome` produced by a future.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// async fn load(id: u32) -> Outcome<String, u32> {
///     if id == 0 { Outcome::failure(404) } else { Outcome::success(format!("user-{id}")) }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let missing = load(0)
///     .map_failure(|status| Error::not_found("user.missing", format!("status {status}")))
///     .await;
/// assert_eq!(missing.fold(|_| String::new(), |e| e.code().to_string()), "user.missing");
/// # });
/// ```
pub trait FutureOutcomeExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Transforms the success value once the future resolves.
    fn map_success<U, F>(self, f: F) -> MapOutcome<Self, impl FnOnce(Outcome<T, E>) -> Outcome<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        self.map_outcome(move |outcome| outcome.map(f))
    }

    /// Transforms the error once the future resolves.
    fn map_failure<G, F>(self, f: F) -> MapOutcome<Self, impl FnOnce(Outcome<T, E>) -> Outcome<T, G>>
    where
        F: FnOnce(E) -> G,
    {
        self.map_outcome(move |outcome| outcome.map_err(f))
    }

    /// Transforms the whole `Outcome` once the future resolves.
    fn map_outcome<U, G, F>(self, f: F) -> MapOutcome<Self, F>
    where
        F: FnOnce(Outcome<T, E>) -> Outcome<U, G>;
}

impl<Fut, T, E> FutureOutcomeExt<T, E> for Fut
where
    Fut: Future<Output = Outcome<T, E>>,
{
    #[inline]
    fn map_outcome<U, G, F>(self, f: F) -> MapOutcome<Self, F>
    where
        F: FnOnce(Outcome<T, E>) -> Outcome<U, G>,
    {
        MapOutcome::new(self, f)
    }
}
