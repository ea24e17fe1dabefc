//! Future wrapper that transforms an `Outcome` once it resolves.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::outcome::Outcome;

pin_project! {
    /// A future that applies a function to the inner future's `Outcome`.
    ///
    /// The function is called exactly once, when the inner future resolves.
    ///
    /// # Cancel Safety
    ///
    /// `MapOutcome` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::prelude_async::*;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let doubled = async { Outcome::<i32, &str>::success(21) }.map_success(|n| n * 2).await;
    /// assert_eq!(doubled, Outcome::success(42));
    /// # });
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct MapOutcome<Fut, F> {
        #[pin]
        future: Fut,
        f: Option<F>,
    }
}

impl<Fut, F> MapOutcome<Fut, F> {
    /// Creates a new `MapOutcome` from the inner future and the transformation.
    #[inline]
    pub fn new(future: Fut, f: F) -> Self {
        Self { future, f: Some(f) }
    }
}

impl<Fut, F, T, E, U, G> Future for MapOutcome<Fut, F>
where
    Fut: Future<Output = Outcome<T, E>>,
    F: FnOnce(Outcome<T, E>) -> Outcome<U, G>,
{
    type Output = Outcome<U, G>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| {
            let f = this
                .f
                .take()
                .expect("MapOutcome polled after completion; this is a bug");
            f(outcome)
        })
    }
}

impl<Fut, F, T, E, U, G> FusedFuture for MapOutcome<Fut, F>
where
    Fut: FusedFuture<Output = Outcome<T, E>>,
    F: FnOnce(Outcome<T, E>) -> Outcome<U, G>,
{
    fn is_terminated(&self) -> bool {
        self.f.is_none() || self.future.is_terminated()
    }
}
