//! Tracing integration.
//!
//! Records the active `tracing` span on failures and emits structured events
//! for them, so an error that travels far from its origin still says where
//! it was produced.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature, which also turns on `async`:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tracing"] }
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::outcome::Outcome;
use crate::types::Error;
use crate::validation::Validation;

/// Metadata key under which the span name is stored.
pub const SPAN_METADATA_KEY: &str = "span";

/// Extension trait for futures that records the span on failure.
///
/// # Example
///
/// ```rust
/// use outcome_rail::async_ext::FutureSpanExt;
/// use outcome_rail::{Error, Outcome};
/// use tracing::info_span;
///
/// let _guard = tracing::subscriber::set_default(tracing_subscriber::registry());
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let span = info_span!("fetch_user");
/// let outcome = async { Outcome::<(), Error>::failure(Error::not_found("user.missing", "no such user")) }
///     .with_span(span)
///     .await;
///
/// let err = outcome.fold(|_| None, Some).expect("failure");
/// assert_eq!(err.metadata_value("span"), Some("fetch_user"));
/// # });
/// ```
pub trait FutureSpanExt<T>: Future<Output = Outcome<T, Error>> + Sized {
    /// Records the span that is current at call time on the resolved failure.
    fn with_span_context(self) -> SpanContextFuture<Self> {
        SpanContextFuture { inner: self, span: Span::current() }
    }

    /// Records the given span on the resolved failure.
    fn with_span(self, span: Span) -> SpanContextFuture<Self> {
        SpanContextFuture { inner: self, span }
    }
}

impl<F, T> FutureSpanExt<T> for F where F: Future<Output = Outcome<T, Error>> {}

pin_project! {
    /// Future wrapper that records a span on failure.
    ///
    /// Created by [`FutureSpanExt::with_span_context`] or [`FutureSpanExt::with_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct SpanContextFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, T> Future for SpanContextFuture<F>
where
    F: Future<Output = Outcome<T, Error>>,
{
    type Output = Outcome<T, Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(outcome) => Poll::Ready(outcome.map_err(|err| annotate(err, this.span))),
            Poll::Pending => Poll::Pending,
        }
    }
}

fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}

fn annotate(error: Error, span: &Span) -> Error {
    error.with_metadata(SPAN_METADATA_KEY, span_name(span))
}

fn emit(error: &Error) {
    tracing::warn!(
        code = error.code(),
        kind = error.kind().as_str(),
        message = error.message(),
        "operation failed"
    );
}

/// Span and logging helpers for `Outcome<T, Error>`.
pub trait OutcomeSpanExt<T> {
    /// Records the current span on the failure.
    fn with_current_span(self) -> Outcome<T, Error>;

    /// Records the given span on the failure.
    fn with_span(self, span: &Span) -> Outcome<T, Error>;

    /// Emits a `warn` event for the failure; returns `self` unchanged.
    fn log_failure(self) -> Outcome<T, Error>;
}

impl<T> OutcomeSpanExt<T> for Outcome<T, Error> {
    fn with_current_span(self) -> Outcome<T, Error> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Outcome<T, Error> {
        self.map_err(|err| annotate(err, span))
    }

    fn log_failure(self) -> Outcome<T, Error> {
        self.on_failure(emit)
    }
}

/// Span and logging helpers for `Validation<T, Error>`.
pub trait ValidationSpanExt<T> {
    /// Records the current span on every error.
    fn with_current_span(self) -> Validation<T, Error>;

    /// Emits one `warn` event per error; returns `self` unchanged.
    fn log_failures(self) -> Validation<T, Error>;
}

impl<T> ValidationSpanExt<T> for Validation<T, Error> {
    fn with_current_span(self) -> Validation<T, Error> {
        let span = Span::current();
        self.map_err(|err| annotate(err, &span))
    }

    fn log_failures(self) -> Validation<T, Error> {
        self.on_failure(|errors| errors.iter().for_each(emit))
    }
}

/// Records the current span on a single error.
///
/// # Example
///
/// ```rust
/// use outcome_rail::async_ext::instrument_error;
/// use outcome_rail::Error;
///
/// let error = instrument_error(Error::unexpected("db.down", "database unreachable"));
/// assert!(error.metadata_value("span").is_some());
/// ```
pub fn instrument_error(error: Error) -> Error {
    annotate(error, &Span::current())
}
