//! Trailing-edge debouncing.
//!
//! A [`Debouncer`] owns at most one pending invocation. Each call cancels
//! the pending one and schedules a fresh timer, so the wrapped function
//! only runs with the arguments of the last call before a quiet period.
//! Once the timer fires the invocation runs to completion; it is not
//! aborted by later calls.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Coalescing wrapper around an async function.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer<T, F> {
    interval: Duration,
    func: Arc<F>,
    pending: Option<CancellationToken>,
    _args: std::marker::PhantomData<fn(T)>,
}

impl<T, F, Fut> Debouncer<T, F>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    pub fn new(func: F, interval: Duration) -> Self {
        Self {
            interval,
            func: Arc::new(func),
            pending: None,
            _args: std::marker::PhantomData,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Discards any pending invocation and schedules `args`.
    pub fn call(&mut self, args: T) {
        self.cancel();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let func = Arc::clone(&self.func);
        let interval = self.interval;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("debounced invocation superseded");
                }
                _ = tokio::time::sleep(interval) => {
                    (*func)(args).await;
                }
            }
        });

        self.pending = Some(token);
    }

    /// Cancels the pending invocation, if its timer has not fired yet.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl<T, F> Drop for Debouncer<T, F> {
    fn drop(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

/// Wraps `func` so that bursts of calls closer than `interval` collapse
/// into one call carrying the last arguments.
pub fn debounce<T, F, Fut>(func: F, interval: Duration) -> Debouncer<T, F>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Debouncer::new(func, interval)
}
