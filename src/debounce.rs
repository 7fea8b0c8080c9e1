//! Cancellable debounce handle for coalescing rapid repeated calls.
//!
//! Typeahead search and similar UI-driven callers fire on every keystroke;
//! wrapping the downstream call in a [`Debouncer`] collapses a burst of
//! invocations into one, executed with the most recent argument after the
//! delay elapses with no further call.

use std::{future::Future, marker::PhantomData, time::Duration};

use tokio::task::JoinHandle;

/// Delay applied by [`Debouncer::with_default_delay`].
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// A single-argument debounce wrapper around an async function.
///
/// Each instance owns the handle of the currently scheduled task. A new
/// [`call`](Debouncer::call) aborts any pending task and reschedules, so only
/// the last call within the delay window executes. Dropping the debouncer
/// aborts whatever is still pending.
///
/// # Example
///
/// ```
/// let mut search = Debouncer::with_default_delay(|term: String| async move {
///     println!("searching for {}", term);
/// });
/// search.call("el".to_string());
/// search.call("el cap".to_string()); // only this one runs
/// ```
pub struct Debouncer<T, F, Fut>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    delay: Duration,
    func: F,
    pending: Option<JoinHandle<()>>,
    _marker: PhantomData<fn(T) -> Fut>,
}

impl<T, F, Fut> Debouncer<T, F, Fut>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    pub fn new(delay: Duration, func: F) -> Self {
        Debouncer {
            delay,
            func,
            pending: None,
            _marker: PhantomData,
        }
    }

    pub fn with_default_delay(func: F) -> Self {
        Self::new(DEFAULT_DELAY, func)
    }

    /// Schedules the wrapped function with `arg`, cancelling any invocation
    /// still waiting out its delay.
    pub fn call(&mut self, arg: T) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let func = self.func.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            func(arg).await;
        }));
    }
}

impl<T, F, Fut> Drop for Debouncer<T, F, Fut>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
