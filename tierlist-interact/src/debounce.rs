//! Debounced value pair.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Quiet period used by search inputs.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// An input value paired with a delayed "settled" copy.
///
/// `value` follows every [`set`](Self::set) immediately. `settled` only
/// changes once `delay` passes without another `set`, and then carries the
/// last value set. [`flush`](Self::flush) and [`clear`](Self::clear) settle
/// synchronously. At most one timer is pending at any time.
pub struct Debounced<T> {
    value: T,
    settled: Arc<watch::Sender<T>>,
    delay: Duration,
    /// Bumped on every cancellation so a timer that already woke up cannot
    /// publish a superseded value.
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debounced<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T, delay: Duration) -> Self {
        let (settled, _) = watch::channel(initial.clone());
        Self {
            value: initial,
            settled: Arc::new(settled),
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// The immediate value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The settled value.
    pub fn settled(&self) -> T {
        self.settled.borrow().clone()
    }

    /// Observes settled transitions.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.settled.subscribe()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns true while a settle timer is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Updates the immediate value and restarts the settle timer.
    ///
    /// Without a tokio runtime the timer is unavailable and the value settles
    /// at once.
    pub fn set(&mut self, value: T) {
        let generation = self.cancel();
        self.value = value.clone();

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let settled = Arc::clone(&self.settled);
                let current = Arc::clone(&self.generation);
                let delay = self.delay;
                self.pending = Some(runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    settled.send_if_modified(|slot| {
                        if current.load(Ordering::SeqCst) != generation {
                            return false;
                        }
                        *slot = value;
                        true
                    });
                }));
            }
            Err(e) => {
                warn!(error = %e, "debounce timer unavailable, settling immediately");
                self.settled.send_replace(value);
            }
        }
    }

    /// Cancels the pending timer and settles the current value now.
    pub fn flush(&mut self) {
        self.cancel();
        self.settled.send_replace(self.value.clone());
    }

    /// Cancels the pending timer and resets both sides to `reset_to`.
    pub fn clear(&mut self, reset_to: T) {
        self.cancel();
        self.value = reset_to.clone();
        self.settled.send_replace(reset_to);
    }

    /// Invalidates any outstanding timer; returns the new generation.
    fn cancel(&mut self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("debounce timer superseded");
            }
            handle.abort();
        }
        generation
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
