//! Timing primitives used by the controller.
//!
//! - [`Debouncer`]: at most one pending deferred action; triggering again
//!   replaces it.
//! - [`PollSchedule`]: the single deadline of the next poll tick; re-arming
//!   replaces it.
//! - [`TickGuard`]: lock-free rejection of ticks that follow the previous
//!   one too closely.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Runs the most recently triggered action after its delay.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` after `delay`, aborting any action still pending.
    pub fn trigger<F>(&self, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        let previous = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Abort the pending action, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().unwrap_or_else(|e| e.into_inner()).take() {
            previous.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

/// Deadline of the next poll tick, observed by the poll task.
#[derive(Debug)]
pub struct PollSchedule {
    tx: watch::Sender<Instant>,
}

impl PollSchedule {
    /// A schedule whose first tick is `first` from now.
    pub fn new(first: Duration) -> (Self, watch::Receiver<Instant>) {
        let (tx, rx) = watch::channel(Instant::now() + first);
        (PollSchedule { tx }, rx)
    }

    /// Replace the pending deadline with one `after` from now.
    pub fn rearm(&self, after: Duration) {
        self.tx.send_replace(Instant::now() + after);
    }

    pub fn deadline(&self) -> Instant {
        *self.tx.borrow()
    }
}

const NEVER: u64 = u64::MAX;

/// Admits a tick only if the previous admitted tick started at least
/// `min_gap` ago.
#[derive(Debug)]
pub struct TickGuard {
    origin: Instant,
    last_ms: AtomicU64,
    min_gap: Duration,
}

impl TickGuard {
    pub fn new(min_gap: Duration) -> Self {
        TickGuard {
            origin: Instant::now(),
            last_ms: AtomicU64::new(NEVER),
            min_gap,
        }
    }

    /// Claim the current tick. Returns `false` if it must be suppressed.
    pub fn try_begin(&self) -> bool {
        let now = self.origin.elapsed().as_millis() as u64;
        let gap = self.min_gap.as_millis() as u64;
        let mut last = self.last_ms.load(Ordering::Acquire);
        loop {
            if last != NEVER && now.saturating_sub(last) < gap {
                return false;
            }
            match self
                .last_ms
                .compare_exchange_weak(last, now, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return true,
                Err(actual) => last = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test(start_paused = true)]
    async fn debouncer_runs_only_last_action() {
        let debouncer = Debouncer::new();
        let runs = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let runs = runs.clone();
            debouncer.trigger(Duration::from_secs(4), async move {
                runs.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
        assert!(debouncer.is_pending());
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn debouncer_cancel() {
        let debouncer = Debouncer::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        debouncer.trigger(Duration::from_secs(1), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_replaces_deadline() {
        let (schedule, mut rx) = PollSchedule::new(Duration::from_secs(20));
        let start = Instant::now();
        rx.borrow_and_update();

        schedule.rearm(Duration::from_secs(1));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update() - start, Duration::from_secs(1));
        assert_eq!(schedule.deadline() - start, Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn tick_guard_suppresses_close_ticks() {
        let guard = TickGuard::new(Duration::from_millis(500));
        assert!(guard.try_begin());
        assert!(!guard.try_begin());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(!guard.try_begin());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(guard.try_begin());
    }
}
