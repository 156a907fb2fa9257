use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Default time a "copied" confirmation stays visible.
pub const DEFAULT_COPIED_RESET: Duration = Duration::from_millis(2000);

const ON: u64 = 1;

/// Transient "copied" confirmation with a re-armable reset timer.
///
/// The state word is `epoch << 1 | on`. Every arm or clear bumps the epoch,
/// and a reset task only clears the exact word it was spawned for.
#[derive(Debug)]
pub struct CopiedFlag {
    state: Arc<AtomicU64>,
    reset: Option<JoinHandle<()>>,
    window: Duration,
}

impl CopiedFlag {
    pub fn new(window: Duration) -> Self {
        Self {
            state: Arc::new(AtomicU64::new(0)),
            reset: None,
            window,
        }
    }

    pub fn is_on(&self) -> bool {
        self.state.load(Ordering::Acquire) & ON == ON
    }

    /// Turn the flag on and schedule its reset, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self) {
        self.cancel_pending();
        let armed = self.bump(true);

        let state = Arc::clone(&self.state);
        let window = self.window;
        debug!(delay_ms = window.as_millis() as u64, "Scheduling copied reset");
        self.reset = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let expired = state
                .compare_exchange(armed, armed & !ON, Ordering::AcqRel, Ordering::Acquire)
                .is_ok();
            trace!(expired, "Copied reset task finished");
        }));
    }

    /// Turn the flag off now and drop any pending reset.
    pub fn clear(&mut self) {
        self.cancel_pending();
        if self.is_on() {
            debug!("Clearing copied confirmation");
        }
        self.bump(false);
    }

    fn bump(&self, on: bool) -> u64 {
        let current = self.state.load(Ordering::Acquire);
        let next = ((current >> 1).wrapping_add(1) << 1) | u64::from(on);
        self.state.store(next, Ordering::Release);
        next
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.reset.take() {
            handle.abort();
        }
    }
}

impl Default for CopiedFlag {
    fn default() -> Self {
        Self::new(DEFAULT_COPIED_RESET)
    }
}

impl Drop for CopiedFlag {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn resets_after_window() {
        let mut flag = CopiedFlag::new(Duration::from_millis(2000));
        flag.arm();
        assert!(flag.is_on());

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(flag.is_on());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!flag.is_on());
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_restarts_window() {
        let mut flag = CopiedFlag::new(Duration::from_millis(2000));
        flag.arm();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        flag.arm();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(flag.is_on());

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert!(!flag.is_on());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_pending_reset() {
        let mut flag = CopiedFlag::new(Duration::from_millis(2000));
        flag.arm();
        let state = Arc::clone(&flag.state);
        let pending = flag
            .reset
            .as_ref()
            .map(JoinHandle::abort_handle)
            .expect("arm schedules a reset");

        drop(flag);

        // A reset that outlived the flag would clear the word after the window.
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(pending.is_finished());
        assert_eq!(state.load(Ordering::Acquire) & ON, ON);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_cancels_pending_reset() {
        let mut flag = CopiedFlag::new(Duration::from_millis(2000));
        flag.arm();
        flag.clear();
        assert!(!flag.is_on());
        assert!(flag.reset.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_timer_cannot_clear_newer_state() {
        let state = Arc::new(AtomicU64::new(0));
        let mut flag = CopiedFlag {
            state: Arc::clone(&state),
            reset: None,
            window: Duration::from_millis(10),
        };
        flag.arm();
        // Detach the first timer instead of aborting it.
        let stale = flag.reset.take();
        flag.arm();
        if let Some(current) = flag.reset.take() {
            current.abort();
        }

        tokio::time::sleep(Duration::from_millis(20)).await;
        if let Some(handle) = stale {
            handle.await.unwrap();
        }
        assert!(flag.is_on());
    }
}
