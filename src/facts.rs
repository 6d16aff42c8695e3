//! Fact rotation: a cyclic index plus the background ticker that drives it

use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Cyclic cursor over `len` facts. Index always stays in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactCycle {
    index: usize,
    len: usize,
}

impl FactCycle {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn back(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}

/// Background interval task. Only signals ticks; the index lives on the UI thread.
pub struct FactTicker {
    ticks: mpsc::UnboundedReceiver<()>,
    cancel: CancellationToken,
}

impl FactTicker {
    /// `on_tick` runs on the runtime after each tick is queued (used to wake the UI).
    pub fn spawn<F>(runtime: &tokio::runtime::Handle, period: Duration, on_tick: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (tx, ticks) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // First tick completes immediately
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(()).is_err() {
                            break;
                        }
                        on_tick();
                    }
                }
            }
            debug!("Fact ticker stopped");
        });

        debug!(period_ms = period.as_millis() as u64, "Fact ticker started");
        Self { ticks, cancel }
    }

    /// Number of ticks since the last call
    pub fn drain(&mut self) -> usize {
        let mut n = 0;
        while self.ticks.try_recv().is_ok() {
            n += 1;
        }
        n
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for FactTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_cycle_wraps_after_len_steps() {
        let mut cycle = FactCycle::new(8);
        for _ in 0..3 {
            cycle.advance();
        }
        let start = cycle.index();
        for _ in 0..8 {
            cycle.advance();
            assert!(cycle.index() < 8);
        }
        assert_eq!(cycle.index(), start);
    }

    #[test]
    fn test_back_from_zero_goes_to_last() {
        let mut cycle = FactCycle::new(5);
        cycle.back();
        assert_eq!(cycle.index(), 4);
        cycle.advance();
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_empty_cycle_stays_at_zero() {
        let mut cycle = FactCycle::new(0);
        cycle.advance();
        cycle.back();
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn test_ticker_delivers_then_stops() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let woken = Arc::new(AtomicUsize::new(0));
        let counter = woken.clone();
        let mut ticker = FactTicker::spawn(runtime.handle(), Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        std::thread::sleep(Duration::from_millis(120));
        assert!(ticker.drain() > 0);
        assert!(woken.load(Ordering::SeqCst) > 0);

        ticker.stop();
        // Let the task observe cancellation, then nothing new arrives
        std::thread::sleep(Duration::from_millis(50));
        ticker.drain();
        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(ticker.drain(), 0);
    }
}
