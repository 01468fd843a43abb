use crate::prelude::{ShellError, ShellResult};
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Repeating callbacks on the ambient tokio runtime.
pub struct Ticker;

impl Ticker {
    /// Starts a ticker whose first callback fires one `period` from now.
    ///
    /// Fails outside a tokio runtime or for a zero period.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> ShellResult<TickerHandle>
    where
        F: FnMut() + Send + 'static,
    {
        if period.is_zero() {
            return Err(ShellError::InvalidAction(
                "ticker period must be non-zero".into(),
            ));
        }
        let runtime = Handle::try_current().map_err(|err| ShellError::Runtime(err.to_string()))?;

        let active = Arc::new(AtomicBool::new(true));
        let flag = active.clone();
        let task = runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !flag.load(Ordering::Acquire) {
                    break;
                }
                on_tick();
            }
        });
        debug!("ticker started, period {:?}", period);

        Ok(TickerHandle {
            period,
            active,
            task: Some(task),
        })
    }
}

/// Owner of a running ticker. Stopping (or dropping) it guarantees no further callbacks.
pub struct TickerHandle {
    period: Duration,
    active: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
            && self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn stop(&mut self) {
        self.active.store(false, Ordering::Release);
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("ticker stopped, period {:?}", self.period);
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Holds at most one ticker; installing a new one stops the previous one first.
#[derive(Default)]
pub struct TimerSlot {
    handle: Option<TickerHandle>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&mut self, handle: TickerHandle) {
        self.clear();
        self.handle = Some(handle);
    }

    pub fn clear(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(TickerHandle::is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting(counter: &Arc<AtomicUsize>) -> impl FnMut() + Send + 'static {
        let counter = counter.clone();
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_per_period() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut handle = Ticker::spawn(Duration::from_millis(500), counting(&counter)).unwrap();

        time::sleep(Duration::from_millis(2_250)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 4);
        assert!(handle.is_active());
        handle.stop();
        assert!(!handle.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_prevents_further_ticks() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut handle = Ticker::spawn(Duration::from_millis(1_000), counting(&counter)).unwrap();

        time::sleep(Duration::from_millis(1_500)).await;
        handle.stop();
        time::sleep(Duration::from_millis(5_000)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_ticker() {
        let counter = Arc::new(AtomicUsize::new(0));
        let handle = Ticker::spawn(Duration::from_millis(100), counting(&counter)).unwrap();
        drop(handle);
        time::sleep(Duration::from_millis(1_000)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn slot_replacement_never_leaves_two_tickers() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut slot = TimerSlot::new();

        slot.install(Ticker::spawn(Duration::from_millis(1_000), counting(&first)).unwrap());
        slot.install(Ticker::spawn(Duration::from_millis(1_000), counting(&second)).unwrap());
        time::sleep(Duration::from_millis(3_500)).await;

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 3);
        assert!(slot.is_running());
        slot.clear();
        assert!(!slot.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn pause_and_resume_twice_counts_only_playing_time() {
        let counter = Arc::new(AtomicUsize::new(0));
        let period = Duration::from_millis(1_000);
        let mut slot = TimerSlot::new();

        // play 1.5s, pause 0.7s, play 1.5s, pause 0.7s, play 3.1s
        slot.install(Ticker::spawn(period, counting(&counter)).unwrap());
        time::sleep(Duration::from_millis(1_500)).await;
        slot.clear();
        time::sleep(Duration::from_millis(700)).await;
        slot.install(Ticker::spawn(period, counting(&counter)).unwrap());
        time::sleep(Duration::from_millis(1_500)).await;
        slot.clear();
        time::sleep(Duration::from_millis(700)).await;
        slot.install(Ticker::spawn(period, counting(&counter)).unwrap());
        time::sleep(Duration::from_millis(3_100)).await;
        slot.clear();

        assert_eq!(counter.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn spawning_outside_a_runtime_is_an_error() {
        let result = Ticker::spawn(Duration::from_millis(10), || {});
        assert!(matches!(result, Err(ShellError::Runtime(_))));
    }

    #[tokio::test]
    async fn zero_period_is_rejected() {
        let result = Ticker::spawn(Duration::ZERO, || {});
        assert!(matches!(result, Err(ShellError::InvalidAction(_))));
    }
}
