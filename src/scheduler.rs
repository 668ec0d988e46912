//! # Rotation Scheduler
//!
//! Fires a callback at a fixed period until stopped, on top of the tokio timer.
//!
//! ## Timing Model
//!
//! - The first tick lands one full period after [`start`]; there is no tick at t=0
//! - Ticks keep the cadence set at start: tick `n` is due at `start + n * period`
//!   no matter what else touches the showcase in between
//! - If the task falls behind, overdue ticks are delivered back to back in order
//!   rather than skipped, so advancing the clock by `k * period` yields `k` ticks
//!
//! ## Cancellation
//!
//! The callback lives in a slot shared between the handle and the timer task.
//! Each tick runs the callback while holding the slot's lock; [`ScheduleHandle::stop`]
//! takes the callback out under the same lock and aborts the task. A tick that is
//! already running finishes before `stop` returns, and no tick runs afterwards.
//! Stopping twice is a no-op, and dropping the handle stops it.

use crate::ShowcaseError;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

type TickFn = Box<dyn FnMut() + Send + 'static>;
type TickSlot = Arc<Mutex<Option<TickFn>>>;

/// Exclusive handle on a running rotation timer.
///
/// Not `Clone`: exactly one owner releases it.
pub struct ScheduleHandle {
    slot: TickSlot,
    task: Option<JoinHandle<()>>,
    period: Duration,
}

impl std::fmt::Debug for ScheduleHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleHandle")
            .field("period", &self.period)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Start calling `on_tick` every `period`.
///
/// Fails with [`ShowcaseError::InvalidPeriod`] for a zero period.
///
/// # Panics
/// Must be called from within a tokio runtime, like `tokio::spawn`.
pub fn start<F>(period: Duration, on_tick: F) -> Result<ScheduleHandle, ShowcaseError>
where
    F: FnMut() + Send + 'static,
{
    if period.is_zero() {
        return Err(ShowcaseError::InvalidPeriod);
    }

    let slot: TickSlot = Arc::new(Mutex::new(Some(Box::new(on_tick))));
    let task_slot = Arc::clone(&slot);

    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Burst);

    let task = tokio::spawn(async move {
        loop {
            interval.tick().await;
            let fired = {
                let mut guard = task_slot.lock().unwrap_or_else(PoisonError::into_inner);
                match guard.as_mut() {
                    Some(on_tick) => {
                        on_tick();
                        true
                    }
                    None => false,
                }
            };
            if !fired {
                break;
            }
            trace!("rotation tick delivered");
        }
    });

    debug!(period_ms = period.as_millis() as u64, "rotation scheduler started");

    Ok(ScheduleHandle {
        slot,
        task: Some(task),
        period,
    })
}

/// Stop `handle`; see [`ScheduleHandle::stop`].
pub fn stop(handle: &mut ScheduleHandle) {
    handle.stop();
}

impl ScheduleHandle {
    /// Cancel all future ticks.
    ///
    /// Returns only after any in-flight tick has finished. Calling this on an
    /// already stopped handle does nothing. Must not be called from inside the
    /// tick callback itself.
    pub fn stop(&mut self) {
        let released = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(task) = self.task.take() {
            task.abort();
        }

        if released.is_some() {
            debug!("rotation scheduler stopped");
        }
    }

    /// True until the first call to [`ScheduleHandle::stop`].
    pub fn is_active(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for ScheduleHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const PERIOD: Duration = Duration::from_millis(4000);

    /// Let the timer task run after the clock moved.
    async fn settle() {
        for _ in 0..32 {
            tokio::task::yield_now().await;
        }
    }

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let tick_count = Arc::clone(&count);
        (count, move || {
            tick_count.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_rejected() {
        let result = start(Duration::ZERO, || {});
        assert!(matches!(result, Err(ShowcaseError::InvalidPeriod)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_cadence() {
        for k in [0u32, 1, 2, 5] {
            let (count, on_tick) = counter();
            let _handle = start(PERIOD, on_tick).unwrap();
            settle().await;

            time::advance(PERIOD * k).await;
            settle().await;

            assert_eq!(
                count.load(Ordering::SeqCst),
                k as usize,
                "advancing {k} periods should fire {k} ticks"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_first_period() {
        let (count, on_tick) = counter();
        let _handle = start(PERIOD, on_tick).unwrap();

        time::advance(PERIOD - Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_prevents_further_ticks() {
        let (count, on_tick) = counter();
        let mut handle = start(PERIOD, on_tick).unwrap();

        time::advance(PERIOD).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        handle.stop();
        assert!(!handle.is_active());

        time::advance(PERIOD * 3).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let (once_count, once_tick) = counter();
        let (twice_count, twice_tick) = counter();
        let mut once = start(PERIOD, once_tick).unwrap();
        let mut twice = start(PERIOD, twice_tick).unwrap();

        stop(&mut once);
        stop(&mut twice);
        stop(&mut twice);

        time::advance(PERIOD * 2).await;
        settle().await;

        assert_eq!(once_count.load(Ordering::SeqCst), 0);
        assert_eq!(twice_count.load(Ordering::SeqCst), 0);
        assert_eq!(once.is_active(), twice.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_timer() {
        let (count, on_tick) = counter();
        let handle = start(PERIOD, on_tick).unwrap();
        drop(handle);

        time::advance(PERIOD * 2).await;
        settle().await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_releases_callback() {
        let marker = Arc::new(());
        let held = Arc::clone(&marker);
        let mut handle = start(PERIOD, move || {
            let _ = &held;
        })
        .unwrap();
        assert_eq!(Arc::strong_count(&marker), 2);

        handle.stop();
        assert_eq!(Arc::strong_count(&marker), 1);
    }
}
