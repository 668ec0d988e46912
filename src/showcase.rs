//! # Rotating Showcase Component
//!
//! Ties the pieces together: an [`ItemStore`] fixed at mount, a
//! [`SelectionState`] starting at 0, and a rotation timer whose tick advances
//! the selection. Indicator clicks go through [`RotatingShowcase::select_index`].
//!
//! ## Lifecycle
//!
//! - **Mount**: selection set to 0, scheduler started
//! - **Running**: ticks advance with wrap-around; manual selection writes the
//!   index directly and leaves the timer's cadence untouched
//! - **Unmount**: scheduler stopped; dropping the component does the same
//!
//! Both writers go through one mutex, so a tick and a selection never
//! interleave. Every change is published on a `watch` channel for whoever
//! draws the frames.

use crate::{
    renderer::{self, Frame},
    scheduler::{self, ScheduleHandle},
    selection::SelectionState,
    ItemStore, ShowcaseError,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info};

/// Default time between automatic advances.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(4000);

fn lock(selection: &Mutex<SelectionState>) -> MutexGuard<'_, SelectionState> {
    selection.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mounted, auto-advancing showcase.
#[derive(Debug)]
pub struct RotatingShowcase {
    store: Arc<ItemStore>,
    selection: Arc<Mutex<SelectionState>>,
    changes: Arc<watch::Sender<usize>>,
    schedule: ScheduleHandle,
}

impl RotatingShowcase {
    /// Mount the showcase and start rotating every `period`.
    ///
    /// Fails with [`ShowcaseError::InvalidPeriod`] for a zero period.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn mount(store: ItemStore, period: Duration) -> Result<Self, ShowcaseError> {
        let store = Arc::new(store);
        let selection = Arc::new(Mutex::new(SelectionState::new()));
        let (sender, _) = watch::channel(0usize);
        let changes = Arc::new(sender);

        let len = store.len();
        let tick_selection = Arc::clone(&selection);
        let tick_changes = Arc::clone(&changes);
        let schedule = scheduler::start(period, move || {
            let mut state = lock(&tick_selection);
            match state.advance(len) {
                Ok(index) => {
                    tick_changes.send_replace(index);
                    debug!(index, "showcase advanced");
                }
                Err(e) => error!("rotation tick failed: {}", e),
            }
        })?;

        info!(
            records = len,
            period_ms = period.as_millis() as u64,
            "showcase mounted"
        );

        Ok(Self {
            store,
            selection,
            changes,
            schedule,
        })
    }

    /// Jump to `index`, as an indicator click does.
    ///
    /// Takes effect immediately; the next automatic advance still lands one
    /// period after the previous one and continues from `index`.
    pub fn select_index(&self, index: usize) -> Result<usize, ShowcaseError> {
        let mut state = lock(&self.selection);
        let selected = state.select(index, self.store.len())?;
        self.changes.send_replace(selected);
        debug!(index = selected, "showcase selected");
        Ok(selected)
    }

    pub fn current_index(&self) -> usize {
        lock(&self.selection).current()
    }

    /// Project the current selection into a [`Frame`].
    pub fn render(&self) -> Result<Frame, ShowcaseError> {
        let state = *lock(&self.selection);
        renderer::render(&state, &self.store)
    }

    /// Receiver that sees the index after every tick or selection.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.changes.subscribe()
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn period(&self) -> Duration {
        self.schedule.period()
    }

    /// True while the rotation timer is running.
    pub fn is_rotating(&self) -> bool {
        self.schedule.is_active()
    }

    /// Stop rotating and release the timer.
    pub fn unmount(mut self) {
        self.schedule.stop();
        info!("showcase unmounted");
    }
}
