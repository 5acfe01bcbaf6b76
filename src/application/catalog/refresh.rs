//! Background refresh of the catalog cache.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --start()--> WarmedUp --spawn--> Running --shutdown()--> Cancelled
//! ```
//!
//! [`RefreshScheduler::start`] runs one full cycle before it returns, so the
//! cache is warm before any periodic tick. Callers that want to observe the
//! `WarmedUp` state call [`RefreshScheduler::warm_up`] and
//! [`RefreshScheduler::spawn`] separately. Ticks then fire every TTL. A
//! failed cycle is logged and the previous entry is left to age. Shutdown is
//! observed only between cycles; a cycle in progress always finishes.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::sync::CatalogSync;
use crate::application::cache::memory::deadline_after;

/// Observable state of a refresh scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    /// Constructed, nothing fetched yet.
    Idle,
    /// Warm-up cycle finished (successfully or not).
    WarmedUp,
    /// Periodic loop is active.
    Running,
    /// Loop has exited. Terminal.
    Cancelled,
}

/// Periodically re-runs [`CatalogSync`] at an interval equal to its TTL.
pub struct RefreshScheduler {
    sync: CatalogSync,
    state: Arc<RwLock<RefreshState>>,
}

impl RefreshScheduler {
    pub fn new(sync: CatalogSync) -> Self {
        Self {
            sync,
            state: Arc::new(RwLock::new(RefreshState::Idle)),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> RefreshState {
        *self.state.read()
    }

    /// Warm the cache, then spawn the periodic refresh loop.
    ///
    /// Returns once the warm-up cycle has completed.
    pub async fn start(self) -> RefreshHandle {
        self.warm_up().await;
        self.spawn()
    }

    /// Run the warm-up cycle. A failure is logged and still counts as warmed up.
    pub async fn warm_up(&self) {
        refresh_once(&self.sync, "warm-up").await;
        *self.state.write() = RefreshState::WarmedUp;
    }

    /// Spawn the periodic refresh loop. The first tick fires one TTL from now.
    pub fn spawn(self) -> RefreshHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let period = self.sync.ttl();
        let sync = self.sync;
        let state = Arc::clone(&self.state);

        *state.write() = RefreshState::Running;
        info!(interval_secs = period.as_secs(), "Items refresh scheduler running");

        let task_state = Arc::clone(&state);
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(deadline_after(Instant::now(), period), period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        refresh_once(&sync, "tick").await;
                    }
                }
            }

            *task_state.write() = RefreshState::Cancelled;
            info!("Items refresh scheduler stopped");
        });

        RefreshHandle {
            shutdown_tx,
            state,
            task,
        }
    }
}

async fn refresh_once(sync: &CatalogSync, cycle: &'static str) {
    match sync.sync().await {
        Ok(items) => debug!(cycle, count = items.len(), "Refresh cycle complete"),
        Err(e) => warn!(cycle, error = %e, "Failed to refresh items cache"),
    }
}

/// Handle for stopping a running [`RefreshScheduler`].
///
/// Dropping the handle also stops the loop after the current cycle.
pub struct RefreshHandle {
    shutdown_tx: watch::Sender<bool>,
    state: Arc<RwLock<RefreshState>>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Current scheduler state.
    #[must_use]
    pub fn state(&self) -> RefreshState {
        *self.state.read()
    }

    /// Signal shutdown and wait for the loop to exit.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.task.await {
            warn!(error = %e, "Items refresh task ended abnormally");
        }
    }
}
