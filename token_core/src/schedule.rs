//! Recurring reset of a pool's usage counters.
//!
//! The reset task is a plain writer of the pool state: it takes the same lock
//! as every foreground call and holds only a weak reference, so it never
//! outlives the pool.

use std::sync::{Arc, Weak};
use std::time::Duration;

use rand::Rng;
use tokio::runtime::Handle;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::error::PoolError;
use crate::pool::Shared;

/// Handle to the background task driving a pool's auto reset.
///
/// Dropping the handle stops the task.
pub(crate) struct ResetSchedule {
    handle: JoinHandle<()>,
    rearm: Arc<Notify>,
    interval: Duration,
}

impl ResetSchedule {
    /// Spawns the reset loop on the current tokio runtime.
    pub(crate) fn spawn<R>(shared: &Arc<Shared<R>>, interval: Duration) -> Result<Self, PoolError>
    where
        R: Rng + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| {
            PoolError::InvalidConfiguration("auto reset requires a tokio runtime".to_string())
        })?;

        let rearm = Arc::new(Notify::new());
        let handle = runtime.spawn(reset_loop(Arc::downgrade(shared), rearm.clone(), interval));
        tracing::debug!(interval_secs = interval.as_secs_f64(), "auto reset armed");

        Ok(Self {
            handle,
            rearm,
            interval,
        })
    }

    /// Restarts the current interval from now.
    pub(crate) fn rearm(&self) {
        self.rearm.notify_one();
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for ResetSchedule {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn reset_loop<R: Rng>(shared: Weak<Shared<R>>, rearm: Arc<Notify>, interval: Duration) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {
                let Some(shared) = shared.upgrade() else {
                    break;
                };
                shared.clear();
                tracing::info!("scheduled reset cleared all token usage");
            }
            _ = rearm.notified() => {
                tracing::debug!("auto reset rearmed");
            }
        }
    }
}
