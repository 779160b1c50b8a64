mod runner;
mod state;

use std::sync::Arc;

use rand::Rng;
use token_core::TokenPool;

pub use state::{DEFAULT_USE_DELAY, UserStats, Workload, WorkloadSummary};

/// Errors raised while driving a workload.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("invalid workload: {0}")]
    InvalidWorkload(String),
    #[error("user task failed: {0}")]
    UserTask(#[from] tokio::task::JoinError),
}

impl Workload {
    /// Runs this workload against `pool` and reports what each user did.
    pub async fn run<R>(&self, pool: Arc<TokenPool<R>>) -> Result<WorkloadSummary, DriverError>
    where
        R: Rng + Send + 'static,
    {
        runner::run(self, pool).await
    }
}
