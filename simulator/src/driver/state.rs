use std::collections::BTreeMap;
use std::time::Duration;

use super::DriverError;

/// Default time a simulated user holds a token.
pub const DEFAULT_USE_DELAY: Duration = Duration::from_millis(10);

/// How many users hammer the pool and how hard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    users: usize,
    operations_per_user: usize,
    use_delay: Duration,
}

impl Workload {
    /// Validates the counts and builds a workload.
    ///
    /// # Arguments
    ///
    /// * `users` - Number of concurrent users, at least 1.
    /// * `operations_per_user` - Acquisitions per user, at least 1.
    /// * `use_delay` - Time a user holds each token, outside the pool lock.
    pub fn new(
        users: usize,
        operations_per_user: usize,
        use_delay: Duration,
    ) -> Result<Self, DriverError> {
        if users == 0 {
            return Err(DriverError::InvalidWorkload(
                "user count must be at least 1".to_string(),
            ));
        }
        if operations_per_user == 0 {
            return Err(DriverError::InvalidWorkload(
                "operation count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            users,
            operations_per_user,
            use_delay,
        })
    }

    pub fn users(&self) -> usize {
        self.users
    }

    pub fn operations_per_user(&self) -> usize {
        self.operations_per_user
    }

    pub fn use_delay(&self) -> Duration {
        self.use_delay
    }

    pub fn total_operations(&self) -> u64 {
        (self.users * self.operations_per_user) as u64
    }
}

/// What a single user did during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// One-based user number.
    pub user_id: usize,
    /// Acquisitions completed.
    pub operations: u64,
    /// Times each token id was handed to this user.
    pub tokens_used: BTreeMap<String, u64>,
}

/// Outcome of a finished workload.
#[derive(Debug, Clone)]
pub struct WorkloadSummary {
    pub total_operations: u64,
    /// Per-user results, ordered by user id.
    pub per_user: Vec<UserStats>,
}
