use std::time::Duration;

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use token_core::{AutoReset, PoolConfig};

use crate::driver::{DriverError, Workload};

/// Simulates many users sharing a pool of tokens, least-used first.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Total number of tokens in the pool
    #[arg(
        short,
        long,
        env = "TOKEN_POOL_TOKENS",
        default_value_t = 3,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub tokens: usize,

    /// Total number of concurrent users
    #[arg(
        short,
        long,
        env = "TOKEN_POOL_USERS",
        default_value_t = 5,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub users: usize,

    /// Number of operations each user performs
    #[arg(
        short,
        long,
        env = "TOKEN_POOL_OPERATIONS",
        default_value_t = 10,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub operations: usize,

    /// Simulated time a user holds a token, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    /// Reset all token usage once the users are done, before reporting
    #[arg(long)]
    pub reset: bool,

    /// Clear token usage automatically every N seconds while running
    #[arg(
        long,
        env = "TOKEN_POOL_AUTO_RESET_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub auto_reset_secs: Option<u64>,

    /// Seed for the tie-breaking RNG, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn pool_config(&self) -> PoolConfig {
        let auto_reset = match self.auto_reset_secs {
            Some(secs) => AutoReset::Every(Duration::from_secs(secs)),
            None => AutoReset::Disabled,
        };
        PoolConfig::new(self.tokens).with_auto_reset(auto_reset)
    }

    pub fn workload(&self) -> Result<Workload, DriverError> {
        Workload::new(self.users, self.operations, Duration::from_millis(self.delay_ms))
    }
}
