//! Core library for the token pool.
//!
//! A [`TokenPool`] hands out tokens from a fixed set, always picking one of
//! the least-used tokens and breaking ties at random. Usage counters can be
//! cleared on demand or on a schedule.

pub mod config;
pub mod error;
pub mod pool;
mod schedule;
pub mod selection;
pub mod snapshot;
pub mod token;

pub use config::{AutoReset, DEFAULT_RESET_INTERVAL, PoolConfig};
pub use error::PoolError;
pub use pool::TokenPool;
pub use snapshot::Snapshot;
pub use token::Token;
