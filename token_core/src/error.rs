//! Errors raised by the token pool.

/// Errors returned when building a [`TokenPool`](crate::TokenPool).
///
/// Every pool operation after construction is total, so this is the only
/// failure a caller of the core ever has to handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("invalid pool configuration: {0}")]
    InvalidConfiguration(String),
}
