//! The shared token pool.
//!
//! All reads and writes of the counter vector go through one mutex. Selection
//! needs a consistent view of every counter, so finer-grained locking would
//! open a window between finding the minimum and incrementing the pick.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{AutoReset, PoolConfig};
use crate::error::PoolError;
use crate::schedule::ResetSchedule;
use crate::selection;
use crate::snapshot::Snapshot;
use crate::token::Token;

struct PoolState<R> {
    tokens: Vec<Token>,
    rng: R,
}

/// State shared between the pool and its reset task.
pub(crate) struct Shared<R> {
    state: Mutex<PoolState<R>>,
}

impl<R: Rng> Shared<R> {
    pub(crate) fn new(config: &PoolConfig, rng: R) -> Self {
        let tokens = (0..config.token_count)
            .map(|i| Token::new(Token::id_for(i)))
            .collect();
        Self {
            state: Mutex::new(PoolState { tokens, rng }),
        }
    }

    // A panic never leaves a counter half-written, so a poisoned lock still
    // guards valid state.
    fn lock(&self) -> MutexGuard<'_, PoolState<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn acquire(&self) -> Token {
        let mut guard = self.lock();
        let state = &mut *guard;

        let counts: Vec<u64> = state.tokens.iter().map(Token::usage_count).collect();
        let Some(idx) = selection::pick_least_used(&counts, &mut state.rng) else {
            unreachable!("token pool is never empty");
        };

        let token = &mut state.tokens[idx];
        token.increment();
        tracing::trace!(token = token.id(), usage = token.usage_count(), "token acquired");
        token.clone()
    }

    pub(crate) fn clear(&self) {
        let mut state = self.lock();
        for token in state.tokens.iter_mut() {
            token.clear();
        }
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.lock().tokens.clone())
    }

    fn len(&self) -> usize {
        self.lock().tokens.len()
    }
}

/// A fixed-size pool of tokens handed out least-used first.
///
/// `acquire`, `reset` and `snapshot` are each atomic with respect to one
/// another, so the pool can be shared behind an `Arc` by any number of
/// threads or tasks. Ties between least-used tokens are broken with the
/// injected random source `R`.
pub struct TokenPool<R = StdRng> {
    shared: Arc<Shared<R>>,
    schedule: Option<ResetSchedule>,
}

impl TokenPool<StdRng> {
    /// Creates a pool of `token_count` tokens without scheduled reset.
    ///
    /// # Errors
    ///
    /// `PoolError::InvalidConfiguration` if `token_count` is zero.
    pub fn new(token_count: usize) -> Result<Self, PoolError> {
        Self::with_config(PoolConfig::new(token_count))
    }

    /// Creates a pool from `config`, breaking ties with an OS-seeded RNG.
    pub fn with_config(config: PoolConfig) -> Result<Self, PoolError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng + Send + 'static> TokenPool<R> {
    /// Creates a pool from `config` using `rng` for tie-breaking.
    ///
    /// With [`AutoReset::Every`] a reset task is spawned on the current tokio
    /// runtime; building such a pool outside a runtime is a configuration
    /// error.
    pub fn with_rng(config: PoolConfig, rng: R) -> Result<Self, PoolError> {
        config.validate()?;

        let shared = Arc::new(Shared::new(&config, rng));
        let schedule = match config.auto_reset {
            AutoReset::Disabled => None,
            AutoReset::Every(interval) => Some(ResetSchedule::spawn(&shared, interval)?),
        };

        tracing::info!(
            tokens = config.token_count,
            auto_reset = ?config.auto_reset,
            "token pool created"
        );

        Ok(Self { shared, schedule })
    }
}

impl<R: Rng> TokenPool<R> {
    /// Takes one of the least-used tokens and increments its usage.
    ///
    /// Returns a copy of the chosen token carrying its new usage count.
    pub fn acquire(&self) -> Token {
        self.shared.acquire()
    }

    /// Clears the usage count of every token.
    ///
    /// If auto reset is enabled the next scheduled reset is pushed back to a
    /// full interval from now.
    pub fn reset(&self) {
        self.shared.clear();
        if let Some(schedule) = &self.schedule {
            schedule.rearm();
        }
        tracing::info!("all token usage reset");
    }

    /// Copies the state of every token in construction order.
    pub fn snapshot(&self) -> Snapshot {
        self.shared.snapshot()
    }

    /// Number of tokens in the pool; always at least 1.
    pub fn len(&self) -> usize {
        self.shared.len()
    }

    pub fn auto_reset(&self) -> AutoReset {
        match &self.schedule {
            Some(schedule) => AutoReset::Every(schedule.interval()),
            None => AutoReset::Disabled,
        }
    }

    /// Interval of the scheduled reset, if any.
    pub fn reset_interval(&self) -> Option<Duration> {
        self.auto_reset().interval()
    }
}
