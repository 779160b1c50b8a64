//! Human-readable rendering of pool state.

use std::fmt;

use token_core::Snapshot;

/// End-of-run report: per-token usage followed by the least-used tokens.
pub struct Report<'a> {
    snapshot: &'a Snapshot,
    total_operations: u64,
}

impl<'a> Report<'a> {
    pub fn new(snapshot: &'a Snapshot, total_operations: u64) -> Self {
        Self {
            snapshot,
            total_operations,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Simulation Complete. Total Operations: {}",
            self.total_operations
        )?;

        writeln!(f)?;
        writeln!(f, "Token Usage Stats:")?;
        for token in self.snapshot.tokens() {
            writeln!(f, "{}: {} uses", token.id(), token.usage_count())?;
        }

        writeln!(f)?;
        writeln!(f, "Least Used Token(s):")?;
        for token in self.snapshot.least_used() {
            writeln!(f, "{} ({} uses)", token.id(), token.usage_count())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use token_core::{PoolConfig, TokenPool};

    #[test]
    fn test_render_after_uneven_use() {
        let pool =
            TokenPool::with_rng(PoolConfig::new(3), StdRng::seed_from_u64(1)).unwrap();
        for _ in 0..4 {
            pool.acquire();
        }
        let snap = pool.snapshot();
        let text = Report::new(&snap, 4).to_string();

        assert!(text.starts_with("Simulation Complete. Total Operations: 4\n"));
        assert!(text.contains("Token Usage Stats:\n"));
        assert_eq!(text.matches(" uses\n").count(), 3);

        let least = text.split("Least Used Token(s):\n").nth(1).unwrap();
        assert_eq!(least.lines().count(), 2);
        for line in least.lines() {
            assert!(line.ends_with("(1 uses)"));
        }
    }

    #[test]
    fn test_render_after_reset() {
        let pool = TokenPool::new(2).unwrap();
        pool.acquire();
        pool.reset();
        let snap = pool.snapshot();

        let expected = "Simulation Complete. Total Operations: 1\n\
                        \n\
                        Token Usage Stats:\n\
                        Token 1: 0 uses\n\
                        Token 2: 0 uses\n\
                        \n\
                        Least Used Token(s):\n\
                        Token 1 (0 uses)\n\
                        Token 2 (0 uses)\n";
        assert_eq!(Report::new(&snap, 1).to_string(), expected);
    }
}
