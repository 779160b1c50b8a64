use crate::token::Token;

/// A consistent, point-in-time copy of every token in a pool.
///
/// Tokens are kept in construction order. The derived values are computed
/// from the copy alone and need no further locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    tokens: Vec<Token>,
}

impl Snapshot {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Lowest usage count in the snapshot.
    pub fn min_usage(&self) -> u64 {
        self.tokens
            .iter()
            .map(Token::usage_count)
            .min()
            .unwrap_or(0)
    }

    /// Sum of all usage counts, i.e. acquisitions since the last reset.
    pub fn total_usage(&self) -> u64 {
        self.tokens.iter().map(Token::usage_count).sum()
    }

    /// Tokens sharing the minimum usage count, in construction order.
    pub fn least_used(&self) -> Vec<&Token> {
        let min = self.min_usage();
        self.tokens
            .iter()
            .filter(|t| t.usage_count() == min)
            .collect()
    }

    /// `(id, usage_count)` pairs in construction order.
    pub fn usage(&self) -> Vec<(String, u64)> {
        self.tokens
            .iter()
            .map(|t| (t.id().to_string(), t.usage_count()))
            .collect()
    }
}
