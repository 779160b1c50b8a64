/// A single access token tracked by the pool.
///
/// Tokens handed out by the pool are copies: changing one never affects the
/// pool's own counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    id: String,
    usage_count: u64,
}

impl Token {
    pub(crate) fn new(id: String) -> Self {
        Self { id, usage_count: 0 }
    }

    /// Builds the identifier of the token at `index` (zero based).
    pub(crate) fn id_for(index: usize) -> String {
        format!("Token {}", index + 1)
    }

    /// The stable, human-readable identifier of this token.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// How many times this token was acquired since the last reset.
    pub fn usage_count(&self) -> u64 {
        self.usage_count
    }

    pub(crate) fn increment(&mut self) {
        self.usage_count += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.usage_count = 0;
    }
}
