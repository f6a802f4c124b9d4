//! Level-capped grammar expansion with a per-level memo.

use std::collections::BTreeMap;

use tracing::debug;

use super::error::GrammarError;
use super::symbol::Symbol;

/// Hard cap on expansion depth. Level 12 yields 4096 moves.
pub const MAX_LEVEL: u32 = 12;

/// Number of moves a level-`level` string carries (`2^level`).
#[must_use]
pub const fn moves_at_level(level: u32) -> u64 {
    1u64 << level
}

/// Symbol-string generator owning its memo cache.
///
/// The cache is append-only and bounded in practice to `MAX_LEVEL + 1`
/// entries, so no eviction is performed. Mutation requires `&mut self`;
/// share across threads behind a lock.
#[derive(Debug, Default, Clone)]
pub struct Generator {
    cache: BTreeMap<u32, Vec<Symbol>>,
}

impl Generator {
    /// Create a generator with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand the axiom `level` times.
    ///
    /// Results are memoized; a miss resumes from the deepest cached level
    /// below `level` rather than from the axiom.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::CapacityExceeded`] when `level > MAX_LEVEL`.
    pub fn generate(&mut self, level: u32) -> Result<&[Symbol], GrammarError> {
        if level > MAX_LEVEL {
            return Err(GrammarError::CapacityExceeded {
                level,
                cap: MAX_LEVEL,
            });
        }
        if !self.cache.contains_key(&level) {
            let symbols = self.expand(level);
            debug!(level, symbols = symbols.len(), "expanded dragon grammar");
            self.cache.insert(level, symbols);
        }
        Ok(&self.cache[&level])
    }

    /// Drop every memoized level.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of memoized levels.
    #[must_use]
    pub fn cached_levels(&self) -> usize {
        self.cache.len()
    }

    /// Whether `level` is currently memoized.
    #[must_use]
    pub fn is_cached(&self, level: u32) -> bool {
        self.cache.contains_key(&level)
    }

    fn expand(&self, level: u32) -> Vec<Symbol> {
        let (mut at, mut current) = match self.cache.range(..level).next_back() {
            Some((&cached, symbols)) => (cached, symbols.clone()),
            None => (0, vec![Symbol::AXIOM]),
        };
        while at < level {
            let mut next = Vec::with_capacity(current.len() * 2 + 1);
            for &symbol in &current {
                symbol.rewrite_into(&mut next);
            }
            current = next;
            at += 1;
        }
        current
    }
}
