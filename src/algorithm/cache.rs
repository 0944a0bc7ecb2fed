use std::collections::HashMap;

use crate::spatial::Coordinate;

/// Key for memoized path counts
///
/// A coordinate alone is not enough: the number of ways to reach a
/// terminal depends on how many steps are still allowed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct StateKey {
    /// Cell being evaluated
    pub coordinate: Coordinate,
    /// Steps left before the budget is exhausted
    pub remaining: usize,
}

impl StateKey {
    /// Create a state key
    pub const fn new(coordinate: Coordinate, remaining: usize) -> Self {
        Self {
            coordinate,
            remaining,
        }
    }
}

/// Memoization table for path counts within one exploration
///
/// Created at the start of a path-counting exploration, shared by its seeds
/// and dropped when the exploration returns.
#[derive(Default)]
pub struct PathCountCache {
    counts: HashMap<StateKey, u64>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of states answered from the cache
    pub hits: usize,
    /// Number of states computed and stored
    pub misses: usize,
}

impl PathCountCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a finalized count, recording a hit when present
    pub fn lookup(&mut self, key: StateKey) -> Option<u64> {
        let found = self.counts.get(&key).copied();
        if found.is_some() {
            self.stats.hits += 1;
        }
        found
    }

    /// Read a finalized count without touching the statistics
    pub fn peek(&self, key: &StateKey) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Whether a count for this state is already final
    pub fn contains(&self, key: &StateKey) -> bool {
        self.counts.contains_key(key)
    }

    /// Store a finalized count, recording a miss
    pub fn store(&mut self, key: StateKey, count: u64) {
        self.stats.misses += 1;
        self.counts.insert(key, count);
    }

    /// Number of memoized states
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Test if no state has been memoized
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
