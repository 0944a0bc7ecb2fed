//! Exhaustive reachability exploration over a lattice
//!
//! Starting from each seed, the explorer follows a caller-supplied adjacency
//! function until it hits terminal cells, then aggregates either the number
//! of distinct terminals reached or the number of distinct step sequences
//! leading to them.

use std::collections::{BTreeMap, VecDeque};

use crate::algorithm::cache::{CacheStats, PathCountCache, StateKey};
use crate::algorithm::visited::VisitedSet;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::{Coordinate, Lattice};

/// How reached terminals are folded into a seed's score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Count each terminal cell once, however it was reached
    DistinctTerminals,
    /// Count every distinct walk of at most `step_budget` steps that ends on
    /// its first terminal
    ///
    /// Walks may revisit cells, so on cyclic adjacency the count grows with
    /// the budget. Acyclic rules such as strictly climbing heights count
    /// simple paths for any budget at least as long as the longest path.
    PathCount {
        /// Maximum number of steps per walk; `None` uses the lattice cell count
        step_budget: Option<usize>,
    },
}

impl Aggregation {
    /// Path counting with the default step budget
    pub const fn path_count() -> Self {
        Self::PathCount { step_budget: None }
    }
}

/// Work counters collected during one exploration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplorationStats {
    /// Number of traversal states expanded
    pub expanded: usize,
    /// Memoization statistics (path counting only)
    pub cache: CacheStats,
}

/// Result of an exploration: per-seed scores and their sum
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exploration {
    /// Score for each distinct seed
    pub scores: BTreeMap<Coordinate, u64>,
    /// Sum of all seed scores; never clamped, overflow is an error
    pub total: u64,
    /// Work counters
    pub stats: ExplorationStats,
}

impl Exploration {
    /// Score recorded for a seed
    pub fn score(&self, seed: Coordinate) -> Option<u64> {
        self.scores.get(&seed).copied()
    }

    /// Number of seeds with a non-zero score
    pub fn productive_seeds(&self) -> usize {
        self.scores.values().filter(|score| **score > 0).count()
    }
}

/// Explore from every seed and aggregate reachable terminals
///
/// `adjacency` yields the candidate successors of a cell after applying the
/// caller's step rule; out-of-bounds candidates are dropped here. Cells for
/// which `is_terminal` holds are scored and never extended. A seed that is
/// itself terminal scores one. Duplicate seeds are scored once.
///
/// Distinct-terminal mode expands each cell at most once per seed.
/// Path-count mode memoizes counts per (cell, remaining steps) and evaluates
/// them with an explicit stack, so a count is final before any predecessor
/// reads it and deep lattices cannot overflow the call stack.
///
/// # Errors
///
/// Returns an error if:
/// - `seeds` is empty
/// - a seed lies outside a non-empty lattice
/// - a path count or the total exceeds `u64`
pub fn explore_reachable<T, A, I, P>(
    lattice: &Lattice<T>,
    seeds: &[Coordinate],
    adjacency: A,
    is_terminal: P,
    aggregation: Aggregation,
) -> Result<Exploration>
where
    A: Fn(Coordinate) -> I,
    I: IntoIterator<Item = Coordinate>,
    P: Fn(Coordinate) -> bool,
{
    check_seeds(lattice, seeds)?;

    let mut exploration = Exploration::default();
    if lattice.is_empty() {
        return Ok(exploration);
    }

    match aggregation {
        Aggregation::DistinctTerminals => {
            let mut walk = BreadthFirst {
                lattice,
                visited: VisitedSet::for_lattice(lattice),
                frontier: VecDeque::new(),
            };
            for &seed in seeds {
                if exploration.scores.contains_key(&seed) {
                    continue;
                }
                let score = walk.count_terminals(
                    seed,
                    &adjacency,
                    &is_terminal,
                    &mut exploration.stats,
                );
                exploration.scores.insert(seed, score);
            }
        }
        Aggregation::PathCount { step_budget } => {
            let budget = step_budget.unwrap_or_else(|| lattice.len());
            let mut cache = PathCountCache::new();
            for &seed in seeds {
                if exploration.scores.contains_key(&seed) {
                    continue;
                }
                let score = count_paths(
                    lattice,
                    StateKey::new(seed, budget),
                    &adjacency,
                    &is_terminal,
                    &mut cache,
                    &mut exploration.stats,
                )?;
                exploration.scores.insert(seed, score);
            }
            exploration.stats.cache = cache.stats;
        }
    }

    for (&seed, &score) in &exploration.scores {
        exploration.total = exploration
            .total
            .checked_add(score)
            .ok_or(AlgorithmError::Overflow { seed })?;
    }
    Ok(exploration)
}

/// Reject an empty seed list, or any seed outside a non-empty lattice
pub(crate) fn check_seeds<T>(lattice: &Lattice<T>, seeds: &[Coordinate]) -> Result<()> {
    if seeds.is_empty() {
        return Err(AlgorithmError::NoSeeds);
    }
    if lattice.is_empty() {
        return Ok(());
    }
    match seeds.iter().find(|seed| !lattice.contains(**seed)) {
        Some(&seed) => Err(AlgorithmError::SeedOutOfBounds {
            seed,
            dimensions: lattice.dimensions(),
        }),
        None => Ok(()),
    }
}

/// Reusable BFS buffers; cleared between seeds
struct BreadthFirst<'a, T> {
    lattice: &'a Lattice<T>,
    visited: VisitedSet,
    frontier: VecDeque<Coordinate>,
}

impl<T> BreadthFirst<'_, T> {
    fn count_terminals<A, I, P>(
        &mut self,
        seed: Coordinate,
        adjacency: &A,
        is_terminal: &P,
        stats: &mut ExplorationStats,
    ) -> u64
    where
        A: Fn(Coordinate) -> I,
        I: IntoIterator<Item = Coordinate>,
        P: Fn(Coordinate) -> bool,
    {
        self.visited.clear();
        self.frontier.clear();

        self.visited.insert(seed);
        self.frontier.push_back(seed);

        let mut terminals = 0;
        while let Some(current) = self.frontier.pop_front() {
            stats.expanded += 1;
            if is_terminal(current) {
                terminals += 1;
                continue;
            }
            for next in adjacency(current) {
                if self.lattice.contains(next) && self.visited.insert(next) {
                    self.frontier.push_back(next);
                }
            }
        }
        terminals
    }
}

enum Visit {
    Enter(StateKey),
    Exit(StateKey, Vec<StateKey>),
}

fn count_paths<T, A, I, P>(
    lattice: &Lattice<T>,
    root: StateKey,
    adjacency: &A,
    is_terminal: &P,
    cache: &mut PathCountCache,
    stats: &mut ExplorationStats,
) -> Result<u64>
where
    A: Fn(Coordinate) -> I,
    I: IntoIterator<Item = Coordinate>,
    P: Fn(Coordinate) -> bool,
{
    let mut stack = vec![Visit::Enter(root)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(state) => {
                if cache.lookup(state).is_some() {
                    continue;
                }
                stats.expanded += 1;

                if is_terminal(state.coordinate) {
                    cache.store(state, 1);
                    continue;
                }
                if state.remaining == 0 {
                    cache.store(state, 0);
                    continue;
                }

                let successors: Vec<StateKey> = adjacency(state.coordinate)
                    .into_iter()
                    .filter(|next| lattice.contains(*next))
                    .map(|next| StateKey::new(next, state.remaining - 1))
                    .collect();

                let pending: Vec<StateKey> = successors
                    .iter()
                    .filter(|successor| !cache.contains(successor))
                    .copied()
                    .collect();

                // Exit sits below its successors so it pops after all of them are final
                stack.push(Visit::Exit(state, successors));
                stack.extend(pending.into_iter().map(Visit::Enter));
            }
            Visit::Exit(state, successors) => {
                let count = successors
                    .iter()
                    .filter_map(|successor| cache.peek(successor))
                    .try_fold(0_u64, u64::checked_add);
                match count {
                    Some(count) => cache.store(state, count),
                    None => {
                        return Err(AlgorithmError::Overflow {
                            seed: root.coordinate,
                        });
                    }
                }
            }
        }
    }

    Ok(cache.peek(&root).unwrap_or(0))
}
