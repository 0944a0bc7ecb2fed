//! Cost-ordered search for the cheapest route to a terminal
//!
//! The frontier is a min-heap keyed by accumulated cost, so the first
//! terminal popped for a seed is a cheapest one. Step costs must be
//! non-negative, which `u64` guarantees.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::algorithm::explorer::check_seeds;
use crate::algorithm::visited::VisitedSet;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::{Coordinate, Lattice};

/// Cheapest cost from each seed to its nearest terminal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortestPaths {
    /// `None` when no terminal is reachable from the seed
    pub costs: BTreeMap<Coordinate, Option<u64>>,
    /// Number of cells settled across all seeds
    pub expanded: usize,
}

impl ShortestPaths {
    /// Cost recorded for a seed; `None` if the seed is unknown or stranded
    pub fn cost(&self, seed: Coordinate) -> Option<u64> {
        self.costs.get(&seed).copied().flatten()
    }

    /// Lowest cost over all seeds
    pub fn cheapest(&self) -> Option<u64> {
        self.costs.values().flatten().min().copied()
    }
}

/// Find the cheapest route from every seed to any terminal
///
/// `adjacency` and `is_terminal` behave as in
/// [`explore_reachable`](crate::algorithm::explorer::explore_reachable);
/// `step_cost` prices the move between two adjacent cells. A seed that is
/// itself terminal costs zero. Duplicate seeds are searched once.
///
/// # Errors
///
/// Returns an error if:
/// - `seeds` is empty
/// - a seed lies outside a non-empty lattice
/// - an accumulated cost exceeds `u64`
pub fn shortest_costs<T, A, I, P, C>(
    lattice: &Lattice<T>,
    seeds: &[Coordinate],
    adjacency: A,
    is_terminal: P,
    step_cost: C,
) -> Result<ShortestPaths>
where
    A: Fn(Coordinate) -> I,
    I: IntoIterator<Item = Coordinate>,
    P: Fn(Coordinate) -> bool,
    C: Fn(Coordinate, Coordinate) -> u64,
{
    check_seeds(lattice, seeds)?;

    let mut shortest = ShortestPaths::default();
    if lattice.is_empty() {
        return Ok(shortest);
    }

    let mut search = CostOrdered {
        lattice,
        settled: VisitedSet::for_lattice(lattice),
        frontier: BinaryHeap::new(),
    };
    for &seed in seeds {
        if shortest.costs.contains_key(&seed) {
            continue;
        }
        let cost = search.cheapest(
            seed,
            &adjacency,
            &is_terminal,
            &step_cost,
            &mut shortest.expanded,
        )?;
        shortest.costs.insert(seed, cost);
    }
    Ok(shortest)
}

/// Reusable heap search buffers; cleared between seeds
struct CostOrdered<'a, T> {
    lattice: &'a Lattice<T>,
    settled: VisitedSet,
    frontier: BinaryHeap<Reverse<(u64, Coordinate)>>,
}

impl<T> CostOrdered<'_, T> {
    fn cheapest<A, I, P, C>(
        &mut self,
        seed: Coordinate,
        adjacency: &A,
        is_terminal: &P,
        step_cost: &C,
        expanded: &mut usize,
    ) -> Result<Option<u64>>
    where
        A: Fn(Coordinate) -> I,
        I: IntoIterator<Item = Coordinate>,
        P: Fn(Coordinate) -> bool,
        C: Fn(Coordinate, Coordinate) -> u64,
    {
        self.settled.clear();
        self.frontier.clear();
        self.frontier.push(Reverse((0, seed)));

        while let Some(Reverse((cost, current))) = self.frontier.pop() {
            // Stale entry for a cell already settled at a lower cost
            if !self.settled.insert(current) {
                continue;
            }
            *expanded += 1;

            if is_terminal(current) {
                return Ok(Some(cost));
            }
            for next in adjacency(current) {
                if !self.lattice.contains(next) || self.settled.contains(next) {
                    continue;
                }
                let total = cost
                    .checked_add(step_cost(current, next))
                    .ok_or(AlgorithmError::Overflow { seed })?;
                self.frontier.push(Reverse((total, next)));
            }
        }
        Ok(None)
    }
}
