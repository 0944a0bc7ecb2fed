use bitvec::prelude::*;
use std::fmt;

use crate::spatial::{Coordinate, Lattice};

/// Dense visited set over lattice cells
///
/// Each cell owns `states` consecutive bits so that traversals whose state
/// is (cell, heading) or similar can share the same structure. Slots are
/// laid out row-major, then by state.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    rows: usize,
    cols: usize,
    states: usize,
}

impl VisitedSet {
    /// Create an empty set with one slot per lattice cell
    pub fn for_lattice<T>(lattice: &Lattice<T>) -> Self {
        Self::with_states(lattice, 1)
    }

    /// Create an empty set with `states` slots per lattice cell
    pub fn with_states<T>(lattice: &Lattice<T>, states: usize) -> Self {
        let (rows, cols) = lattice.dimensions();
        Self {
            bits: bitvec![0; rows * cols * states],
            rows,
            cols,
            states,
        }
    }

    fn slot(&self, coordinate: Coordinate, state: usize) -> Option<usize> {
        let row = usize::try_from(coordinate.row).ok()?;
        let col = usize::try_from(coordinate.col).ok()?;
        (row < self.rows && col < self.cols && state < self.states)
            .then(|| (row * self.cols + col) * self.states + state)
    }

    /// Mark a cell visited, returning true if it was not visited before
    ///
    /// Out-of-bounds coordinates are never stored and always return false.
    pub fn insert(&mut self, coordinate: Coordinate) -> bool {
        self.insert_state(coordinate, 0)
    }

    /// Mark a (cell, state) pair visited, returning true if it is new
    pub fn insert_state(&mut self, coordinate: Coordinate, state: usize) -> bool {
        self.slot(coordinate, state)
            .is_some_and(|index| !self.bits.replace(index, true))
    }

    /// Test whether a cell was visited
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.contains_state(coordinate, 0)
    }

    /// Test whether a (cell, state) pair was visited
    pub fn contains_state(&self, coordinate: Coordinate, state: usize) -> bool {
        self.slot(coordinate, state)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Number of visited slots
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if nothing has been visited
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Forget every visited slot, keeping the capacity
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VisitedSet({} of {} slots over {}x{})",
            self.count(),
            self.bits.len(),
            self.rows,
            self.cols
        )
    }
}
