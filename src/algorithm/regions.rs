//! Flood-fill partitioning of a lattice into connected regions

use std::collections::BTreeSet;

use crate::algorithm::visited::VisitedSet;
use crate::spatial::{Coordinate, Lattice};

/// Maximal 4-connected set of cells sharing one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region<T> {
    /// Value shared by every member cell
    pub value: T,
    /// Member cells
    pub cells: BTreeSet<Coordinate>,
}

impl<T> Region<T> {
    /// Number of member cells
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Number of cell edges that face a non-member cell or the lattice edge
    pub fn perimeter(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|cell| cell.neighbors())
            .filter(|neighbor| !self.cells.contains(neighbor))
            .count()
    }

    /// Whether a cell belongs to this region
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.cells.contains(&coordinate)
    }
}

/// Collect the component of `seed` under a connection rule
///
/// Uses an explicit stack, marking cells in `visited` as they are claimed.
/// Returns an empty list if `seed` is out of bounds or already visited.
pub fn flood_fill<T, F>(
    lattice: &Lattice<T>,
    seed: Coordinate,
    visited: &mut VisitedSet,
    connects: F,
) -> Vec<Coordinate>
where
    F: Fn(Coordinate, Coordinate) -> bool,
{
    if !lattice.contains(seed) || !visited.insert(seed) {
        return Vec::new();
    }

    let mut component = Vec::new();
    let mut frontier = vec![seed];
    while let Some(current) = frontier.pop() {
        component.push(current);
        for next in lattice.neighbors(current) {
            if connects(current, next) && visited.insert(next) {
                frontier.push(next);
            }
        }
    }
    component
}

/// Split a lattice into regions of equal adjacent values
///
/// Regions are returned in row-major order of their first cell.
pub fn partition_regions<T>(lattice: &Lattice<T>) -> Vec<Region<T>>
where
    T: PartialEq + Clone,
{
    let mut visited = VisitedSet::for_lattice(lattice);
    let mut regions = Vec::new();

    for (coordinate, value) in lattice.cells() {
        if visited.contains(coordinate) {
            continue;
        }
        let cells = flood_fill(lattice, coordinate, &mut visited, |from, to| {
            lattice.get(from) == lattice.get(to)
        });
        regions.push(Region {
            value: value.clone(),
            cells: cells.into_iter().collect(),
        });
    }
    regions
}
