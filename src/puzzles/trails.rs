//! Hiking trails on a topographic height map
//!
//! A trail starts at height 0, climbs exactly one unit per orthogonal step
//! and ends at height 9. A trailhead's score counts the summits it reaches;
//! its rating counts the distinct trails leading to any summit.

use num_traits::PrimInt;

use crate::algorithm::explorer::{Aggregation, Exploration, explore_reachable};
use crate::io::configuration::{TRAIL_END_HEIGHT, TRAIL_START_HEIGHT, TRAIL_STEP};
use crate::io::error::Result;
use crate::spatial::{Coordinate, Lattice};

/// Height-0 cells, in row-major order
pub fn trailheads(lattice: &Lattice<u8>) -> Vec<Coordinate> {
    lattice.find_all(&TRAIL_START_HEIGHT)
}

/// Orthogonal neighbours exactly `step` higher than `coordinate`
pub fn uphill_neighbors<T: PrimInt>(
    lattice: &Lattice<T>,
    coordinate: Coordinate,
    step: T,
) -> Vec<Coordinate> {
    let Some(target) = lattice
        .get(coordinate)
        .and_then(|height| height.checked_add(&step))
    else {
        return Vec::new();
    };

    lattice
        .neighbors(coordinate)
        .filter(|neighbor| lattice.get(*neighbor) == Some(&target))
        .collect()
}

fn explore_trails(lattice: &Lattice<u8>, aggregation: Aggregation) -> Result<Exploration> {
    let seeds = trailheads(lattice);
    // A map without trailheads has no trails to score
    if seeds.is_empty() {
        return Ok(Exploration::default());
    }

    explore_reachable(
        lattice,
        &seeds,
        |coordinate| uphill_neighbors(lattice, coordinate, TRAIL_STEP),
        |coordinate| lattice.get(coordinate) == Some(&TRAIL_END_HEIGHT),
        aggregation,
    )
}

/// Score every trailhead by the number of distinct summits it reaches
///
/// # Errors
///
/// Propagates exploration configuration errors
pub fn score(lattice: &Lattice<u8>) -> Result<Exploration> {
    explore_trails(lattice, Aggregation::DistinctTerminals)
}

/// Rate every trailhead by the number of distinct trails to any summit
///
/// # Errors
///
/// Propagates exploration configuration errors
pub fn rating(lattice: &Lattice<u8>) -> Result<Exploration> {
    let trail_length = usize::from((TRAIL_END_HEIGHT - TRAIL_START_HEIGHT) / TRAIL_STEP);
    explore_trails(
        lattice,
        Aggregation::PathCount {
            step_budget: Some(trail_length),
        },
    )
}
