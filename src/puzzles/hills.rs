//! Fewest-step routes on a lettered elevation map
//!
//! Elevations run from `a` to `z`; the start `S` sits at `a` and the
//! destination `E` at `z`. A step may climb at most one level and descend
//! any number.

use crate::algorithm::shortest::{ShortestPaths, shortest_costs};
use crate::io::configuration::{HILL_END, HILL_HIGHEST, HILL_LOWEST, HILL_MAX_CLIMB, HILL_START};
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::{Coordinate, Lattice};

/// Elevation of a map glyph, `None` for anything but a letter or marker
pub fn elevation(glyph: char) -> Option<u8> {
    let level = match glyph {
        HILL_START => HILL_LOWEST,
        HILL_END => HILL_HIGHEST,
        HILL_LOWEST..=HILL_HIGHEST => glyph,
        _ => return None,
    };
    Some(level as u8 - HILL_LOWEST as u8)
}

/// Numeric elevation lattice of a hill map
///
/// # Errors
///
/// Returns `InvalidCell` for the first glyph without an elevation
pub fn elevations(lattice: &Lattice<char>) -> Result<Lattice<u8>> {
    for (coordinate, glyph) in lattice.cells() {
        if elevation(*glyph).is_none() {
            let [row, col] = lattice.index_of(coordinate).unwrap_or_default();
            return Err(AlgorithmError::InvalidCell {
                row,
                col,
                found: *glyph,
                expected: "a lowercase letter, 'S' or 'E'",
            });
        }
    }
    Ok(lattice.map(|glyph| elevation(*glyph).unwrap_or_default()))
}

/// Position of a glyph that must appear exactly once
///
/// # Errors
///
/// Returns `MissingMarker` or `AmbiguousMarker` otherwise
pub fn locate_marker(lattice: &Lattice<char>, marker: char) -> Result<Coordinate> {
    match lattice.find_all(&marker).as_slice() {
        [] => Err(AlgorithmError::MissingMarker { marker }),
        [position] => Ok(*position),
        many => Err(AlgorithmError::AmbiguousMarker {
            marker,
            count: many.len(),
        }),
    }
}

fn climbable(heights: &Lattice<u8>, from: Coordinate, to: Coordinate) -> bool {
    match (heights.get(from), heights.get(to)) {
        (Some(&low), Some(&high)) => high <= low.saturating_add(HILL_MAX_CLIMB),
        _ => false,
    }
}

/// Fewest steps from `S` to `E`, climbing at most one level per step
///
/// # Errors
///
/// Returns an error if the map has unknown glyphs or the markers are not
/// unique
pub fn climb(lattice: &Lattice<char>) -> Result<ShortestPaths> {
    let heights = elevations(lattice)?;
    let start = locate_marker(lattice, HILL_START)?;
    let end = locate_marker(lattice, HILL_END)?;

    shortest_costs(
        &heights,
        &[start],
        |from| {
            heights
                .neighbors(from)
                .filter(|to| climbable(&heights, from, *to))
                .collect::<Vec<_>>()
        },
        |coordinate| coordinate == end,
        |_, _| 1,
    )
}

/// Fewest steps from any lowest cell to `E`
///
/// Searches backwards from `E` with the climbing rule reversed, stopping at
/// the first cell of the lowest elevation.
///
/// # Errors
///
/// Same conditions as `climb`
pub fn descend(lattice: &Lattice<char>) -> Result<ShortestPaths> {
    let heights = elevations(lattice)?;
    let end = locate_marker(lattice, HILL_END)?;

    shortest_costs(
        &heights,
        &[end],
        |from| {
            heights
                .neighbors(from)
                .filter(|to| climbable(&heights, *to, from))
                .collect::<Vec<_>>()
        },
        |coordinate| heights.get(coordinate) == Some(&0),
        |_, _| 1,
    )
}
