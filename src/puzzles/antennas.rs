//! Antinodes projected by pairs of same-frequency antennas

use std::collections::{BTreeMap, BTreeSet};

use crate::io::configuration::EMPTY_ANTENNA_CELL;
use crate::spatial::{Coordinate, Lattice};

/// Projection rule for antenna pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// One antinode beyond each antenna, at the pair's own spacing
    Pair,
    /// Every lattice cell on the pair's line at a whole multiple of the spacing,
    /// including the antennas themselves
    Harmonics,
}

/// Antenna positions grouped by frequency glyph
pub fn frequencies(lattice: &Lattice<char>) -> BTreeMap<char, Vec<Coordinate>> {
    let mut groups: BTreeMap<char, Vec<Coordinate>> = BTreeMap::new();
    for (coordinate, glyph) in lattice.cells() {
        if *glyph != EMPTY_ANTENNA_CELL {
            groups.entry(*glyph).or_default().push(coordinate);
        }
    }
    groups
}

fn project(
    lattice: &Lattice<char>,
    first: Coordinate,
    second: Coordinate,
    rule: Rule,
    antinodes: &mut BTreeSet<Coordinate>,
) {
    let [delta_row, delta_col] = first.delta_to(second);
    match rule {
        Rule::Pair => {
            for candidate in [
                first.offset(-delta_row, -delta_col),
                second.offset(delta_row, delta_col),
            ] {
                if lattice.contains(candidate) {
                    antinodes.insert(candidate);
                }
            }
        }
        Rule::Harmonics => {
            for [step_row, step_col] in [[delta_row, delta_col], [-delta_row, -delta_col]] {
                let mut current = first;
                while lattice.contains(current) {
                    antinodes.insert(current);
                    current = current.offset(step_row, step_col);
                }
            }
        }
    }
}

/// Distinct in-bounds antinode cells under a projection rule
pub fn antinodes(lattice: &Lattice<char>, rule: Rule) -> BTreeSet<Coordinate> {
    let mut found = BTreeSet::new();
    for positions in frequencies(lattice).values() {
        for (index, &first) in positions.iter().enumerate() {
            for &second in positions.iter().skip(index + 1) {
                project(lattice, first, second, rule, &mut found);
            }
        }
    }
    found
}
