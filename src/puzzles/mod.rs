//! Puzzle drivers built on the exploration core

use clap::ValueEnum;
use indicatif::ProgressBar;
use std::fmt;

use crate::io::error::{Result, invalid_parameter};
use crate::io::input::{parse_char_lattice, parse_digit_lattice};

/// Antinode projection for same-frequency antennas
pub mod antennas;
/// Region flood-fill and fence pricing
pub mod garden;
/// Fewest-step routes on elevation maps
pub mod hills;
/// Guard patrol simulation and loop detection
pub mod patrol;
/// Trailhead scores and ratings on height maps
pub mod trails;

/// Supported puzzle kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Puzzle {
    /// Trailhead score (part 1) and rating (part 2)
    Trails,
    /// Fence price of plant regions (part 1)
    Garden,
    /// Fewest steps from the start (part 1) or any lowest cell (part 2) to the summit
    Hills,
    /// Guard route length (part 1) and loop obstructions (part 2)
    Patrol,
    /// Pairwise antinodes (part 1) and harmonic antinodes (part 2)
    Antennas,
}

/// Which half of a puzzle to answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Part {
    /// First answer
    One,
    /// Second answer
    Two,
}

impl Part {
    /// Part matching a 1-based number
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for anything but 1 or 2
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(invalid_parameter("part", &number, &"must be 1 or 2")),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "1"),
            Self::Two => write!(f, "2"),
        }
    }
}

impl Puzzle {
    /// Parts this puzzle can answer
    pub const fn parts(self) -> &'static [Part] {
        match self {
            Self::Garden => &[Part::One],
            Self::Trails | Self::Hills | Self::Patrol | Self::Antennas => &[Part::One, Part::Two],
        }
    }

    /// Solve one part from raw input text
    ///
    /// `progress` is advanced by steps that take long enough to report;
    /// pass `ProgressBar::hidden()` when no display is wanted.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not parse, the puzzle has no such
    /// part, or the puzzle driver rejects the lattice
    pub fn solve(self, input: &str, part: Part, progress: &ProgressBar) -> Result<u64> {
        if !self.parts().contains(&part) {
            return Err(invalid_parameter(
                "part",
                &part,
                &format!("{self:?} has no part {part}"),
            ));
        }

        match (self, part) {
            (Self::Trails, Part::One) => Ok(trails::score(&parse_digit_lattice(input)?)?.total),
            (Self::Trails, Part::Two) => Ok(trails::rating(&parse_digit_lattice(input)?)?.total),
            (Self::Garden, _) => Ok(garden::fence_price(&parse_char_lattice(input)?)),
            // An unreachable summit scores zero, as every real route has at least one step
            (Self::Hills, Part::One) => {
                Ok(hills::climb(&parse_char_lattice(input)?)?.cheapest().unwrap_or(0))
            }
            (Self::Hills, Part::Two) => {
                Ok(hills::descend(&parse_char_lattice(input)?)?.cheapest().unwrap_or(0))
            }
            (Self::Patrol, Part::One) => {
                Ok(patrol::distinct_positions(&parse_char_lattice(input)?)? as u64)
            }
            (Self::Patrol, Part::Two) => {
                Ok(patrol::loop_obstructions(&parse_char_lattice(input)?, progress)? as u64)
            }
            (Self::Antennas, Part::One) => {
                let lattice = parse_char_lattice(input)?;
                Ok(antennas::antinodes(&lattice, antennas::Rule::Pair).len() as u64)
            }
            (Self::Antennas, Part::Two) => {
                let lattice = parse_char_lattice(input)?;
                Ok(antennas::antinodes(&lattice, antennas::Rule::Harmonics).len() as u64)
            }
        }
    }
}
