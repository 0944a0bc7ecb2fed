//! Guard patrol simulation
//!
//! The guard walks forward until the next cell is a wall, then turns right.
//! The patrol ends when the guard leaves the lattice or repeats a
//! (cell, heading) state, which means it is stuck in a loop.

use indicatif::ProgressBar;

use crate::algorithm::visited::VisitedSet;
use crate::io::configuration::{OPEN, WALL};
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::{Coordinate, Direction, Lattice};

/// Guard position and heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    /// Current cell
    pub position: Coordinate,
    /// Current heading
    pub heading: Direction,
}

/// How a patrol ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatrolOutcome {
    /// The guard walked off the lattice
    Exited {
        /// Distinct cells occupied, in order of first visit
        route: Vec<Coordinate>,
    },
    /// The guard repeated a state and will patrol forever
    Looped,
}

/// Find the single guard glyph on the lattice
///
/// # Errors
///
/// Returns `MissingGuard` or `AmbiguousGuard` unless exactly one glyph exists
pub fn locate_guard(lattice: &Lattice<char>) -> Result<Guard> {
    let mut guards = lattice
        .cells()
        .filter_map(|(position, glyph)| {
            Direction::from_glyph(*glyph).map(|heading| Guard { position, heading })
        });

    let guard = guards.next().ok_or(AlgorithmError::MissingGuard)?;
    let extra = guards.count();
    if extra > 0 {
        return Err(AlgorithmError::AmbiguousGuard { count: extra + 1 });
    }
    Ok(guard)
}

/// Simulate a patrol, optionally with one extra wall placed
///
/// # Errors
///
/// Returns `InvalidCell` if the guard steps onto an unknown glyph
pub fn walk(
    lattice: &Lattice<char>,
    guard: Guard,
    obstruction: Option<Coordinate>,
) -> Result<PatrolOutcome> {
    let mut occupied = VisitedSet::for_lattice(lattice);
    let mut states = VisitedSet::with_states(lattice, Direction::ALL.len());
    let mut route = Vec::new();

    let Guard {
        mut position,
        mut heading,
    } = guard;
    if occupied.insert(position) {
        route.push(position);
    }

    loop {
        if !states.insert_state(position, heading.index()) {
            return Ok(PatrolOutcome::Looped);
        }

        let next = position.step(heading);
        let cell = if obstruction == Some(next) {
            Some(WALL)
        } else {
            lattice.get(next).copied()
        };

        match cell {
            None => return Ok(PatrolOutcome::Exited { route }),
            Some(WALL) => heading = heading.turn_right(),
            Some(glyph) if glyph == OPEN || Direction::from_glyph(glyph).is_some() => {
                position = next;
                if occupied.insert(position) {
                    route.push(position);
                }
            }
            Some(found) => {
                let [row, col] = lattice.index_of(next).unwrap_or_default();
                return Err(AlgorithmError::InvalidCell {
                    row,
                    col,
                    found,
                    expected: "'.', '#' or a guard glyph",
                });
            }
        }
    }
}

/// Number of distinct cells the guard occupies before leaving
///
/// # Errors
///
/// Returns an error if the guard cannot be located, the lattice holds an
/// unknown glyph on the route, or the unmodified patrol never ends
pub fn distinct_positions(lattice: &Lattice<char>) -> Result<usize> {
    let guard = locate_guard(lattice)?;
    Ok(exit_route(lattice, guard)?.len())
}

fn exit_route(lattice: &Lattice<char>, guard: Guard) -> Result<Vec<Coordinate>> {
    match walk(lattice, guard, None)? {
        PatrolOutcome::Exited { route } => Ok(route),
        PatrolOutcome::Looped => Err(AlgorithmError::InvalidParameter {
            parameter: "lattice",
            value: format!("guard at {}", guard.position),
            reason: "unobstructed patrol never leaves the lattice".to_string(),
        }),
    }
}

/// Number of single-wall placements that trap the guard in a loop
///
/// Only cells on the unobstructed route can change the patrol, and the
/// guard's own starting cell is excluded. Each candidate advances `progress`.
///
/// # Errors
///
/// Same conditions as `distinct_positions`
pub fn loop_obstructions(lattice: &Lattice<char>, progress: &ProgressBar) -> Result<usize> {
    let guard = locate_guard(lattice)?;
    let candidates: Vec<Coordinate> = exit_route(lattice, guard)?
        .into_iter()
        .filter(|cell| *cell != guard.position)
        .collect();

    progress.set_length(candidates.len() as u64);
    let mut loops = 0;
    for candidate in candidates {
        if walk(lattice, guard, Some(candidate))? == PatrolOutcome::Looped {
            loops += 1;
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    Ok(loops)
}
