//! Breadth-first and memoized exploration of 2D lattices
//!
//! The core explores a read-only lattice from a set of seed cells, following
//! a caller-defined adjacency rule until terminal cells are reached, and
//! scores each seed by the distinct terminals or distinct paths it reaches.
//! Puzzle drivers for trail maps, garden regions, guard patrols and antenna
//! antinodes are built on top of it.

#![forbid(unsafe_code)]

/// Reachability exploration, memoization and flood-fill
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Puzzle drivers built on the exploration core
pub mod puzzles;
/// Lattice model and coordinates
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
