//! Spatial data structures for lattice exploration
//!
//! This module contains the lattice model:
//! - Structural coordinates and compass directions
//! - The immutable rectangular lattice of cell values

/// Coordinates and directions
pub mod coordinate;
/// Rectangular lattice storage and bounds handling
pub mod lattice;

pub use coordinate::{Coordinate, Direction};
pub use lattice::Lattice;
