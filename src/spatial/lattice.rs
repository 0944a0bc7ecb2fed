//! Immutable rectangular lattice of cell values
//!
//! Cells are stored in a dense `Array2` and addressed by signed coordinates.
//! Anything outside `[0, rows) x [0, cols)` is out of bounds and reads as
//! `None`, so traversal code never has to special-case the border.

use ndarray::Array2;

use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::coordinate::Coordinate;

/// Rectangular grid of cells, read-only once constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice<T> {
    cells: Array2<T>,
}

impl<T> Lattice<T> {
    /// Build a lattice from row vectors
    ///
    /// An empty row list (or rows of length zero) gives an empty lattice.
    ///
    /// # Errors
    ///
    /// Returns `RaggedLattice` if any row length differs from the first row
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut flat = Vec::with_capacity(height * width);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(AlgorithmError::RaggedLattice {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            flat.extend(row);
        }

        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|error| invalid_parameter("rows", &height, &error))?;
        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the lattice has zero rows or zero columns
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert a coordinate to array indices, if in bounds
    pub fn index_of(&self, coordinate: Coordinate) -> Option<[usize; 2]> {
        let row = usize::try_from(coordinate.row).ok()?;
        let col = usize::try_from(coordinate.col).ok()?;
        (row < self.rows() && col < self.cols()).then_some([row, col])
    }

    /// Whether a coordinate addresses a cell of this lattice
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.index_of(coordinate).is_some()
    }

    /// Cell value at a coordinate; `None` is the out-of-bounds sentinel
    pub fn get(&self, coordinate: Coordinate) -> Option<&T> {
        self.index_of(coordinate)
            .and_then(|index| self.cells.get(index))
    }

    /// All cells with their coordinates in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), value)| (Coordinate::new(row as i32, col as i32), value))
    }

    /// Coordinates of every cell matching a predicate, in row-major order
    pub fn positions<P>(&self, mut predicate: P) -> Vec<Coordinate>
    where
        P: FnMut(&T) -> bool,
    {
        self.cells()
            .filter(|(_, value)| predicate(value))
            .map(|(coordinate, _)| coordinate)
            .collect()
    }

    /// Lattice of the same shape with every cell transformed
    pub fn map<U, F>(&self, transform: F) -> Lattice<U>
    where
        F: FnMut(&T) -> U,
    {
        Lattice {
            cells: self.cells.map(transform),
        }
    }

    /// In-bounds orthogonal neighbours of a coordinate
    pub fn neighbors(&self, coordinate: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        coordinate
            .neighbors()
            .into_iter()
            .filter(|neighbor| self.contains(*neighbor))
    }
}

impl<T: PartialEq> Lattice<T> {
    /// Coordinates of every cell equal to `value`
    pub fn find_all(&self, value: &T) -> Vec<Coordinate> {
        self.positions(|cell| cell == value)
    }
}
