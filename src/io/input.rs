//! Puzzle input loading and lattice parsing

use std::path::{Path, PathBuf};

use crate::io::configuration::MAX_LATTICE_DIMENSION;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::Lattice;

/// Read an input file into memory
///
/// # Errors
///
/// Returns a `FileSystem` error if the file cannot be read
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })
}

/// Split input into lattice rows
///
/// Trailing whitespace is stripped from every line and trailing blank
/// lines are dropped.
fn rows(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

fn check_dimensions<T>(lattice: Lattice<T>) -> Result<Lattice<T>> {
    let (height, width) = lattice.dimensions();
    if height > MAX_LATTICE_DIMENSION || width > MAX_LATTICE_DIMENSION {
        return Err(AlgorithmError::LatticeTooLarge {
            dimensions: (height, width),
            limit: MAX_LATTICE_DIMENSION,
        });
    }
    Ok(lattice)
}

fn empty_input() -> AlgorithmError {
    AlgorithmError::EmptyInput {
        path: PathBuf::from("<input>"),
    }
}

/// Parse rows of arbitrary characters into a categorical lattice
///
/// # Errors
///
/// Returns an error if:
/// - The text has no rows
/// - Rows differ in length
/// - The lattice exceeds `MAX_LATTICE_DIMENSION`
pub fn parse_char_lattice(text: &str) -> Result<Lattice<char>> {
    let lines = rows(text);
    if lines.is_empty() {
        return Err(empty_input());
    }
    let cells = lines.iter().map(|line| line.chars().collect()).collect();
    check_dimensions(Lattice::from_rows(cells)?)
}

/// Parse rows of single decimal digits into a numeric lattice
///
/// # Errors
///
/// Returns an error if:
/// - The text has no rows
/// - A cell is not a decimal digit
/// - Rows differ in length
/// - The lattice exceeds `MAX_LATTICE_DIMENSION`
pub fn parse_digit_lattice(text: &str) -> Result<Lattice<u8>> {
    let lines = rows(text);
    if lines.is_empty() {
        return Err(empty_input());
    }

    let mut cells = Vec::with_capacity(lines.len());
    for (row, line) in lines.iter().enumerate() {
        let digits = line
            .chars()
            .enumerate()
            .map(|(col, found)| {
                found
                    .to_digit(10)
                    .map(|digit| digit as u8)
                    .ok_or(AlgorithmError::InvalidCell {
                        row,
                        col,
                        found,
                        expected: "a decimal digit",
                    })
            })
            .collect::<Result<Vec<u8>>>()?;
        cells.push(digits);
    }
    check_dimensions(Lattice::from_rows(cells)?)
}
