//! Error types and context management for lattice exploration

use std::fmt;
use std::path::PathBuf;

use crate::spatial::Coordinate;

/// Main error type for all lattice and traversal operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Input file contained no lattice rows
    EmptyInput {
        /// Path to the input file
        path: PathBuf,
    },

    /// A lattice row has a different length than the first row
    RaggedLattice {
        /// Zero-based index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// A cell character could not be interpreted for this lattice
    InvalidCell {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// Character that was found
        found: char,
        /// Description of what was expected instead
        expected: &'static str,
    },

    /// Lattice dimensions exceed the configured safety limit
    LatticeTooLarge {
        /// Parsed lattice dimensions (rows, cols)
        dimensions: (usize, usize),
        /// Maximum allowed extent along either axis
        limit: usize,
    },

    /// Exploration was requested without any seed coordinates
    ///
    /// Kept distinct from a zero score so that "nothing to explore" can be
    /// told apart from "seeds supplied but nothing reachable".
    NoSeeds,

    /// A seed coordinate lies outside a non-empty lattice
    SeedOutOfBounds {
        /// The rejected seed
        seed: Coordinate,
        /// Lattice dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// A score or cost no longer fits in a `u64`
    Overflow {
        /// Seed whose aggregate overflowed
        seed: Coordinate,
    },

    /// Patrol lattice has no guard glyph
    MissingGuard,

    /// Patrol lattice has more than one guard glyph
    AmbiguousGuard {
        /// Number of guard glyphs found
        count: usize,
    },

    /// Lattice lacks a required marker glyph
    MissingMarker {
        /// The marker glyph
        marker: char,
    },

    /// Lattice holds a marker glyph more than once
    AmbiguousMarker {
        /// The marker glyph
        marker: char,
        /// Number of occurrences
        count: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// An error raised while handling a specific input file
    InInput {
        /// Input file being handled
        path: PathBuf,
        /// The error itself
        source: Box<AlgorithmError>,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput { path } => {
                write!(f, "Input '{}' contains no lattice rows", path.display())
            }
            Self::RaggedLattice {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Ragged lattice: row {row} has {found} cells, expected {expected}"
                )
            }
            Self::InvalidCell {
                row,
                col,
                found,
                expected,
            } => {
                write!(
                    f,
                    "Invalid cell {found:?} at ({row}, {col}): expected {expected}"
                )
            }
            Self::LatticeTooLarge { dimensions, limit } => {
                write!(
                    f,
                    "Lattice of size {}x{} exceeds the limit of {limit} per axis",
                    dimensions.0, dimensions.1
                )
            }
            Self::NoSeeds => write!(f, "Exploration requires at least one seed"),
            Self::SeedOutOfBounds { seed, dimensions } => {
                write!(
                    f,
                    "Seed {seed} lies outside the {}x{} lattice",
                    dimensions.0, dimensions.1
                )
            }
            Self::Overflow { seed } => {
                write!(f, "Aggregate for seed {seed} does not fit in 64 bits")
            }
            Self::MissingGuard => write!(f, "No guard found on the patrol lattice"),
            Self::AmbiguousGuard { count } => {
                write!(f, "Expected exactly one guard, found {count}")
            }
            Self::MissingMarker { marker } => {
                write!(f, "No {marker:?} marker found on the lattice")
            }
            Self::AmbiguousMarker { marker, count } => {
                write!(f, "Expected exactly one {marker:?} marker, found {count}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InInput { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::InInput { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for lattice results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File the failing lattice was read from
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches errors with the file and operation they occurred in
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// Errors that carry their own path have it replaced. Any other error is
    /// wrapped in `InInput` when the context names a file.
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the path context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path context applied
    fn with_path(self, path: PathBuf) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| match e.into() {
            AlgorithmError::EmptyInput { path } => AlgorithmError::EmptyInput {
                path: context.path.unwrap_or(path),
            },
            AlgorithmError::FileSystem {
                path,
                operation,
                source,
            } => AlgorithmError::FileSystem {
                path: context.path.unwrap_or(path),
                operation: context.operation.unwrap_or(operation),
                source,
            },
            // Already names its file
            error @ AlgorithmError::InInput { .. } => error,
            error => match context.path {
                Some(path) => AlgorithmError::InInput {
                    path,
                    source: Box::new(error),
                },
                None => error,
            },
        })
    }

    fn with_path(self, path: PathBuf) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
