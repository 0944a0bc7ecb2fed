/// Command-line interface and batch processing
pub mod cli;
/// Puzzle constants and resource limits
pub mod configuration;
/// Error types and context propagation
pub mod error;
/// Lattice parsing from text inputs
pub mod input;
/// Progress display for batch runs
pub mod progress;
