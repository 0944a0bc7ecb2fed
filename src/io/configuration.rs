//! Puzzle constants and runtime configuration defaults

// Trail map heights
/// Height of a trailhead
pub const TRAIL_START_HEIGHT: u8 = 0;
/// Height of a summit
pub const TRAIL_END_HEIGHT: u8 = 9;
/// Height gained by every step along a trail
pub const TRAIL_STEP: u8 = 1;

// Patrol glyphs (guard glyphs are handled by `Direction::from_glyph`)
/// Obstacle cell
pub const WALL: char = '#';
/// Walkable cell
pub const OPEN: char = '.';

/// Antenna map cell without an antenna
pub const EMPTY_ANTENNA_CELL: char = '.';

// Hill map glyphs
/// Hill map start, at the lowest elevation
pub const HILL_START: char = 'S';
/// Hill map destination, at the highest elevation
pub const HILL_END: char = 'E';
/// Lowest elevation letter
pub const HILL_LOWEST: char = 'a';
/// Highest elevation letter
pub const HILL_HIGHEST: char = 'z';
/// Largest elevation gain allowed in one step
pub const HILL_MAX_CLIMB: u8 = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed lattice extent along either axis
pub const MAX_LATTICE_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Input discovery
/// Extension of puzzle input files when a directory is given
pub const INPUT_EXTENSION: &str = "txt";
