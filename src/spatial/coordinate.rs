//! Structural lattice coordinates and compass directions

use std::fmt;

/// Row/column position on a lattice
///
/// Components are signed so that projections beyond the lattice edge stay
/// representable; the lattice decides whether a coordinate is in bounds.
/// Ordering is row-major, which keeps score maps in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    /// Row index (grows downwards)
    pub row: i32,
    /// Column index (grows rightwards)
    pub col: i32,
}

impl Coordinate {
    /// Create a coordinate from row and column
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate by a row and column delta
    #[must_use]
    pub const fn offset(self, delta_row: i32, delta_col: i32) -> Self {
        Self {
            row: self.row + delta_row,
            col: self.col + delta_col,
        }
    }

    /// Neighbouring coordinate one step in `direction`
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let [delta_row, delta_col] = direction.delta();
        self.offset(delta_row, delta_col)
    }

    /// The four orthogonal neighbours, in `Direction::ALL` order
    pub const fn neighbors(self) -> [Self; 4] {
        [
            self.step(Direction::Up),
            self.step(Direction::Right),
            self.step(Direction::Down),
            self.step(Direction::Left),
        ]
    }

    /// Component-wise difference `other - self`
    pub const fn delta_to(self, other: Self) -> [i32; 2] {
        [other.row - self.row, other.col - self.col]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal heading on the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards increasing columns
    Right,
    /// Towards increasing rows
    Down,
    /// Towards column 0
    Left,
}

impl Direction {
    /// All headings in clockwise order starting from `Up`
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Heading after a quarter turn clockwise
    #[must_use]
    pub const fn turn_right(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Unit (row, col) delta for one step
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::Up => [-1, 0],
            Self::Right => [0, 1],
            Self::Down => [1, 0],
            Self::Left => [0, -1],
        }
    }

    /// Dense index in `0..4`, matching `ALL`
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Heading denoted by a guard glyph (`^`, `>`, `v`, `<`)
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '^' => Some(Self::Up),
            '>' => Some(Self::Right),
            'v' => Some(Self::Down),
            '<' => Some(Self::Left),
            _ => None,
        }
    }
}
