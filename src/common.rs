//! Common types for the word grid: orientations, coordinates and grid errors.

use core::fmt;

/// Axis a word runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The opposite axis.
    pub fn flip(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Unit step `(d_row, d_col)` along this axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column lies outside `[0, size)`.
    OutOfBounds { row: isize, col: isize },
    /// Cell already holds a different letter.
    Conflict {
        row: usize,
        col: usize,
        existing: char,
        attempted: char,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
            GridError::Conflict {
                row,
                col,
                existing,
                attempted,
            } => write!(
                f,
                "cell ({}, {}) already holds '{}', cannot write '{}'",
                row, col, existing, attempted
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
