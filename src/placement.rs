//! Candidate runs and committed placement records.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{Orientation, Position};

/// A straight sequence of cells a candidate word would occupy.
///
/// The start may lie outside the grid; validation rejects such runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    word: String,
    letters: Vec<char>,
    row: isize,
    col: isize,
    orientation: Orientation,
}

impl Run {
    pub fn new(word: &str, row: isize, col: isize, orientation: Orientation) -> Self {
        Self {
            word: String::from(word),
            letters: word.chars().collect(),
            row,
            col,
            orientation,
        }
    }

    /// Run whose middle letter (index `(len - 1) / 2`) sits on `center`.
    pub fn centered(word: &str, center: Position, orientation: Orientation) -> Self {
        let mid = middle_index(word.chars().count());
        Self::crossing(word, mid, center, orientation)
    }

    /// Run that puts the letter at `letter_index` on the cell `at`.
    pub fn crossing(word: &str, letter_index: usize, at: Position, orientation: Orientation) -> Self {
        let (dr, dc) = orientation.step();
        let offset = letter_index as isize;
        Self::new(
            word,
            at.row as isize - dr * offset,
            at.col as isize - dc * offset,
            orientation,
        )
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn start(&self) -> (isize, isize) {
        (self.row, self.col)
    }

    /// Cell holding letter `i`.
    pub fn cell(&self, i: usize) -> (isize, isize) {
        let (dr, dc) = self.orientation.step();
        let i = i as isize;
        (self.row + dr * i, self.col + dc * i)
    }

    pub fn cells(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        (0..self.len()).map(move |i| self.cell(i))
    }

    /// Cell just before the first letter along the run's axis.
    pub fn before(&self) -> (isize, isize) {
        let (dr, dc) = self.orientation.step();
        (self.row - dr, self.col - dc)
    }

    /// Cell just after the last letter along the run's axis.
    pub fn after(&self) -> (isize, isize) {
        self.cell(self.len())
    }

    pub fn contains(&self, row: isize, col: isize) -> bool {
        let (r0, c0) = (self.row, self.col);
        let len = self.len() as isize;
        match self.orientation {
            Orientation::Horizontal => row == r0 && col >= c0 && col < c0 + len,
            Orientation::Vertical => col == c0 && row >= r0 && row < r0 + len,
        }
    }
}

/// Index of the letter anchored on the center for a word of `len` letters.
pub fn middle_index(len: usize) -> usize {
    len.saturating_sub(1) / 2
}

/// One letter of a committed placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedLetter {
    #[cfg_attr(feature = "std", serde(rename = "char"))]
    pub ch: char,
    pub row: usize,
    pub col: usize,
}

impl PlacedLetter {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// A word written into the grid. Never modified once created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementRecord {
    pub word: String,
    pub orientation: Orientation,
    pub start: Position,
    pub positions: Vec<PlacedLetter>,
}

impl PlacementRecord {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Letter this placement wrote at `pos`, if it covers that cell.
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.positions
            .iter()
            .find(|p| p.row == pos.row && p.col == pos.col)
            .map(|p| p.ch)
    }

    pub fn covers(&self, pos: Position) -> bool {
        self.letter_at(pos).is_some()
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().map(PlacedLetter::position)
    }
}
