//! Square letter grid backing a generation run.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{GridError, Orientation, Position};
use crate::placement::{PlacedLetter, PlacementRecord, Run};

/// `size × size` matrix of optional letters.
///
/// A cell, once written, only ever accepts the same letter again. Committed
/// runs also mark the axis they cover so a later run cannot reuse a cell
/// along a word that already runs the same way.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
    axes: Vec<u8>,
}

fn axis_bit(orientation: Orientation) -> u8 {
    match orientation {
        Orientation::Horizontal => 0b01,
        Orientation::Vertical => 0b10,
    }
}

impl Grid {
    /// Create an empty grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            axes: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let n = self.size as isize;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    /// Letter at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Option<char>, GridError> {
        let idx = self.index(row as isize, col as isize)?;
        Ok(self.cells[idx])
    }

    /// Letter at a possibly out-of-range coordinate; `None` off the grid.
    pub fn letter_at(&self, row: isize, col: isize) -> Option<char> {
        self.index(row, col).ok().and_then(|idx| self.cells[idx])
    }

    pub fn is_occupied(&self, row: isize, col: isize) -> bool {
        self.letter_at(row, col).is_some()
    }

    /// `true` when a committed run along `orientation` passes through (row, col).
    pub fn covered_along(&self, row: isize, col: isize, orientation: Orientation) -> bool {
        self.index(row, col)
            .map(|idx| (self.axes[idx] & axis_bit(orientation)) != 0)
            .unwrap_or(false)
    }

    /// Write `ch` at (row, col). Rewriting the same letter is a no-op.
    pub fn set(&mut self, row: usize, col: usize, ch: char) -> Result<(), GridError> {
        let idx = self.index(row as isize, col as isize)?;
        match self.cells[idx] {
            Some(existing) if existing != ch => Err(GridError::Conflict {
                row,
                col,
                existing,
                attempted: ch,
            }),
            _ => {
                self.cells[idx] = Some(ch);
                Ok(())
            }
        }
    }

    /// Write every letter of `run`, all or nothing.
    pub fn commit(&mut self, run: &Run) -> Result<PlacementRecord, GridError> {
        let mut positions = Vec::with_capacity(run.len());
        for (i, &ch) in run.letters().iter().enumerate() {
            let (r, c) = run.cell(i);
            let idx = self.index(r, c)?;
            if let Some(existing) = self.cells[idx] {
                if existing != ch {
                    return Err(GridError::Conflict {
                        row: r as usize,
                        col: c as usize,
                        existing,
                        attempted: ch,
                    });
                }
            }
            positions.push(PlacedLetter {
                ch,
                row: r as usize,
                col: c as usize,
            });
        }
        let bit = axis_bit(run.orientation());
        for p in &positions {
            let idx = p.row * self.size + p.col;
            self.cells[idx] = Some(p.ch);
            self.axes[idx] |= bit;
        }
        let (row, col) = run.start();
        Ok(PlacementRecord {
            word: run.word().into(),
            orientation: run.orientation(),
            start: Position::new(row as usize, col as usize),
            positions,
        })
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.axes.iter_mut().for_each(|a| *a = 0);
    }

    /// Number of cells holding a letter.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size.max(1))
    }

    fn index(&self, row: isize, col: isize) -> Result<usize, GridError> {
        if !self.in_bounds(row, col) {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok(row as usize * self.size + col as usize)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ size: {}, filled: {} }}",
            self.size,
            self.filled_count()
        )?;
        write!(f, "{}", self)
    }
}
