//! Plain-text views of a finished grid, for terminals and tests.

use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use crate::common::Position;
use crate::grid::Grid;
use crate::placement::PlacementRecord;

/// Render the grid with row/column indices, `.` for empty cells and the
/// anchor cell wrapped in brackets.
pub fn render_grid(grid: &Grid, center: Position) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..grid.size() {
        let _ = write!(out, " {:>2}", c);
    }
    out.push('\n');
    for (r, row) in grid.rows().enumerate() {
        let _ = write!(out, "{:>2} ", r);
        for (c, cell) in row.iter().enumerate() {
            let ch = cell.unwrap_or('.');
            if center == Position::new(r, c) {
                let _ = write!(out, "[{}]", ch);
            } else {
                let _ = write!(out, "  {}", ch);
            }
        }
        out.push('\n');
    }
    out
}

/// One line per placement: order, word, orientation, start cell and length.
pub fn render_summary(history: &[PlacementRecord]) -> String {
    let width = history
        .iter()
        .map(|p| p.word.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let mut out = format!("{:>3}  {:<width$}  {:<10}  {:<9}  len\n", "#", "word", "axis", "start");
    for (i, p) in history.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {:<10}  {:<9}  {}",
            i + 1,
            p.word,
            format!("{}", p.orientation),
            format!("{}", p.start),
            p.len()
        );
    }
    out
}

#[cfg(feature = "std")]
pub fn print_grid(grid: &Grid, center: Position) {
    std::print!("{}", render_grid(grid, center));
}

#[cfg(feature = "std")]
pub fn print_summary(history: &[PlacementRecord]) {
    std::print!("{}", render_summary(history));
}
