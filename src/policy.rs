//! Legality rules for candidate runs.
//!
//! Every policy shares the same base: the run must be non-empty, lie fully
//! inside the grid, agree with letters already present, only reuse cells of
//! words running the other way, and write at least one empty cell. Policies
//! differ in how they police the cells around a run.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::grid::Grid;
use crate::placement::Run;

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Decides whether a run may be written into a grid.
pub trait PlacementValidator {
    /// `true` when `run` can be committed to `grid` as is.
    fn is_legal(&self, grid: &Grid, run: &Run) -> bool;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

/// Bounds, letter compatibility, axis reuse and "adds something" checks common to all policies.
pub fn base_checks(grid: &Grid, run: &Run) -> bool {
    if run.is_empty() {
        return false;
    }
    let mut writes_new = false;
    for (i, (r, c)) in run.cells().enumerate() {
        if !grid.in_bounds(r, c) {
            return false;
        }
        match grid.letter_at(r, c) {
            Some(existing) if existing != run.letters()[i] => return false,
            Some(_) if grid.covered_along(r, c, run.orientation()) => return false,
            Some(_) => {}
            None => writes_new = true,
        }
    }
    writes_new
}

/// A run ending on a crossing would otherwise fuse with a word lying flush
/// against that end.
fn ends_are_clear(grid: &Grid, run: &Run) -> bool {
    let (br, bc) = run.before();
    let (ar, ac) = run.after();
    !grid.is_occupied(br, bc) && !grid.is_occupied(ar, ac)
}

/// Looser rule: every newly written cell must have its four orthogonal
/// neighbours empty or inside the run, and the cells just before and after
/// the run must be empty. Diagonal contact is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlanketPolicy;

impl PlacementValidator for BlanketPolicy {
    fn is_legal(&self, grid: &Grid, run: &Run) -> bool {
        if !base_checks(grid, run) || !ends_are_clear(grid, run) {
            return false;
        }
        for (r, c) in run.cells() {
            if grid.is_occupied(r, c) {
                continue;
            }
            for (dr, dc) in ORTHOGONAL {
                let (nr, nc) = (r + dr, c + dc);
                if !run.contains(nr, nc) && grid.is_occupied(nr, nc) {
                    return false;
                }
            }
        }
        true
    }

    fn name(&self) -> &'static str {
        "blanket"
    }
}

/// Stricter rule: the eight surrounding cells of every run cell must be empty,
/// except cells of the run itself and the two cells flanking each crossing on
/// the crossing word's axis. The cells just before and after the run must be
/// empty too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictPolicy;

impl PlacementValidator for StrictPolicy {
    fn is_legal(&self, grid: &Grid, run: &Run) -> bool {
        if !base_checks(grid, run) {
            return false;
        }
        if !ends_are_clear(grid, run) {
            return false;
        }

        let crossings: Vec<(isize, isize)> =
            run.cells().filter(|&(r, c)| grid.is_occupied(r, c)).collect();
        let (pr, pc) = run.orientation().flip().step();
        let in_crossing_lane = |nr: isize, nc: isize| {
            crossings
                .iter()
                .any(|&(r, c)| (nr, nc) == (r + pr, c + pc) || (nr, nc) == (r - pr, c - pc))
        };

        for (r, c) in run.cells() {
            for (dr, dc) in MOORE {
                let (nr, nc) = (r + dr, c + dc);
                if run.contains(nr, nc) || in_crossing_lane(nr, nc) {
                    continue;
                }
                if grid.is_occupied(nr, nc) {
                    return false;
                }
            }
        }
        true
    }

    fn name(&self) -> &'static str {
        "strict"
    }
}

/// Selector for the built-in policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum PolicyKind {
    #[default]
    Strict,
    Blanket,
}

impl PolicyKind {
    pub fn validator(self) -> Box<dyn PlacementValidator> {
        match self {
            PolicyKind::Strict => Box::new(StrictPolicy),
            PolicyKind::Blanket => Box::new(BlanketPolicy),
        }
    }
}
