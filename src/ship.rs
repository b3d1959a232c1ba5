//! Ship classes and ships fixed onto the grid.

use serde::{Deserialize, Serialize};

use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::grid::{Cell, Grid};

/// Orientation of a ship run. Wire values are the single-letter `H`/`V`
/// flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "H")]
    Horizontal,
    #[serde(rename = "V")]
    Vertical,
}

/// Class of ship: display name and segment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Cells covered by a run of `length` from the anchor, or `None` when the
/// run leaves the grid.
pub(crate) fn run_cells(
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> Option<Vec<(usize, usize)>> {
    let fits = match orientation {
        Orientation::Horizontal => row < BOARD_SIZE && col + length <= BOARD_SIZE,
        Orientation::Vertical => col < BOARD_SIZE && row + length <= BOARD_SIZE,
    };
    if !fits {
        return None;
    }
    let cells = (0..length)
        .map(|i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
        .collect();
    Some(cells)
}

/// A ship fixed onto the grid, identified by the ordered cells of its run.
/// The run never changes after placement; whether the ship is sunk is
/// derived from the grid, not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    cells: Vec<(usize, usize)>,
}

impl Ship {
    /// Lay out a ship anchored at (`row`, `col`). Fails if the run leaves
    /// the grid.
    pub fn new(
        class: ShipClass,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let cells = run_cells(row, col, class.length(), orientation)
            .ok_or(BoardError::ShipOutOfBounds)?;
        Ok(Ship {
            class,
            orientation,
            cells,
        })
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells of the run, anchor first.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Sunk iff every cell of the run has been hit on `grid`.
    pub fn is_sunk(&self, grid: &Grid) -> bool {
        self.cells
            .iter()
            .all(|&(r, c)| grid.get(r, c) == Ok(Cell::Hit))
    }
}
