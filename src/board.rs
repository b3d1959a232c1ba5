//! One side's board: the cell grid plus the fleet fixed onto it.

use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, FLEET};
use crate::grid::{Cell, Grid};
use crate::ship::{run_cells, Orientation, Ship, ShipClass};

/// Attempts per ship before random placement reports failure. A 16-segment
/// fleet on 64 cells stays far away from this limit.
const MAX_PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
}

impl Board {
    /// Empty board, no ships placed.
    pub fn new() -> Self {
        Board {
            grid: Grid::new(),
            ships: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ships in placement order, each with its coordinate run.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Pure predicate: whether a run of `length` from the anchor fits
    /// entirely on empty cells.
    pub fn can_place_ship(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        match run_cells(row, col, length, orientation) {
            Some(cells) => cells
                .iter()
                .all(|&(r, c)| self.grid.get(r, c) == Ok(Cell::Empty)),
            None => false,
        }
    }

    /// Fix a ship onto the grid. Runs that leave the grid or cross an
    /// occupied cell are rejected without touching the board.
    pub fn place_ship(
        &mut self,
        class: ShipClass,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = Ship::new(class, orientation, row, col)?;
        if ship
            .cells()
            .iter()
            .any(|&(r, c)| self.grid.get(r, c) != Ok(Cell::Empty))
        {
            return Err(BoardError::ShipOverlaps);
        }
        for &(r, c) in ship.cells() {
            self.grid.set(r, c, Cell::Ship)?;
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Sample a random anchor and orientation where `class` fits. Rejection
    /// sampling over anchors inside the feasible range; no backtracking.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        class: ShipClass,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let length = class.length();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - length),
                Orientation::Vertical => (BOARD_SIZE - length, BOARD_SIZE - 1),
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            if self.can_place_ship(row, col, length, orientation) {
                return Ok((row, col, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place the whole fleet at random, in fleet order.
    pub fn place_fleet_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for class in FLEET {
            let (row, col, orientation) = self.random_placement(rng, class)?;
            self.place_ship(class, row, col, orientation)?;
        }
        Ok(())
    }

    /// Resolve a shot at (`row`, `col`).
    ///
    /// Out-of-range coordinates and already-resolved cells are rejected
    /// without mutating the grid.
    pub fn apply_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        match self.grid.get(row, col)? {
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyShot { row, col }),
            Cell::Empty => {
                self.grid.set(row, col, Cell::Miss)?;
                Ok(ShotOutcome::Miss)
            }
            Cell::Ship => {
                self.grid.set(row, col, Cell::Hit)?;
                for ship in &self.ships {
                    if ship.contains(row, col) {
                        if ship.is_sunk(&self.grid) {
                            return Ok(ShotOutcome::Sunk(ship.class().name()));
                        }
                        break;
                    }
                }
                Ok(ShotOutcome::Hit)
            }
        }
    }

    /// Defeated iff no ship segment is left afloat.
    pub fn all_sunk(&self) -> bool {
        self.grid.count(Cell::Ship) == 0
    }

    /// Ship segments still afloat.
    pub fn remaining_ship_cells(&self) -> usize {
        self.grid.count(Cell::Ship)
    }

    /// The grid as its owner sees it: ships revealed.
    pub fn own_view(&self) -> Grid {
        self.grid
    }

    /// The grid as the opponent sees it: unhit ships masked as open water.
    pub fn tracking_view(&self) -> Grid {
        let mut view = self.grid;
        for (row, col, cell) in self.grid.iter_cells() {
            if cell == Cell::Ship {
                let _ = view.set(row, col, Cell::Empty);
            }
        }
        view
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
