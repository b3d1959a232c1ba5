//! The cell-state grid underlying both boards.
//!
//! An 8×8 matrix of [`Cell`] values with bounds-checked access. The wire
//! format is the nested array of single-character symbols (`~`, `S`, `X`,
//! `O`) the JSON payloads carry.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// State of a single grid cell. A `Ship` cell becomes `Hit` when shot, an
/// `Empty` cell becomes `Miss`; no cell ever transitions back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Single-character wire symbol.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '~',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }

    /// Inverse of [`Cell::symbol`].
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '~' => Some(Cell::Empty),
            'S' => Some(Cell::Ship),
            'X' => Some(Cell::Hit),
            'O' => Some(Cell::Miss),
            _ => None,
        }
    }

    /// Whether the cell is still open to a shot.
    pub fn is_unresolved(self) -> bool {
        matches!(self, Cell::Empty | Cell::Ship)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.symbol())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ch = char::deserialize(deserializer)?;
        Cell::from_symbol(ch)
            .ok_or_else(|| de::Error::custom(format!("unknown cell symbol {:?}", ch)))
    }
}

/// A fixed 8×8 grid of cell states.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Fresh grid, every cell `Empty`.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Overwrite the cell at (`row`, `col`).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        Self::check_bounds(row, col)?;
        self.cells[row][col] = cell;
        Ok(())
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            Err(BoardError::InvalidCoordinate { row, col })
        } else {
            Ok(())
        }
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Iterator over every cell with its coordinates, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(move |row| (0..BOARD_SIZE).map(move |col| (row, col, self.cells[row][col])))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in &self.cells {
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter())
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<Cell>>::deserialize(deserializer)?;
        if rows.len() != BOARD_SIZE || rows.iter().any(|row| row.len() != BOARD_SIZE) {
            return Err(de::Error::custom(format!(
                "expected a {}x{} grid",
                BOARD_SIZE, BOARD_SIZE
            )));
        }
        let mut grid = Grid::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                grid.cells[r][c] = cell;
            }
        }
        Ok(grid)
    }
}
