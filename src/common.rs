//! Shared types for the board engine: shot outcomes and error kinds.

use std::error::Error;
use std::fmt;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit a ship segment that was still afloat.
    Hit,
    /// Shot landed on open water.
    Miss,
    /// Shot hit the last remaining segment of a ship, carrying its name.
    Sunk(&'static str),
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit => write!(f, "hit"),
            ShotOutcome::Miss => write!(f, "miss"),
            ShotOutcome::Sunk(name) => write!(f, "sunk the {}", name),
        }
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column lies outside the grid.
    InvalidCoordinate { row: usize, col: usize },
    /// Target cell was already resolved to a hit or a miss.
    AlreadyShot { row: usize, col: usize },
    /// Ship run would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Ship run crosses a cell that is already occupied.
    ShipOverlaps,
    /// Random placement gave up after too many rejected samples.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidCoordinate { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::AlreadyShot { row, col } => {
                write!(f, "cell ({}, {}) was already shot", row, col)
            }
            BoardError::ShipOutOfBounds => {
                write!(f, "ship would extend past the edge of the board")
            }
            BoardError::ShipOverlaps => write!(f, "ship would overlap another ship"),
            BoardError::UnableToPlaceShip => {
                write!(f, "could not find a free placement for the ship")
            }
        }
    }
}

impl Error for BoardError {}

/// Errors returned by game-session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Underlying board error.
    Board(BoardError),
    /// Ship placement attempted after the fleet was fully placed.
    PlacementComplete,
    /// Shot attempted before the fleet was fully placed.
    PlacementIncomplete,
    /// Operation does not match the side whose turn it is.
    NotYourTurn,
    /// Game already reached a terminal state.
    GameOver,
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Board(e) => write!(f, "{}", e),
            SessionError::PlacementComplete => write!(f, "fleet is already fully placed"),
            SessionError::PlacementIncomplete => write!(f, "fleet placement is not finished"),
            SessionError::NotYourTurn => write!(f, "it is not that side's turn"),
            SessionError::GameOver => write!(f, "game has already ended"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SessionError::Board(e) => Some(e),
            _ => None,
        }
    }
}
