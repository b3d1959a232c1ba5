//! Battleship board engine with a console client and an HTTP JSON API.
//!
//! The engine (grid, ships, boards, session state machine) is the single
//! source of truth; both front ends drive it through the same operations.

mod ai;
mod board;
mod common;
mod config;
pub mod console;
mod grid;
mod logging;
pub mod server;
mod session;
mod ship;

pub use ai::select_random_target;
pub use board::Board;
pub use common::{BoardError, SessionError, ShotOutcome};
pub use config::{BOARD_SIZE, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};
pub use grid::{Cell, Grid};
pub use logging::init_logging;
pub use session::{ComputerShot, GameSession, Phase};
pub use ship::{Orientation, Ship, ShipClass};
