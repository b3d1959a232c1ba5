//! Game session: the two boards, the placement queue, and the turn state
//! machine.

use rand::Rng;
use serde::Serialize;

use crate::ai;
use crate::board::Board;
use crate::common::{SessionError, ShotOutcome};
use crate::config::FLEET;
use crate::ship::{Orientation, ShipClass};

/// Lifecycle of one game. A hit (including a sink) keeps the turn with the
/// same side; only a miss passes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Placement,
    PlayerTurn,
    ComputerTurn,
    PlayerWon,
    ComputerWon,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::PlayerWon | Phase::ComputerWon)
    }
}

/// One computer shot and how it resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerShot {
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
}

/// All state of one human-vs-computer game. Created at game start, mutated
/// only through these operations, dropped at game end.
pub struct GameSession {
    player_board: Board,
    computer_board: Board,
    pending: Vec<ShipClass>,
    phase: Phase,
    player_hits: usize,
}

impl GameSession {
    /// Start a session: computer fleet placed at random, player fleet
    /// queued for placement.
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, SessionError> {
        let mut computer_board = Board::new();
        computer_board.place_fleet_randomly(rng)?;
        Ok(GameSession {
            player_board: Board::new(),
            computer_board,
            pending: FLEET.to_vec(),
            phase: Phase::Placement,
            player_hits: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Hits the player has landed on the computer board.
    pub fn player_hits(&self) -> usize {
        self.player_hits
    }

    /// Next ship awaiting placement, if any.
    pub fn pending_ship(&self) -> Option<ShipClass> {
        self.pending.first().copied()
    }

    /// Ships still awaiting placement, in placement order.
    pub fn pending_ships(&self) -> &[ShipClass] {
        &self.pending
    }

    /// Place the player's next pending ship. Once the queue empties the
    /// battle begins with the player to move.
    pub fn place_player_ship(
        &mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<ShipClass, SessionError> {
        if self.phase != Phase::Placement {
            return Err(SessionError::PlacementComplete);
        }
        let class = match self.pending.first() {
            Some(&class) => class,
            None => return Err(SessionError::PlacementComplete),
        };
        self.player_board.place_ship(class, row, col, orientation)?;
        self.pending.remove(0);
        if self.pending.is_empty() {
            self.phase = Phase::PlayerTurn;
        }
        Ok(class)
    }

    /// Place the next pending ship at a random valid position.
    pub fn place_next_ship_randomly<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<ShipClass, SessionError> {
        if self.phase != Phase::Placement {
            return Err(SessionError::PlacementComplete);
        }
        let class = match self.pending.first() {
            Some(&class) => class,
            None => return Err(SessionError::PlacementComplete),
        };
        let (row, col, orientation) = self.player_board.random_placement(rng, class)?;
        self.place_player_ship(row, col, orientation)
    }

    /// Place every remaining player ship at random.
    pub fn place_player_fleet_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        while self.phase == Phase::Placement {
            self.place_next_ship_randomly(rng)?;
        }
        Ok(())
    }

    /// Resolve the player's shot at the computer board. A hit keeps the
    /// turn; a miss hands it to the computer; defeating the computer board
    /// ends the game.
    pub fn player_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, SessionError> {
        match self.phase {
            Phase::PlayerTurn => {}
            Phase::Placement => return Err(SessionError::PlacementIncomplete),
            Phase::ComputerTurn => return Err(SessionError::NotYourTurn),
            Phase::PlayerWon | Phase::ComputerWon => return Err(SessionError::GameOver),
        }
        let outcome = self.computer_board.apply_shot(row, col)?;
        match outcome {
            ShotOutcome::Hit | ShotOutcome::Sunk(_) => {
                self.player_hits += 1;
                if self.computer_board.all_sunk() {
                    self.phase = Phase::PlayerWon;
                }
            }
            ShotOutcome::Miss => self.phase = Phase::ComputerTurn,
        }
        Ok(outcome)
    }

    /// Play the computer's whole turn: it keeps shooting while it hits,
    /// and stops on its first miss or on defeating the player board.
    /// Returns the shots in firing order.
    pub fn computer_turn<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<ComputerShot>, SessionError> {
        match self.phase {
            Phase::ComputerTurn => {}
            Phase::Placement => return Err(SessionError::PlacementIncomplete),
            Phase::PlayerTurn => return Err(SessionError::NotYourTurn),
            Phase::PlayerWon | Phase::ComputerWon => return Err(SessionError::GameOver),
        }
        let mut shots = Vec::new();
        while self.phase == Phase::ComputerTurn {
            let (row, col) = match ai::select_random_target(self.player_board.grid(), rng) {
                Some(target) => target,
                None => break,
            };
            let outcome = self.player_board.apply_shot(row, col)?;
            shots.push(ComputerShot { row, col, outcome });
            match outcome {
                ShotOutcome::Hit | ShotOutcome::Sunk(_) => {
                    if self.player_board.all_sunk() {
                        self.phase = Phase::ComputerWon;
                    }
                }
                ShotOutcome::Miss => self.phase = Phase::PlayerTurn,
            }
        }
        Ok(shots)
    }
}
