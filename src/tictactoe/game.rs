//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Player};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    /// Score from X's (the maximizing side's) point of view
    pub fn utility(self) -> i32 {
        match self {
            Outcome::Win(Player::X) => 1,
            Outcome::Win(Player::O) => -1,
            Outcome::Draw => 0,
        }
    }
}

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<PlayedMove>,
    pub outcome: Option<Outcome>,
    current: Board,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
            current: Board::new(),
        }
    }

    /// Play a move for whoever is to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has finished, or
    /// [`crate::Error::IllegalMove`] if the target cell is occupied.
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.current.side_to_move();
        let next = self.current.apply(mv)?;

        self.moves.push(PlayedMove { mv, player });
        self.current = next;
        self.outcome = next.outcome();

        Ok(())
    }

    /// Get current board state
    pub fn current_state(&self) -> Board {
        self.current
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get the sequence of boards from the empty board to the current one
    ///
    /// # Errors
    ///
    /// Returns error if a recorded move does not replay, which means the
    /// history was tampered with after deserialization.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = Board::new();
        states.push(state);

        for played in &self.moves {
            state = state.apply(played.mv)?;
            states.push(state);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
