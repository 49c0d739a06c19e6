//! Function-call interface to the rules
//!
//! Thin free-function wrappers over [`Board`] for callers (game loops, test
//! harnesses) that prefer the functional style.

use super::{Board, Move, Player};

/// The all-empty starting board
pub fn initial_state() -> Board {
    Board::new()
}

/// The player whose turn it is; only meaningful when `!is_terminal(board)`
pub fn side_to_move(board: &Board) -> Player {
    board.side_to_move()
}

/// Every empty cell, in row-major order
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board.legal_moves()
}

/// The board after the side to move marks `mv`
///
/// # Errors
///
/// Returns [`crate::Error::IllegalMove`] if the cell is occupied.
pub fn apply(board: &Board, mv: Move) -> crate::Result<Board> {
    board.apply(mv)
}

pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// +1, -1 or 0 for an X win, O win or draw
///
/// # Errors
///
/// Returns [`crate::Error::NotTerminal`] for a board still in play.
pub fn utility(board: &Board) -> crate::Result<i32> {
    board.utility()
}
