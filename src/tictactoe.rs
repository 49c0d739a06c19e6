//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, Cell, Move, Player};
pub use game::{Game, Outcome, PlayedMove};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{apply, initial_state, is_terminal, legal_moves, side_to_move, utility, winner};
