//! Tic-Tac-Toe solved by exhaustive minimax search
//!
//! This crate provides:
//! - The 3x3 board, move legality, win and draw detection
//! - Full-depth minimax search returning an optimal move for either side
//! - A game record, pluggable move strategies and a match runner
//! - The `ttt` command-line front end
//!
//! ```
//! use tictactoe_minimax::{apply, initial_state, is_terminal, optimal_move, utility};
//!
//! let mut board = initial_state();
//! while let Some(mv) = optimal_move(&board) {
//!     board = apply(&board, mv).unwrap();
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board).unwrap(), 0);
//! ```

pub mod cli;
pub mod error;
pub mod search;
pub mod strategy;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{evaluate_moves, max_value, min_value, optimal_move};
pub use strategy::{OptimalStrategy, RandomStrategy, Strategy, StrategyKind, play_game};
pub use tictactoe::{
    Board, Cell, Game, Move, Outcome, Player, apply, initial_state, is_terminal, legal_moves,
    side_to_move, utility, winner,
};
