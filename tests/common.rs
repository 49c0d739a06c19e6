//! Common test utilities for the tic-tac-toe test suite.

#![allow(dead_code)]

use std::collections::HashSet;

use tictactoe_minimax::{Board, Move};

/// Parse a board, panicking on malformed test input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad test board '{s}': {e}"))
}

/// Shorthand for a move known to be in range.
pub fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

/// Every distinct board reachable from the empty board by alternating legal
/// play that stops as soon as the game is over.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    let mut boards = Vec::new();

    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        boards.push(state);

        if !state.is_terminal() {
            for m in state.legal_moves() {
                stack.push(state.apply(m).unwrap());
            }
        }
    }

    boards
}
