//! Exhaustive minimax search
//!
//! X maximizes and O minimizes the terminal utility (+1 X win, -1 O win, 0
//! draw). Every line of play is searched to the end; the tree from the empty
//! board is small enough that neither pruning nor a transposition table is
//! needed.
//!
//! Moves are tried in row-major order and a move only replaces the current
//! best when it scores strictly better, so among equally good moves the first
//! one in row-major order is returned.

use tracing::{debug, instrument};

use crate::tictactoe::{Board, Move, Player};

/// Value and best move for X on `board`.
///
/// Terminal boards score their utility and carry no move.
pub fn max_value(board: &Board) -> (i32, Option<Move>) {
    if let Some(outcome) = board.outcome() {
        return (outcome.utility(), None);
    }

    let mut best_value = i32::MIN;
    let mut best_move = None;

    for mv in board.legal_moves() {
        let (value, _) = min_value(&board.place(mv));
        if value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }

    (best_value, best_move)
}

/// Value and best move for O on `board`.
///
/// Terminal boards score their utility and carry no move.
pub fn min_value(board: &Board) -> (i32, Option<Move>) {
    if let Some(outcome) = board.outcome() {
        return (outcome.utility(), None);
    }

    let mut best_value = i32::MAX;
    let mut best_move = None;

    for mv in board.legal_moves() {
        let (value, _) = max_value(&board.place(mv));
        if value < best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }

    (best_value, best_move)
}

/// Minimax value of `board` with the side to move playing first
pub fn value(board: &Board) -> i32 {
    match board.side_to_move() {
        Player::X => max_value(board).0,
        Player::O => min_value(board).0,
    }
}

/// The optimal move for the side to move, or `None` on a terminal board.
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::{Board, Move, optimal_move};
///
/// let board = Board::from_string("XX./OO./...").unwrap();
/// assert_eq!(optimal_move(&board), Some(Move::new(0, 2).unwrap()));
/// ```
#[instrument(skip_all, fields(board = %board.encode()))]
pub fn optimal_move(board: &Board) -> Option<Move> {
    if board.is_terminal() {
        return None;
    }

    let (value, mv) = match board.side_to_move() {
        Player::X => max_value(board),
        Player::O => min_value(board),
    };
    debug!(value, mv = ?mv, "search finished");
    mv
}

/// The minimax value of every legal move, in row-major order.
///
/// Values are from X's point of view. Empty on a terminal board.
#[instrument(skip_all, fields(board = %board.encode()))]
pub fn evaluate_moves(board: &Board) -> Vec<(Move, i32)> {
    if board.is_terminal() {
        return Vec::new();
    }

    board
        .legal_moves()
        .into_iter()
        .map(|mv| (mv, value(&board.place(mv))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = board("XXX/OO./...");
        assert_eq!(optimal_move(&won), None);
        assert_eq!(max_value(&won), (1, None));
        assert_eq!(min_value(&won), (1, None));
    }

    #[test]
    fn test_takes_immediate_win() {
        // X to move: (0, 2) wins outright
        let b = board("XX./OO./...");
        assert_eq!(max_value(&b), (1, Some(Move::new(0, 2).unwrap())));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // O to move and (1, 2) completes the middle row
        let b = board("XX./OO./X..");
        assert_eq!(optimal_move(&b), Some(Move::new(1, 2).unwrap()));
        assert_eq!(value(&b), -1);
    }

    #[test]
    fn test_o_blocks_forced_loss() {
        // X threatens (0, 2); O must block
        let b = board("XX./.O./...");
        assert_eq!(optimal_move(&b), Some(Move::new(0, 2).unwrap()));
    }

    #[test]
    fn test_empty_board_is_a_draw_and_opens_in_corner() {
        let empty = Board::new();
        assert_eq!(max_value(&empty), (0, Some(Move::new(0, 0).unwrap())));
    }

    #[test]
    fn test_evaluate_moves() {
        let b = board("XX./OO./...");
        let scored = evaluate_moves(&b);
        assert_eq!(scored.len(), 5);
        assert_eq!(scored[0], (Move::new(0, 2).unwrap(), 1));
        assert!(evaluate_moves(&board("XXX/OO./...")).is_empty());
    }
}
