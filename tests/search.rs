//! Minimax search: optimality, determinism and tie-breaking.

mod common;

use common::{board, mv, reachable_boards};
use tictactoe_minimax::{
    Board, Player, apply, initial_state, is_terminal, legal_moves, max_value, min_value,
    optimal_move, search::value, side_to_move, utility,
};

/// Explore every reply of the free side while `solver` answers with the
/// optimal move; returns the worst utility reached for the solver.
fn worst_result_for(solver: Player, b: Board) -> i32 {
    if is_terminal(&b) {
        let score = utility(&b).unwrap();
        return if solver == Player::X { score } else { -score };
    }

    if side_to_move(&b) == solver {
        let m = optimal_move(&b).unwrap();
        worst_result_for(solver, apply(&b, m).unwrap())
    } else {
        legal_moves(&b)
            .into_iter()
            .map(|m| worst_result_for(solver, apply(&b, m).unwrap()))
            .min()
            .unwrap()
    }
}

mod optimal_play {
    use super::*;

    #[test]
    fn self_play_from_empty_board_is_a_draw() {
        let mut b = initial_state();
        let mut plies = 0;
        while let Some(m) = optimal_move(&b) {
            b = apply(&b, m).unwrap();
            plies += 1;
        }

        assert!(is_terminal(&b));
        assert_eq!(utility(&b).unwrap(), 0);
        assert_eq!(plies, 9);
    }

    #[test]
    fn optimal_x_never_loses() {
        assert!(worst_result_for(Player::X, initial_state()) >= 0);
    }

    #[test]
    fn optimal_o_never_loses() {
        let b = initial_state();
        let worst = legal_moves(&b)
            .into_iter()
            .map(|m| worst_result_for(Player::O, apply(&b, m).unwrap()))
            .min()
            .unwrap();
        assert!(worst >= 0);
    }

    #[test]
    fn chosen_move_preserves_the_minimax_value() {
        for b in reachable_boards()
            .into_iter()
            .filter(|b| !is_terminal(b) && b.occupied_count() >= 2)
        {
            let m = optimal_move(&b).unwrap();
            let after = apply(&b, m).unwrap();
            assert_eq!(value(&after), value(&b), "board\n{b}");
        }
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn terminal_boards_have_no_optimal_move() {
        for b in reachable_boards().into_iter().filter(|b| is_terminal(b)) {
            assert_eq!(optimal_move(&b), None, "board\n{b}");
            let expected = utility(&b).unwrap();
            assert_eq!(max_value(&b), (expected, None));
            assert_eq!(min_value(&b), (expected, None));
        }
    }

    #[test]
    fn single_empty_cell_is_forced() {
        let b = board("XOX/XOO/OX.");
        assert_eq!(optimal_move(&b), Some(mv(2, 2)));
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn x_to_move_facing_o_threat() {
        // 4 markers placed, X to move; O threatens (1, 2)
        let b = board("XX./OO./...");
        assert_eq!(side_to_move(&b), Player::X);

        let m = optimal_move(&b).unwrap();
        assert!(m == mv(0, 2) || m == mv(1, 2));

        let after = apply(&b, m).unwrap();
        assert!(value(&after) >= 0);
        assert_eq!(m, mv(0, 2));
        assert_eq!(utility(&after).unwrap(), 1);
    }

    #[test]
    fn o_must_block() {
        let b = board("XX./.O./...");
        assert_eq!(optimal_move(&b), Some(mv(0, 2)));
        assert_eq!(value(&b), 0);
    }

    #[test]
    fn x_sets_up_a_fork() {
        // X corner, O adjacent edge: X can force a win
        let b = board("XO./.../...");
        assert_eq!(value(&b), 1);
        let m = optimal_move(&b).unwrap();
        assert_eq!(value(&apply(&b, m).unwrap()), 1);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn ties_resolve_to_first_move_in_row_major_order() {
        // Every opening draws, so the first cell wins the tie
        assert_eq!(optimal_move(&initial_state()), Some(mv(0, 0)));
        assert_eq!(max_value(&initial_state()), (0, Some(mv(0, 0))));
    }

    #[test]
    fn repeated_searches_agree() {
        let b = board("X...O....");
        let first = optimal_move(&b);
        for _ in 0..3 {
            assert_eq!(optimal_move(&b), first);
        }
    }
}
