//! Move-selection strategies and the loop that plays them against each other

use std::fmt;

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    Result,
    search::optimal_move,
    tictactoe::{Board, Game, Move, Outcome, Player},
};

/// Something that picks a move for the side to move
pub trait Strategy {
    /// Choose a move on a non-terminal board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the board is terminal.
    fn choose_move(&mut self, board: &Board) -> Result<Move>;

    /// Name used in reports and logs
    fn name(&self) -> &str;
}

/// Plays the minimax-optimal move
#[derive(Debug, Default, Clone)]
pub struct OptimalStrategy;

impl Strategy for OptimalStrategy {
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        optimal_move(board).ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "optimal"
    }
}

/// Picks uniformly among the legal moves
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        if board.is_terminal() {
            return Err(crate::Error::NoValidMoves);
        }
        let moves = board.legal_moves();
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Strategy names accepted on the command line and in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Optimal,
    Random,
}

impl StrategyKind {
    /// Build the strategy; `seed` only affects random play
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Optimal => Box::new(OptimalStrategy),
            StrategyKind::Random => Box::new(match seed {
                Some(seed) => RandomStrategy::with_seed(seed),
                None => RandomStrategy::new(),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Optimal => write!(f, "optimal"),
            StrategyKind::Random => write!(f, "random"),
        }
    }
}

/// Play one game from the empty board, `x` moving first
#[instrument(skip_all, fields(x = x.name(), o = o.name()))]
pub fn play_game(x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<Game> {
    let mut game = Game::new();

    while !game.is_over() {
        let board = game.current_state();
        let mv = match board.side_to_move() {
            Player::X => x.choose_move(&board)?,
            Player::O => o.choose_move(&board)?,
        };
        game.play(mv)?;
    }

    debug!(outcome = ?game.outcome(), moves = game.moves.len(), "game finished");
    Ok(game)
}

/// Tally of finished games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Fraction of games with the given count, 0.0 before any game
    pub fn rate(&self, count: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64
        }
    }
}

/// Play `games` games between the same two strategies.
///
/// `on_game` runs after every finished game, e.g. to advance a progress bar.
pub fn play_match(
    x: &mut dyn Strategy,
    o: &mut dyn Strategy,
    games: usize,
    mut on_game: impl FnMut(&Game),
) -> Result<MatchSummary> {
    let mut summary = MatchSummary::default();
    for _ in 0..games {
        let game = play_game(x, o)?;
        if let Some(outcome) = game.outcome() {
            summary.record(outcome);
        }
        on_game(&game);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_self_play_draws() {
        let game = play_game(&mut OptimalStrategy, &mut OptimalStrategy).unwrap();
        assert_eq!(game.outcome(), Some(Outcome::Draw));
        assert_eq!(game.moves.len(), 9);
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let board = Board::new();
        let mut a = RandomStrategy::with_seed(7);
        let mut b = RandomStrategy::with_seed(7);
        for _ in 0..5 {
            assert_eq!(a.choose_move(&board).unwrap(), b.choose_move(&board).unwrap());
        }
    }

    #[test]
    fn test_strategies_refuse_terminal_boards() {
        let won = Board::from_string("XXX/OO./...").unwrap();
        assert!(matches!(
            OptimalStrategy.choose_move(&won),
            Err(crate::Error::NoValidMoves)
        ));
        assert!(matches!(
            RandomStrategy::with_seed(1).choose_move(&won),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_optimal_never_loses_to_random() {
        for seed in 0..5 {
            let mut random = RandomStrategy::with_seed(seed);
            let game = play_game(&mut OptimalStrategy, &mut random).unwrap();
            assert_ne!(game.outcome(), Some(Outcome::Win(Player::O)));
        }
    }

    #[test]
    fn test_kind_builds_named_strategy() {
        assert_eq!(StrategyKind::Optimal.build(None).name(), "optimal");
        assert_eq!(StrategyKind::Random.build(Some(3)).name(), "random");
    }

    #[test]
    fn test_match_summary() {
        let mut played = 0;
        let summary = play_match(
            &mut OptimalStrategy,
            &mut RandomStrategy::with_seed(11),
            4,
            |_| played += 1,
        )
        .unwrap();

        assert_eq!(played, 4);
        assert_eq!(summary.games, 4);
        assert_eq!(summary.o_wins, 0);
        assert_eq!(summary.x_wins + summary.draws, 4);
        assert_eq!(summary.rate(summary.o_wins), 0.0);
    }

    #[test]
    fn test_rate_before_any_game() {
        assert_eq!(MatchSummary::default().rate(0), 0.0);
    }
}
