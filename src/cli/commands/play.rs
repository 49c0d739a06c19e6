//! Play command - a human against the computer on the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::{info, warn};

use crate::{
    cli::output::render_board,
    strategy::{Strategy, StrategyKind},
    tictactoe::{Game, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    /// Which side the human plays (`x` moves first)
    #[arg(long, default_value = "x", value_parser = parse_player_token)]
    pub human: Player,

    /// How the computer chooses its moves
    #[arg(long, short = 'c', value_enum, default_value_t = StrategyKind::Optimal)]
    pub computer: StrategyKind,

    /// Random seed for the random computer
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut computer = args.computer.build(args.seed);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), args.human, computer.as_mut())?;
    Ok(())
}

/// Parse `x` or `o` (any case) into a player
pub fn parse_player_token(value: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" => Ok(Player::O),
        other => Err(anyhow!("expected 'x' or 'o', got '{other}'")),
    }
}

/// Parse a move typed by the human.
///
/// Accepts a cell number `1`-`9` (row-major, as drawn on the board) or a
/// zero-based `row col` pair separated by a space or comma.
pub fn parse_move(input: &str) -> Result<Move> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => {
            let number: usize = cell.parse().map_err(|_| anyhow!("'{cell}' is not a number"))?;
            if !(1..=9).contains(&number) {
                return Err(anyhow!("cell number must be 1-9, got {number}"));
            }
            Ok(Move::from_index(number - 1)?)
        }
        [row, col] => {
            let row: usize = row.parse().map_err(|_| anyhow!("'{row}' is not a row"))?;
            let col: usize = col.parse().map_err(|_| anyhow!("'{col}' is not a column"))?;
            Ok(Move::new(row, col)?)
        }
        _ => Err(anyhow!("enter a cell 1-9 or 'row col'")),
    }
}

/// Run one interactive game.
///
/// Returns the outcome, or `None` if the human quit (`q` or end of input).
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    human: Player,
    computer: &mut dyn Strategy,
) -> Result<Option<Outcome>> {
    let mut game = Game::new();
    info!(%human, computer = computer.name(), "starting game");
    writeln!(output, "You are {human}. Enter a cell 1-9 or 'row col'; 'q' quits.")?;

    while !game.is_over() {
        let board = game.current_state();
        let to_move = board.side_to_move();

        if to_move != human {
            let mv = computer.choose_move(&board)?;
            game.play(mv)?;
            writeln!(output, "\nComputer ({to_move}) plays {mv}")?;
            continue;
        }

        writeln!(output, "\n{}\n", render_board(&board))?;
        write!(output, "{to_move} to move> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        let attempt = parse_move(line).and_then(|mv| Ok(game.play(mv)?));
        if let Err(e) = attempt {
            warn!(input = line, error = %e, "rejected move");
            writeln!(output, "{e}")?;
        }
    }

    writeln!(output, "\n{}\n", render_board(&game.current_state()))?;
    let outcome = game.outcome();
    match outcome {
        Some(Outcome::Win(player)) if player == human => writeln!(output, "You win!")?,
        Some(Outcome::Win(player)) => writeln!(output, "{player} wins.")?,
        Some(Outcome::Draw) => writeln!(output, "Draw.")?,
        None => {}
    }
    info!(outcome = ?outcome, "game finished");
    Ok(outcome)
}
