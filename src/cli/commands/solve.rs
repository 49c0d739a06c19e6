//! Solve command - minimax analysis of a single position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{print_kv, print_section},
    search::{evaluate_moves, optimal_move},
    tictactoe::{Board, LineAnalyzer, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax value of every move in a position")]
pub struct SolveArgs {
    /// Board as 9 cells in row-major order, e.g. "XX./OO./..." (default: empty board)
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Print the analysis as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Everything `solve` reports about a position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub board: String,
    pub outcome: Option<Outcome>,
    pub to_move: Option<Player>,
    pub value: Option<i32>,
    pub best_move: Option<Move>,
    pub move_values: Vec<ScoredMove>,
    pub immediate_wins: Vec<Move>,
    pub threats_to_block: Vec<Move>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    #[serde(rename = "move")]
    pub mv: Move,
    pub value: i32,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = match &args.board {
        Some(s) => Board::from_string(s)?,
        None => Board::new(),
    };
    let analysis = analyze(&board);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_section("Position");
    println!("{board}");

    if let Some(outcome) = analysis.outcome {
        let result = match outcome {
            Outcome::Win(player) => format!("{player} has won"),
            Outcome::Draw => "draw".to_string(),
        };
        print_kv("Result", &result);
        print_kv("Utility", &outcome.utility().to_string());
        return Ok(());
    }

    if let Some(player) = analysis.to_move {
        print_kv("To move", &player.to_string());
    }
    if let Some(value) = analysis.value {
        print_kv("Minimax value", &describe_value(value));
    }
    if !analysis.immediate_wins.is_empty() {
        print_kv("Immediate wins", &join_moves(&analysis.immediate_wins));
    }
    if !analysis.threats_to_block.is_empty() {
        print_kv("Threats to block", &join_moves(&analysis.threats_to_block));
    }

    print_section("Moves (value for X)");
    for scored in &analysis.move_values {
        let marker = if Some(scored.mv) == analysis.best_move {
            "  <- optimal"
        } else {
            ""
        };
        println!("  {} {:>3}{marker}", scored.mv, scored.value);
    }

    Ok(())
}

/// Run the full minimax analysis of `board`
pub fn analyze(board: &Board) -> Analysis {
    let outcome = board.outcome();
    if outcome.is_some() {
        return Analysis {
            board: board.encode(),
            outcome,
            to_move: None,
            value: outcome.map(Outcome::utility),
            best_move: None,
            move_values: Vec::new(),
            immediate_wins: Vec::new(),
            threats_to_block: Vec::new(),
        };
    }

    let to_move = board.side_to_move();
    let move_values: Vec<ScoredMove> = evaluate_moves(board)
        .into_iter()
        .map(|(mv, value)| ScoredMove { mv, value })
        .collect();
    let value = match to_move {
        Player::X => move_values.iter().map(|s| s.value).max(),
        Player::O => move_values.iter().map(|s| s.value).min(),
    };

    Analysis {
        board: board.encode(),
        outcome: None,
        to_move: Some(to_move),
        value,
        best_move: optimal_move(board),
        move_values,
        immediate_wins: LineAnalyzer::winning_moves(board.cells(), to_move),
        threats_to_block: LineAnalyzer::winning_moves(board.cells(), to_move.opponent()),
    }
}

fn describe_value(value: i32) -> String {
    match value {
        1 => "+1 (X wins)".to_string(),
        -1 => "-1 (O wins)".to_string(),
        0 => "0 (draw)".to_string(),
        other => other.to_string(),
    }
}

fn join_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
