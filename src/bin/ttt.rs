//! ttt - play and analyse Tic-Tac-Toe with an exhaustive minimax solver

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tictactoe_minimax::cli::commands::{matchup, play, solve};

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Tic-Tac-Toe with a perfect minimax opponent", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play(play::PlayArgs),

    /// Analyse a position
    Solve(solve::SolveArgs),

    /// Run a match between two strategies
    Match(matchup::MatchArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => play::execute(args),
        Commands::Solve(args) => solve::execute(args),
        Commands::Match(args) => matchup::execute(args),
    }
}
