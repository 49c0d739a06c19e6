//! Match command - play two strategies against each other

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::{
        config::MatchConfig,
        output::{create_match_progress, print_kv, print_section},
    },
    strategy::{MatchSummary, StrategyKind, play_match},
};

#[derive(Parser, Debug)]
#[command(about = "Play a series of games between two strategies")]
pub struct MatchArgs {
    /// JSON file with match settings; flags given here take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Strategy playing X
    #[arg(long, short = 'x', value_enum)]
    pub x: Option<StrategyKind>,

    /// Strategy playing O
    #[arg(long, short = 'o', value_enum)]
    pub o: Option<StrategyKind>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export the summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct MatchExport<'a> {
    config: &'a MatchConfig,
    summary: MatchSummary,
}

/// Merge the optional config file with command-line overrides
pub fn resolve_config(args: &MatchArgs) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };

    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(x) = args.x {
        config.x = x;
    }
    if let Some(o) = args.o {
        config.o = o;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_progress {
        config.progress = false;
    }

    config.validate()?;
    Ok(config)
}

pub fn execute(args: MatchArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let summary = run(&config)?;

    print_section("Match Results");
    print_kv("X", &config.x.to_string());
    print_kv("O", &config.o.to_string());
    print_kv("Games", &summary.games.to_string());
    for (label, count) in [
        ("X wins", summary.x_wins),
        ("O wins", summary.o_wins),
        ("Draws", summary.draws),
    ] {
        print_kv(
            label,
            &format!("{count} ({:.1}%)", summary.rate(count) * 100.0),
        );
    }

    if let Some(path) = &args.export {
        export_summary(&config, summary, path)?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}

/// Play the configured match
pub fn run(config: &MatchConfig) -> Result<MatchSummary> {
    info!(games = config.games, x = %config.x, o = %config.o, seed = ?config.seed, "starting match");

    // Distinct streams so a random-vs-random match is not two copies of one game
    let mut x = config.x.build(config.seed);
    let mut o = config.o.build(config.seed.map(|s| s.wrapping_add(1)));

    let progress = if config.progress {
        Some(create_match_progress(config.games as u64)?)
    } else {
        None
    };

    let summary = play_match(x.as_mut(), o.as_mut(), config.games, |game| {
        if let Some(pb) = &progress {
            pb.set_message(format!("{:?}", game.outcome()));
            pb.inc(1);
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }
    info!(?summary, "match finished");
    Ok(summary)
}

/// Write the config and summary as pretty JSON
pub fn export_summary(config: &MatchConfig, summary: MatchSummary, path: &PathBuf) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create export file {}", path.display()))?;
    serde_json::to_writer_pretty(file, &MatchExport { config, summary })?;
    Ok(())
}
