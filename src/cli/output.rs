//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Cell};

/// Create a progress bar for a match
pub fn create_match_progress(total_games: u64) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board with cell numbers 1-9 shown in the empty cells
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, cell)| match cell {
                    Cell::Empty => (r * 3 + c + 1).to_string(),
                    other => other.to_char().to_string(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .map(|line| format!(" {line}"))
        .collect();
    rows.join("\n---+---+---\n")
}
