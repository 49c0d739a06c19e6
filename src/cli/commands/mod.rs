//! Subcommands of the `ttt` binary

pub mod matchup;
pub mod play;
pub mod solve;
