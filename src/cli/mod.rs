//! CLI infrastructure for the `ttt` binary
//!
//! This module provides the command-line interface for playing against the
//! solver, analysing positions and running strategy matches.

pub mod commands;
pub mod config;
pub mod output;
