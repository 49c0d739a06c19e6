//! Configuration for the `match` command

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::strategy::StrategyKind;

/// Settings for a strategy-vs-strategy match
///
/// Loaded from JSON with [`MatchConfig::load`]; any field missing from the
/// file takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Strategy playing X (moves first)
    pub x: StrategyKind,

    /// Strategy playing O
    pub o: StrategyKind,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show a progress bar
    pub progress: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            x: StrategyKind::Optimal,
            o: StrategyKind::Random,
            seed: None,
            progress: true,
        }
    }
}

impl MatchConfig {
    /// Read a config from a JSON file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or parsed, or if it asks for
    /// zero games.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: MatchConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.games == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "games must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
