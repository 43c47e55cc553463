use anyhow::{Context, Result};
use coinflip::{GameConfig, Sequence};
use common::Config;
use serde::{Deserialize, Serialize};

use super::{
    DEFAULT_P1_NAME, DEFAULT_P1_SEQUENCE, DEFAULT_P2_NAME, DEFAULT_P2_SEQUENCE,
    DEFAULT_PROGRESS_INTERVAL, DEFAULT_RUNS,
};

/// Unvalidated simulation settings as read from config, environment or the command line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ArenaOptions {
    pub runs: u64,
    pub p1_name: String,
    pub p2_name: String,
    pub p1_sequence: String,
    pub p2_sequence: String,
    pub seed: Option<u64>,
    pub progress_interval: u64,
}

impl ArenaOptions {
    /// Parses both sequences and checks that they can be raced against each other.
    pub fn game_config(&self) -> Result<GameConfig> {
        let p1_sequence: Sequence = self
            .p1_sequence
            .parse()
            .with_context(|| format!("Invalid sequence for {}", self.p1_name))?;

        let p2_sequence: Sequence = self
            .p2_sequence
            .parse()
            .with_context(|| format!("Invalid sequence for {}", self.p2_name))?;

        let game_config = GameConfig::new(
            self.runs,
            self.p1_name.clone(),
            self.p2_name.clone(),
            p1_sequence,
            p2_sequence,
        )?;

        Ok(game_config)
    }
}

impl Default for ArenaOptions {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            p1_name: DEFAULT_P1_NAME.to_string(),
            p2_name: DEFAULT_P2_NAME.to_string(),
            p1_sequence: DEFAULT_P1_SEQUENCE.to_string(),
            p2_sequence: DEFAULT_P2_SEQUENCE.to_string(),
            seed: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl Config for ArenaOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        Ok(Self {
            runs: config
                .get("runs")
                .and_then(|v| v.as_u64())
                .unwrap_or(DEFAULT_RUNS),
            p1_name: config
                .get("p1_name")
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| DEFAULT_P1_NAME.to_string()),
            p2_name: config
                .get("p2_name")
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| DEFAULT_P2_NAME.to_string()),
            p1_sequence: config
                .get("p1_sequence")
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| DEFAULT_P1_SEQUENCE.to_string()),
            p2_sequence: config
                .get("p2_sequence")
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| DEFAULT_P2_SEQUENCE.to_string()),
            seed: config.get("seed").and_then(|v| v.as_u64()),
            progress_interval: config
                .get("progress_interval")
                .and_then(|v| v.as_u64())
                .unwrap_or(DEFAULT_PROGRESS_INTERVAL),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinflip::ConfigError;
    use common::ConfigLoader;

    fn load(config: &str) -> ArenaOptions {
        ConfigLoader::from_hocon_str(config, "arena".to_string(), "ARENA_OPTIONS_TEST".to_string())
            .unwrap()
            .load()
            .unwrap()
    }

    #[test]
    fn test_load_defaults() {
        assert_eq!(load("{}"), ArenaOptions::default());
    }

    #[test]
    fn test_load_scoped_values() {
        let options = load(
            r#"
            arena {
                runs = 25
                p1_name = "Ann"
                p1_sequence = ["tails", "tails", "heads"]
                seed = 4
            }
            "#,
        );

        assert_eq!(options.runs, 25);
        assert_eq!(options.p1_name, "Ann");
        assert_eq!(options.p2_name, DEFAULT_P2_NAME);
        assert_eq!(options.p1_sequence, "tails,tails,heads");
        assert_eq!(options.seed, Some(4));
    }

    #[test]
    fn test_default_options_make_a_valid_game() {
        let game_config = ArenaOptions::default().game_config().unwrap();

        assert_eq!(game_config.runs(), DEFAULT_RUNS);
        assert_eq!(game_config.p1_sequence().to_string(), DEFAULT_P1_SEQUENCE);
        assert_eq!(game_config.p2_sequence().to_string(), DEFAULT_P2_SEQUENCE);
    }

    #[test]
    fn test_game_config_rejects_unequal_lengths() {
        let options = ArenaOptions {
            p2_sequence: "heads,tails".to_string(),
            ..ArenaOptions::default()
        };

        let err = options.game_config().unwrap_err();

        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::UnequalLengths { p1: 3, p2: 2 })
        );
    }

    #[test]
    fn test_game_config_rejects_invalid_faces() {
        let options = ArenaOptions {
            p1_sequence: "heads,sideways,heads".to_string(),
            ..ArenaOptions::default()
        };

        let err = options.game_config().unwrap_err();

        assert!(format!("{:#}", err).contains("heads or tails"));
    }
}
