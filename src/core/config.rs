//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Banked total at which a player wins.
pub const WINNING_SCORE: u32 = 100;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dice seed. `None` seeds from OS entropy.
    /// Same seed produces the same sequence of rolls.
    pub seed: Option<u64>,

    /// Whether accepted actions are appended to the state's history.
    pub record_history: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            record_history: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a fixed dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with history recording turned on or off.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert!(config.record_history);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default().with_seed(123).with_history(false);

        assert_eq!(config.seed, Some(123));
        assert!(!config.record_history);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
