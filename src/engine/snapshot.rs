//! In-memory checkpoints of a running game.
//!
//! A snapshot holds the state plus the RNG position, so a restored engine
//! rolls exactly the dice the original would have rolled next.

use serde::{Deserialize, Serialize};

use super::game::PigEngine;
use crate::core::{EngineConfig, GameRng, GameRngState, GameState};
use crate::error::GameError;

/// Serializable checkpoint of a `PigEngine<GameRng>`.
///
/// Observers are not part of a snapshot; subscribe again after restoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: EngineConfig,
    pub state: GameState,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl PigEngine<GameRng> {
    /// Capture the current game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config().clone(),
            state: self.state.clone(),
            rng: self.dice.state(),
        }
    }

    /// Rebuild an engine from a snapshot.
    #[must_use]
    pub fn restore(snapshot: &GameSnapshot) -> Self {
        Self::from_parts(
            snapshot.config.clone(),
            snapshot.state.clone(),
            GameRng::from_state(&snapshot.rng),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::rules::RulesEngine;

    fn played_engine() -> PigEngine<GameRng> {
        let mut engine = PigEngine::new(EngineConfig::default().with_seed(7));
        for i in 0..12 {
            if i % 4 == 3 {
                engine.hold();
            } else {
                engine.roll_dice();
            }
        }
        engine
    }

    #[test]
    fn test_restore_continues_identically() {
        let mut original = played_engine();
        let mut restored = PigEngine::restore(&original.snapshot());

        assert_eq!(original.state(), restored.state());
        for _ in 0..20 {
            assert_eq!(original.roll_dice(), restored.roll_dice());
        }
        assert_eq!(original.state(), restored.state());
    }

    #[test]
    fn test_bytes_round_trip() {
        let engine = played_engine();
        let snapshot = engine.snapshot();

        let bytes = snapshot.to_bytes().unwrap();
        let decoded = GameSnapshot::from_bytes(&bytes).unwrap();

        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn test_corrupt_bytes_rejected() {
        let result = GameSnapshot::from_bytes(&[0xFF, 0x01]);
        assert!(matches!(result, Err(GameError::Snapshot(_))));
    }

    #[test]
    fn test_snapshot_is_independent_of_engine() {
        let mut engine = played_engine();
        let snapshot = engine.snapshot();
        let totals = *snapshot.state.totals.as_array();

        engine.new_game();

        assert_eq!(snapshot.state.totals.as_array(), &totals);
        assert_eq!(engine.state().total(PlayerId::FIRST), 0);
    }
}
