//! Game notifications.
//!
//! The engine renders nothing. Every state change is reported as a
//! `GameEvent` and the presentation layer decides how it looks: score
//! text, a dice image, highlighting the active player.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Events produced by a single action.
///
/// The largest batch is a new game (six events), so no action allocates.
pub type Events = SmallVec<[GameEvent; 6]>;

/// A notification for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// The die landed on `face` (1..=6).
    DiceRolled { face: u8 },

    /// The unbanked score shown for `player` is now `value`.
    CurrentScoreChanged { player: PlayerId, value: u32 },

    /// The banked total for `player` is now `value`.
    TotalScoreChanged { player: PlayerId, value: u32 },

    /// `active_player` now has the turn; the other player is inactive.
    TurnSwitched { active_player: PlayerId },

    /// `player` reached the winning score.
    PlayerWon { player: PlayerId },

    /// All state was reset for a new game.
    GameReset,
}

impl GameEvent {
    /// The player this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match *self {
            GameEvent::CurrentScoreChanged { player, .. }
            | GameEvent::TotalScoreChanged { player, .. }
            | GameEvent::PlayerWon { player } => Some(player),
            GameEvent::TurnSwitched { active_player } => Some(active_player),
            GameEvent::DiceRolled { .. } | GameEvent::GameReset => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::DiceRolled { face } => write!(f, "Rolled a {}", face),
            GameEvent::CurrentScoreChanged { player, value } => {
                write!(f, "{} current score: {}", player, value)
            }
            GameEvent::TotalScoreChanged { player, value } => {
                write!(f, "{} total score: {}", player, value)
            }
            GameEvent::TurnSwitched { active_player } => write!(f, "{} to play", active_player),
            GameEvent::PlayerWon { player } => write!(f, "{} won", player),
            GameEvent::GameReset => f.write_str("New game"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_one_based() {
        let won = GameEvent::PlayerWon { player: PlayerId::FIRST };
        assert_eq!(won.to_string(), "Player 1 won");

        let switched = GameEvent::TurnSwitched { active_player: PlayerId::SECOND };
        assert_eq!(switched.to_string(), "Player 2 to play");

        let rolled = GameEvent::DiceRolled { face: 5 };
        assert_eq!(rolled.to_string(), "Rolled a 5");
    }

    #[test]
    fn test_player() {
        let total = GameEvent::TotalScoreChanged { player: PlayerId::SECOND, value: 10 };
        assert_eq!(total.player(), Some(PlayerId::SECOND));
        assert_eq!(GameEvent::GameReset.player(), None);
        assert_eq!(GameEvent::DiceRolled { face: 2 }.player(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::CurrentScoreChanged { player: PlayerId::FIRST, value: 7 };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
