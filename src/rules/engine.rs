//! Rules engine trait and the state machine's vocabulary.
//!
//! - `Phase`: whose turn it is, or that the game is over
//! - `GameResult`: outcome of a finished game
//! - `RulesEngine`: what an action driver (UI, replay tool, test) needs

use serde::{Deserialize, Serialize};

use crate::core::{Action, GameState, PlayerId};
use crate::error::GameError;
use crate::events::Events;

/// State machine states.
///
/// Play alternates between `Turn(FIRST)` and `Turn(SECOND)`; a winning hold
/// moves to `GameOver`, which only a new game leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The given player is rolling.
    Turn(PlayerId),
    /// The given player has won; waiting for a new game.
    GameOver { winner: PlayerId },
}

impl Phase {
    /// Check if this is the terminal state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver { .. })
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: refuse `Roll`/`Hold` with `GameError::GameOver` once
///   the game is won, leaving state untouched
/// - `apply_action`: `NewGame` is always accepted
/// - Returned events are in emission order
pub trait RulesEngine {
    /// Get the current state.
    fn state(&self) -> &GameState;

    /// Apply an action, returning the notifications it produced.
    fn apply_action(&mut self, action: Action) -> Result<Events, GameError>;

    // === Convenience Methods ===

    /// Current state machine state.
    fn phase(&self) -> Phase {
        self.state().phase()
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult> {
        self.state().result()
    }

    /// Actions the engine will accept right now.
    fn legal_actions(&self) -> Vec<Action> {
        if self.state().game_over {
            vec![Action::NewGame]
        } else {
            Action::ALL.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::SECOND);
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));
    }

    #[test]
    fn test_phase_is_terminal() {
        assert!(!Phase::Turn(PlayerId::FIRST).is_terminal());
        assert!(!Phase::Turn(PlayerId::SECOND).is_terminal());
        assert!(Phase::GameOver { winner: PlayerId::FIRST }.is_terminal());
    }
}
