//! Game state.
//!
//! ## GameState
//!
//! Everything the table shows, held as plain integers:
//! - Active player and the turn's unbanked score
//! - Banked totals per player
//! - Whether the game has been won
//! - Turn counter and action history
//!
//! The state is owned by `PigEngine`; callers only ever see it by shared
//! reference or inside a snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::WINNING_SCORE;
use super::player::{PlayerId, PlayerPair};
use crate::rules::{GameResult, Phase};

/// Complete game state.
///
/// Uses `im::Vector` for history so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player whose roll/hold actions currently affect state.
    pub active_player: PlayerId,

    /// Unbanked points accumulated this turn.
    pub current_score: u32,

    /// Banked score per player.
    pub totals: PlayerPair<u32>,

    /// Set once a hold brings a total to `WINNING_SCORE`.
    pub game_over: bool,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Action sequence within turn.
    pub action_sequence: u32,

    /// Accepted actions since the last new game.
    pub history: Vector<ActionRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the opening state: player 1 to move, every score zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_player: PlayerId::FIRST,
            current_score: 0,
            totals: PlayerPair::with_value(0),
            game_over: false,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    /// Banked total for a player.
    #[must_use]
    pub fn total(&self, player: PlayerId) -> u32 {
        self.totals[player]
    }

    /// Unbanked score shown for a player; zero unless it is their turn.
    #[must_use]
    pub fn current_score_of(&self, player: PlayerId) -> u32 {
        if player == self.active_player {
            self.current_score
        } else {
            0
        }
    }

    /// Banked total plus anything still at risk this turn.
    #[must_use]
    pub fn standing(&self, player: PlayerId) -> u32 {
        self.totals[player] + self.current_score_of(player)
    }

    /// Whether a banked total has reached the winning threshold.
    #[must_use]
    pub fn has_reached_goal(&self, player: PlayerId) -> bool {
        self.totals[player] >= WINNING_SCORE
    }

    /// Current state machine state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver {
                winner: self.active_player,
            }
        } else {
            Phase::Turn(self.active_player)
        }
    }

    /// Result of a finished game, `None` while play continues.
    ///
    /// The winner is the player who made the winning hold; the turn is not
    /// passed after a win, so that is still the active player.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.game_over.then_some(GameResult::Winner(self.active_player))
    }

    // === Turn Advancement ===

    /// Pass the turn to the other player, dropping any unbanked score.
    pub fn switch_player(&mut self) {
        self.active_player = self.active_player.other();
        self.current_score = 0;
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    // === Action History ===

    /// Record an action in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }
}
