//! Player actions and the history record kept for each accepted one.
//!
//! There are only three things a person at the table can do: roll the die,
//! bank the turn score, or start over. The presentation layer maps its
//! buttons onto `Action` and hands it to the engine.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll the die and add the face to the turn score (or bust on a 1).
    Roll,
    /// Bank the turn score into the active player's total.
    Hold,
    /// Reset everything and hand the first turn to player 1.
    NewGame,
}

impl Action {
    /// Every action, in button order.
    pub const ALL: [Action; 3] = [Action::Roll, Action::Hold, Action::NewGame];

    /// Actions that are refused once the game is over.
    #[must_use]
    pub fn requires_game_in_progress(self) -> bool {
        matches!(self, Action::Roll | Action::Hold)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::Roll => "roll",
            Action::Hold => "hold",
            Action::NewGame => "new game",
        };
        f.write_str(name)
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Rendering a move log
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Face rolled, for `Action::Roll`.
    pub face: Option<u8>,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, face: Option<u8>, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            face,
            turn,
            sequence,
        }
    }

    /// True if this record is a roll of 1.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.face == Some(1)
    }
}
