//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats at the table.
//!
//! ## PlayerPair
//!
//! Fixed-size per-player storage backed by `[T; 2]`, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::GameError;

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
/// Only `0` and `1` are valid; `PlayerId::new` enforces this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who opens every game.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < PLAYER_COUNT as u8, "PlayerId must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent of this player.
    ///
    /// ```
    /// use pig_dice::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs in seat order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }

    /// 1-based seat number, as shown to people at the table.
    #[must_use]
    pub const fn seat(self) -> u8 {
        self.0 + 1
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(GameError::InvalidPlayer(id))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.seat())
    }
}

/// Per-player data storage for exactly two players.
///
/// ## Example
///
/// ```
/// use pig_dice::core::{PlayerId, PlayerPair};
///
/// let mut totals: PlayerPair<u32> = PlayerPair::with_value(0);
/// totals[PlayerId::SECOND] += 12;
///
/// assert_eq!(totals[PlayerId::FIRST], 0);
/// assert_eq!(totals[PlayerId::SECOND], 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Raw values in seat order.
    #[must_use]
    pub fn as_array(&self) -> &[T; PLAYER_COUNT] {
        &self.data
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::new(1), PlayerId::SECOND);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
        assert_eq!(format!("{}", PlayerId::SECOND), "Player 2");
    }

    #[test]
    fn test_other_toggles() {
        for player in PlayerId::all() {
            assert_ne!(player.other(), player);
            assert_eq!(player.other().other(), player);
        }
    }

    #[test]
    #[should_panic(expected = "PlayerId must be 0 or 1")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_player_id_serde_rejects_third_seat() {
        let json = serde_json::to_string(&PlayerId::SECOND).unwrap();
        assert_eq!(json, "1");
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert!(matches!(PlayerId::try_from(2), Err(GameError::InvalidPlayer(2))));
    }

    #[test]
    fn test_pair_new_and_mutation() {
        let mut pair: PlayerPair<u32> = PlayerPair::new(|p| p.index() as u32 * 10);
        assert_eq!(pair[PlayerId::FIRST], 0);
        assert_eq!(pair[PlayerId::SECOND], 10);

        pair[PlayerId::FIRST] = 7;
        assert_eq!(pair.as_array(), &[7, 10]);
    }

    #[test]
    fn test_pair_iter() {
        let pair = PlayerPair::new(|p| p.seat());
        let pairs: Vec<_> = pair.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &1), (PlayerId::SECOND, &2)]);
    }

    #[test]
    fn test_pair_serialization() {
        let pair: PlayerPair<u32> = PlayerPair::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
