//! Deterministic dice generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Serializable**: O(1) state capture and restore
//! - **Injectable**: the engine rolls through the `DieRoller` trait, so
//!   presentation demos and tests can script the dice
//!
//! ```
//! use pig_dice::core::{DieRoller, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! for _ in 0..20 {
//!     let face = a.roll();
//!     assert!((1..=6).contains(&face));
//!     assert_eq!(face, b.roll());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Lowest face on a die.
pub const MIN_FACE: u8 = 1;

/// Highest face on a die.
pub const MAX_FACE: u8 = 6;

/// Source of die faces.
///
/// Implementations must return a value in `MIN_FACE..=MAX_FACE`. The engine
/// checks this and refuses the roll otherwise.
pub trait DieRoller {
    /// Roll one die.
    fn roll(&mut self) -> u8;
}

/// Seeded dice RNG.
///
/// Uses ChaCha8 for speed while keeping a uniform, reproducible draw.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is kept, so the game can still be snapshotted and replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DieRoller for GameRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(MIN_FACE..=MAX_FACE)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture cost does not grow with the
/// number of rolls already made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Dice that replay a fixed list of faces, cycling when exhausted.
///
/// ```
/// use pig_dice::core::{DieRoller, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([3, 4]);
/// assert_eq!(dice.roll(), 3);
/// assert_eq!(dice.roll(), 4);
/// assert_eq!(dice.roll(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create scripted dice. `faces` must be non-empty.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: Vec<u8> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "ScriptedDice needs at least one face");
        Self { faces, cursor: 0 }
    }

    /// Number of faces rolled so far.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.cursor
    }
}

impl DieRoller for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

impl<R: DieRoller + ?Sized> DieRoller for Box<R> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}
