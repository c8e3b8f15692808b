//! # pig-dice
//!
//! Engine for Pig, a two-player accumulate-or-bust dice game.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine renders nothing. Every change is reported
//!    as a `GameEvent`; a presentation layer turns those into text, dice
//!    images and active-player highlighting.
//!
//! 2. **Explicit State**: One owned `GameState` holding integers, mutated
//!    only by roll, hold and new game.
//!
//! 3. **Reproducible Dice**: Seeded ChaCha8 dice behind the `DieRoller`
//!    trait; snapshots capture the RNG position.
//!
//! ## Modules
//!
//! - `core`: Players, dice, actions, configuration, state
//! - `events`: Notifications and observers
//! - `rules`: State machine phases and the `RulesEngine` trait
//! - `engine`: `PigEngine` and snapshots
//!
//! ## Example
//!
//! ```
//! use pig_dice::{EngineConfig, EventLog, PigEngine, PlayerId, RulesEngine, ScriptedDice};
//!
//! let log = EventLog::new();
//! let mut engine = PigEngine::with_dice(EngineConfig::default(), ScriptedDice::new([3, 4]));
//! engine.subscribe(log.clone());
//!
//! engine.roll_dice();
//! engine.roll_dice();
//! engine.hold();
//!
//! assert_eq!(engine.state().total(PlayerId::FIRST), 7);
//! assert_eq!(engine.state().active_player, PlayerId::SECOND);
//! assert_eq!(log.len(), 7);
//! ```

pub mod core;
pub mod events;
pub mod rules;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerPair,
    DieRoller, GameRng, GameRngState, ScriptedDice,
    EngineConfig, WINNING_SCORE,
    Action, ActionRecord,
    GameState,
};

pub use crate::events::{Events, GameEvent, GameObserver, EventLog, TracingObserver};

pub use crate::rules::{GameResult, Phase, RulesEngine};

pub use crate::engine::{GameSnapshot, PigEngine};

pub use crate::error::GameError;
